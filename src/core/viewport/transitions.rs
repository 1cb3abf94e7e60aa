use crate::core::viewport::filter_mode::FilterMode;
use crate::core::viewport::state::{ViewportState, iteration_budget};

/// Zoom step per `+`/`-` keypress.
const ZOOM_FACTOR: f64 = 1.1;

/// Pan step as a fraction of the current scale.
const PAN_FRACTION: f64 = 0.2;

/// A directional key delivered by the hosting display layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Applies a character keypress to the viewport.
///
/// `+`/`-` zoom and mark the frame dirty. Digits `1`-`6` swap the filter
/// without redirtying: filters re-apply to the existing framebuffer.
/// Space clears the filter AND forces a recompute, so toggling back from
/// a compounding filter refreshes the base image. Unrecognised characters
/// change nothing. The iteration budget is re-derived from the (possibly
/// new) scale, and a display refresh is always requested.
pub fn on_char(viewport: &mut ViewportState, ch: char) -> bool {
    match ch {
        '+' => {
            viewport.scale /= ZOOM_FACTOR;
            viewport.dirty = true;
        }
        '-' => {
            viewport.scale *= ZOOM_FACTOR;
            viewport.dirty = true;
        }
        '1'..='6' => {
            if let Some(mode) = FilterMode::from_digit(ch) {
                viewport.filter = mode;
            }
        }
        ' ' => {
            viewport.filter = FilterMode::None;
            viewport.dirty = true;
        }
        _ => {}
    }

    viewport.max_iterations = iteration_budget(viewport.scale);
    true
}

/// Applies a directional keypress: pans the centre by `scale * 0.2` in
/// the given direction, marks the frame dirty, re-derives the iteration
/// budget, and requests a display refresh.
pub fn on_key(viewport: &mut ViewportState, direction: PanDirection) -> bool {
    let delta = viewport.scale * PAN_FRACTION;

    match direction {
        PanDirection::Up => viewport.centre_y -= delta,
        PanDirection::Down => viewport.centre_y += delta,
        PanDirection::Left => viewport.centre_x += delta,
        PanDirection::Right => viewport.centre_x -= delta,
    }

    viewport.dirty = true;
    viewport.max_iterations = iteration_budget(viewport.scale);
    true
}
