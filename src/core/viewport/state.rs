use crate::core::viewport::filter_mode::FilterMode;

/// Iteration budget at scale >= 1.0 and the base the deep-zoom curve
/// grows from.
pub const BASE_ITERATIONS: u32 = 100;

const DEFAULT_SCALE: f64 = 1.0;
const DEFAULT_CENTRE_X: f64 = -0.75;
const DEFAULT_CENTRE_Y: f64 = 0.0;

/// The current mapping from output pixels to the complex plane, plus the
/// render bookkeeping the interaction layer mutates.
///
/// Invariants: `scale > 0` always (transitions only multiply or divide by
/// 1.1), and `max_iterations` is a pure function of `scale`, recomputed
/// after every transition rather than set independently.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    /// Zoom factor; smaller is deeper.
    pub scale: f64,
    pub centre_x: f64,
    pub centre_y: f64,
    /// Per-pixel iteration budget, derived from `scale`.
    pub max_iterations: u32,
    pub filter: FilterMode,
    /// Set when the framebuffer no longer matches this state.
    pub dirty: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            centre_x: DEFAULT_CENTRE_X,
            centre_y: DEFAULT_CENTRE_Y,
            max_iterations: BASE_ITERATIONS,
            filter: FilterMode::None,
            dirty: true,
        }
    }
}

/// Iteration budget for a given zoom scale.
///
/// Flat at 100 until the view zooms past scale 1.0, then grows as
/// `100 * (1 + log10(1/scale)^1.25)`, truncated: escape boundaries need
/// more iterations to resolve at finer scale.
#[must_use]
pub fn iteration_budget(scale: f64) -> u32 {
    if scale >= 1.0 {
        BASE_ITERATIONS
    } else {
        let depth = (1.0 / scale).log10();
        (f64::from(BASE_ITERATIONS) * (1.0 + depth.powf(1.25))) as u32
    }
}
