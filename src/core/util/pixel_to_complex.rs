use crate::core::data::complex::Complex;
use crate::core::viewport::state::ViewportState;

/// The complex-plane span of the frame at scale 1.0.
const BASE_DRAW_SCALE: f64 = 3.5;

/// Maps a pixel position in a `width` x `height` frame to the complex
/// plane under the given viewport.
///
/// Width is the divisor for both axes: zoom stays isotropic in pixel
/// units while the frame may be non-square, with the aspect ratio only
/// re-centring the imaginary axis. Callers guarantee `width > 0`; the
/// renderer never maps pixels of a degenerate frame.
#[must_use]
pub fn pixel_to_complex(
    px: u32,
    py: u32,
    width: u32,
    height: u32,
    viewport: &ViewportState,
) -> Complex {
    let draw_scale = BASE_DRAW_SCALE * viewport.scale;
    let w = f64::from(width);
    let aspect = f64::from(height) / w;

    Complex {
        re: (f64::from(px) / w - 0.5) * draw_scale + viewport.centre_x,
        im: (f64::from(py) / w - 0.5 * aspect) * draw_scale - viewport.centre_y,
    }
}
