/// The escape-time kernel's verdict for one pixel.
///
/// Ephemeral: produced per pixel and consumed immediately by the colour
/// mapper, never stored in the framebuffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSample {
    /// Iterations survived before the escape test fired, or the full
    /// budget if it never did.
    pub iterations: u32,
    /// Whether the orbit left the radius-2 disc within the budget.
    pub escaped: bool,
}
