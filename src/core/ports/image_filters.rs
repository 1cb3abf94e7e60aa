use crate::core::data::framebuffer::Framebuffer;

/// Port to the external image post-processing filters.
///
/// Each method is an opaque same-size image transform: the renderer hands
/// over its framebuffer and stores whatever comes back, so a filter held
/// across draws compounds on its own output. Implementations must return
/// a frame of identical dimensions.
pub trait ImageFilters {
    fn hue_rotate(&self, frame: &Framebuffer, degrees: f64) -> Framebuffer;

    fn sharpen(&self, frame: &Framebuffer) -> Framebuffer;

    fn dilate(&self, frame: &Framebuffer, radius: u32) -> Framebuffer;

    fn emboss(&self, frame: &Framebuffer) -> Framebuffer;

    fn erode(&self, frame: &Framebuffer, radius: u32) -> Framebuffer;

    fn edge_detect(&self, frame: &Framebuffer) -> Framebuffer;
}
