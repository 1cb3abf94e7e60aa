use crate::adapters::filters::convolution::{EMBOSS_KERNEL, SHARPEN_KERNEL, convolve_3x3, sobel};
use crate::adapters::filters::hue;
use crate::adapters::filters::morphology;
use crate::core::data::framebuffer::Framebuffer;
use crate::core::ports::image_filters::ImageFilters;

/// The built-in filter set behind the renderer's filter port.
#[derive(Debug, Default)]
pub struct StandardFilters;

impl ImageFilters for StandardFilters {
    fn hue_rotate(&self, frame: &Framebuffer, degrees: f64) -> Framebuffer {
        hue::hue_rotate(frame, degrees)
    }

    fn sharpen(&self, frame: &Framebuffer) -> Framebuffer {
        convolve_3x3(frame, &SHARPEN_KERNEL)
    }

    fn dilate(&self, frame: &Framebuffer, radius: u32) -> Framebuffer {
        morphology::dilate(frame, radius)
    }

    fn emboss(&self, frame: &Framebuffer) -> Framebuffer {
        convolve_3x3(frame, &EMBOSS_KERNEL)
    }

    fn erode(&self, frame: &Framebuffer, radius: u32) -> Framebuffer {
        morphology::erode(frame, radius)
    }

    fn edge_detect(&self, frame: &Framebuffer) -> Framebuffer {
        sobel(frame)
    }
}
