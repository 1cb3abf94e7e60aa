use rayon::prelude::*;

use crate::core::colour_mapping::gradient::{ColourEndpoints, map_sample};
use crate::core::data::framebuffer::{BYTES_PER_PIXEL, Framebuffer};
use crate::core::escape_time::escape_time;
use crate::core::ports::image_filters::ImageFilters;
use crate::core::util::pixel_to_complex::pixel_to_complex;
use crate::core::viewport::filter_mode::FilterMode;
use crate::core::viewport::state::ViewportState;

/// Hue rotation amount handed to the hue filter, in degrees.
const HUE_ROTATION_DEGREES: f64 = 8.0;

/// Window radius handed to the dilate and erode filters.
const MORPHOLOGY_RADIUS: u32 = 3;

/// Owns the framebuffer and turns viewport state into displayable frames.
pub struct FrameRenderer {
    framebuffer: Framebuffer,
}

impl FrameRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            framebuffer: Framebuffer::empty(),
        }
    }

    /// Reallocates the framebuffer for a new output size, discarding the
    /// previous contents and forcing the next draw to recompute.
    pub fn resize(&mut self, width: u32, height: u32, viewport: &mut ViewportState) {
        self.framebuffer = Framebuffer::new(width, height);
        viewport.dirty = true;
    }

    /// Produces the frame to display.
    ///
    /// When dirty, every pixel is recomputed from an immutable snapshot
    /// of the viewport, rows in parallel, then the dirty flag clears.
    /// The selected filter is applied afterwards regardless of dirty
    /// state and its output becomes the new backing store, so a filter
    /// held across draws compounds. A degenerate (zero-size) frame is a
    /// no-op.
    pub fn render<F: ImageFilters>(
        &mut self,
        viewport: &mut ViewportState,
        endpoints: &ColourEndpoints,
        filters: &F,
    ) -> &Framebuffer {
        if self.framebuffer.is_empty() {
            viewport.dirty = false;
            return &self.framebuffer;
        }

        if viewport.dirty {
            self.compute_pixels(*viewport, endpoints);
            viewport.dirty = false;
        }

        self.apply_filter(viewport.filter, filters);

        &self.framebuffer
    }

    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    fn compute_pixels(&mut self, snapshot: ViewportState, endpoints: &ColourEndpoints) {
        let width = self.framebuffer.width();
        let height = self.framebuffer.height();
        let stride = self.framebuffer.stride();

        // Disjoint rows: no synchronisation needed beyond the pass barrier.
        self.framebuffer
            .data_mut()
            .par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(py, row)| {
                for (px, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                    let point = pixel_to_complex(px as u32, py as u32, width, height, &snapshot);
                    let sample = escape_time(point, snapshot.max_iterations);
                    let colour = map_sample(sample, snapshot.max_iterations, endpoints);

                    pixel[0] = colour.r;
                    pixel[1] = colour.g;
                    pixel[2] = colour.b;
                    pixel[3] = colour.a;
                }
            });
    }

    fn apply_filter<F: ImageFilters>(&mut self, mode: FilterMode, filters: &F) {
        self.framebuffer = match mode {
            FilterMode::None => return,
            FilterMode::Hue => filters.hue_rotate(&self.framebuffer, HUE_ROTATION_DEGREES),
            FilterMode::Sharpen => filters.sharpen(&self.framebuffer),
            FilterMode::Dilate => filters.dilate(&self.framebuffer, MORPHOLOGY_RADIUS),
            FilterMode::Emboss => filters.emboss(&self.framebuffer),
            FilterMode::Erode => filters.erode(&self.framebuffer, MORPHOLOGY_RADIUS),
            FilterMode::EdgeDetect => filters.edge_detect(&self.framebuffer),
        };
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}
