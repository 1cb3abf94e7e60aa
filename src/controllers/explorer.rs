use crate::core::colour_mapping::gradient::ColourEndpoints;
use crate::core::data::framebuffer::Framebuffer;
use crate::core::ports::image_filters::ImageFilters;
use crate::core::ports::theme::ThemeColours;
use crate::core::render::frame_renderer::FrameRenderer;
use crate::core::viewport::state::ViewportState;
use crate::core::viewport::transitions::{PanDirection, on_char, on_key};

/// One interactive viewing session: viewport, renderer, and the two
/// outbound ports, wired for a hosting event loop.
///
/// The host delivers character and directional key events and asks for
/// frames; the session performs no framework registration of its own.
/// Transition methods return whether the host should schedule a redraw.
pub struct ExplorerSession<T: ThemeColours, F: ImageFilters> {
    viewport: ViewportState,
    renderer: FrameRenderer,
    theme: T,
    filters: F,
}

impl<T: ThemeColours, F: ImageFilters> ExplorerSession<T, F> {
    #[must_use]
    pub fn new(theme: T, filters: F) -> Self {
        Self {
            viewport: ViewportState::default(),
            renderer: FrameRenderer::new(),
            theme,
            filters,
        }
    }

    /// Character input: zoom, filter selection, filter reset.
    pub fn on_char(&mut self, ch: char) -> bool {
        on_char(&mut self.viewport, ch)
    }

    /// Directional input: pans the view.
    pub fn on_key(&mut self, direction: PanDirection) -> bool {
        on_key(&mut self.viewport, direction)
    }

    /// Output surface size changed; the framebuffer is reallocated and
    /// the next draw recomputes from scratch.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height, &mut self.viewport);
    }

    /// Renders (or re-filters) and returns the frame to display.
    pub fn draw(&mut self) -> &Framebuffer {
        let endpoints = ColourEndpoints::from_theme(&self.theme);

        self.renderer
            .render(&mut self.viewport, &endpoints, &self.filters)
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }
}
