mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod storage;

pub use crate::adapters::filters::standard::StandardFilters;
pub use crate::adapters::theme::DefaultTheme;
pub use crate::controllers::explorer::ExplorerSession;
pub use crate::core::colour_mapping::gradient::ColourEndpoints;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::framebuffer::Framebuffer;
pub use crate::core::ports::image_filters::ImageFilters;
pub use crate::core::ports::theme::ThemeColours;
pub use crate::core::viewport::filter_mode::FilterMode;
pub use crate::core::viewport::state::ViewportState;
pub use crate::core::viewport::transitions::PanDirection;
pub use crate::storage::write_ppm::write_ppm;

#[cfg(feature = "gui")]
pub use crate::input::gui::run::RunGuiCommand;
