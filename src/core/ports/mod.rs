pub mod image_filters;
pub mod theme;
