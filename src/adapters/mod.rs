pub mod filters;
pub mod theme;
