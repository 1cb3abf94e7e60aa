pub mod colour_mapping;
pub mod data;
pub mod escape_time;
pub mod ports;
pub mod render;
pub mod util;
pub mod viewport;
