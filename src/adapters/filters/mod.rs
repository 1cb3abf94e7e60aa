mod convolution;
mod hue;
mod morphology;
pub mod standard;
