pub mod frame_renderer;
