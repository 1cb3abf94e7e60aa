use crate::core::data::colour::Colour;

pub const BYTES_PER_PIXEL: usize = 4;

/// The RGBA backing store the frame renderer draws into.
///
/// Owned exclusively by the renderer: reallocated on resize, mutated in
/// place during a render pass, and read out by the display surface. A
/// zero-size buffer is valid and renders as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Framebuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let total_bytes = width as usize * height as usize * BYTES_PER_PIXEL;

        Self {
            width,
            height,
            data: vec![0; total_bytes],
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when either dimension is zero and there are no pixels to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row length in bytes; the unit the parallel render pass splits on.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Reads the pixel at `(x, y)`. Coordinates must be in bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        let index = self.pixel_index(x, y);

        Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
            a: self.data[index + 3],
        }
    }

    /// Reads the pixel nearest to `(x, y)`, clamping coordinates that fall
    /// outside the buffer to the nearest edge. Used by the filter adapters
    /// for kernel taps at the border.
    #[must_use]
    pub fn pixel_clamped(&self, x: i64, y: i64) -> Colour {
        let clamped_x = x.clamp(0, i64::from(self.width) - 1) as u32;
        let clamped_y = y.clamp(0, i64::from(self.height) - 1) as u32;

        self.pixel(clamped_x, clamped_y)
    }

    /// Writes the pixel at `(x, y)`. Coordinates must be in bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        let index = self.pixel_index(x, y);

        self.data[index] = colour.r;
        self.data[index + 1] = colour.g;
        self.data[index + 2] = colour.b;
        self.data[index + 3] = colour.a;
    }

    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}
