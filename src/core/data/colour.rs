/// An 8-bit-per-channel RGBA colour.
///
/// Alpha is carried so the framebuffer can be handed to an RGBA surface
/// without a conversion pass; the renderer always writes it fully opaque.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const OPAQUE_ALPHA: u8 = 0xff;

    #[must_use]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: Self::OPAQUE_ALPHA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_sets_full_alpha() {
        let colour = Colour::opaque(10, 20, 30);

        assert_eq!(colour.r, 10);
        assert_eq!(colour.g, 20);
        assert_eq!(colour.b, 30);
        assert_eq!(colour.a, 0xff);
    }
}
