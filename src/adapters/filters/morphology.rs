use crate::core::data::colour::Colour;
use crate::core::data::framebuffer::Framebuffer;

/// Dilate: each pixel becomes the per-channel maximum over the square
/// window of the given radius, brightening and thickening light regions.
pub fn dilate(frame: &Framebuffer, radius: u32) -> Framebuffer {
    morphology(frame, radius, u8::max)
}

/// Erode: per-channel minimum over the window, eating away light regions.
pub fn erode(frame: &Framebuffer, radius: u32) -> Framebuffer {
    morphology(frame, radius, u8::min)
}

fn morphology(frame: &Framebuffer, radius: u32, pick: fn(u8, u8) -> u8) -> Framebuffer {
    let mut out = Framebuffer::new(frame.width(), frame.height());
    let radius = i64::from(radius);

    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let centre = frame.pixel(x, y);
            let mut chosen = (centre.r, centre.g, centre.b);

            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let sample = frame.pixel_clamped(i64::from(x) + dx, i64::from(y) + dy);
                    chosen = (
                        pick(chosen.0, sample.r),
                        pick(chosen.1, sample.g),
                        pick(chosen.2, sample.b),
                    );
                }
            }

            out.set_pixel(x, y, Colour::opaque(chosen.0, chosen.1, chosen.2));
        }
    }

    out
}
