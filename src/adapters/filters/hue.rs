use crate::core::data::colour::Colour;
use crate::core::data::framebuffer::Framebuffer;

/// Rotates every pixel's hue by `degrees`, leaving saturation and value
/// untouched.
pub fn hue_rotate(frame: &Framebuffer, degrees: f64) -> Framebuffer {
    let mut out = Framebuffer::new(frame.width(), frame.height());

    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let pixel = frame.pixel(x, y);
            let (h, s, v) = rgb_to_hsv(pixel.r, pixel.g, pixel.b);
            let rotated = (h + degrees).rem_euclid(360.0);
            let (r, g, b) = hsv_to_rgb(rotated, s, v);

            out.set_pixel(x, y, Colour::opaque(r, g, b));
        }
    }

    out
}

fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_turn_is_identity_on_primaries() {
        let mut frame = Framebuffer::new(3, 1);
        frame.set_pixel(0, 0, Colour::opaque(255, 0, 0));
        frame.set_pixel(1, 0, Colour::opaque(0, 255, 0));
        frame.set_pixel(2, 0, Colour::opaque(0, 0, 255));

        let rotated = hue_rotate(&frame, 360.0);

        assert_eq!(rotated, frame);
    }

    #[test]
    fn test_third_turn_cycles_primaries() {
        let mut frame = Framebuffer::new(1, 1);
        frame.set_pixel(0, 0, Colour::opaque(255, 0, 0));

        let rotated = hue_rotate(&frame, 120.0);

        assert_eq!(rotated.pixel(0, 0), Colour::opaque(0, 255, 0));
    }

    #[test]
    fn test_greys_are_unchanged() {
        let mut frame = Framebuffer::new(2, 1);
        frame.set_pixel(0, 0, Colour::opaque(128, 128, 128));
        frame.set_pixel(1, 0, Colour::opaque(0, 0, 0));

        let rotated = hue_rotate(&frame, 90.0);

        assert_eq!(rotated, frame);
    }

    #[test]
    fn test_small_rotation_changes_saturated_colours() {
        let mut frame = Framebuffer::new(1, 1);
        frame.set_pixel(0, 0, Colour::opaque(255, 0, 0));

        let rotated = hue_rotate(&frame, 8.0);

        assert_ne!(rotated.pixel(0, 0), Colour::opaque(255, 0, 0));
    }

    #[test]
    fn test_rgb_hsv_round_trip() {
        for colour in [(255, 0, 0), (12, 200, 90), (0, 0, 255), (40, 40, 41)] {
            let (h, s, v) = rgb_to_hsv(colour.0, colour.1, colour.2);
            let back = hsv_to_rgb(h, s, v);

            assert_eq!(back, colour);
        }
    }
}
