use crate::core::data::colour::Colour;
use crate::core::data::framebuffer::Framebuffer;

pub type Kernel3x3 = [[f64; 3]; 3];

/// Unsharp-style sharpening: centre boosted, cross neighbours subtracted.
pub const SHARPEN_KERNEL: Kernel3x3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

/// Directional relief; weights sum to one so flat regions pass through.
pub const EMBOSS_KERNEL: Kernel3x3 = [[-1.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 1.0]];

const SOBEL_X: Kernel3x3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: Kernel3x3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Applies a 3x3 kernel to every pixel, replicating edge pixels for taps
/// that fall outside the frame. Channels clamp to [0, 255]; alpha is
/// written opaque.
pub fn convolve_3x3(frame: &Framebuffer, kernel: &Kernel3x3) -> Framebuffer {
    let mut out = Framebuffer::new(frame.width(), frame.height());

    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let mut acc = [0.0f64; 3];

            for (ky, kernel_row) in kernel.iter().enumerate() {
                for (kx, weight) in kernel_row.iter().enumerate() {
                    let sample = frame.pixel_clamped(
                        i64::from(x) + kx as i64 - 1,
                        i64::from(y) + ky as i64 - 1,
                    );

                    acc[0] += weight * f64::from(sample.r);
                    acc[1] += weight * f64::from(sample.g);
                    acc[2] += weight * f64::from(sample.b);
                }
            }

            out.set_pixel(
                x,
                y,
                Colour::opaque(
                    clamp_channel(acc[0]),
                    clamp_channel(acc[1]),
                    clamp_channel(acc[2]),
                ),
            );
        }
    }

    out
}

/// Sobel gradient magnitude per channel.
pub fn sobel(frame: &Framebuffer) -> Framebuffer {
    let gx = convolve_signed(frame, &SOBEL_X);
    let gy = convolve_signed(frame, &SOBEL_Y);
    let mut out = Framebuffer::new(frame.width(), frame.height());

    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let index = (y as usize * frame.width() as usize + x as usize) * 3;
            let magnitude = |channel: usize| {
                let dx = gx[index + channel];
                let dy = gy[index + channel];
                clamp_channel((dx * dx + dy * dy).sqrt())
            };

            out.set_pixel(x, y, Colour::opaque(magnitude(0), magnitude(1), magnitude(2)));
        }
    }

    out
}

/// Convolution keeping signed intermediates for the gradient magnitude.
fn convolve_signed(frame: &Framebuffer, kernel: &Kernel3x3) -> Vec<f64> {
    let mut out = vec![0.0; frame.width() as usize * frame.height() as usize * 3];

    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let index = (y as usize * frame.width() as usize + x as usize) * 3;

            for (ky, kernel_row) in kernel.iter().enumerate() {
                for (kx, weight) in kernel_row.iter().enumerate() {
                    let sample = frame.pixel_clamped(
                        i64::from(x) + kx as i64 - 1,
                        i64::from(y) + ky as i64 - 1,
                    );

                    out[index] += weight * f64::from(sample.r);
                    out[index + 1] += weight * f64::from(sample.g);
                    out[index + 2] += weight * f64::from(sample.b);
                }
            }
        }
    }

    out
}

fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
