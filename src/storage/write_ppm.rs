use crate::core::data::framebuffer::{BYTES_PER_PIXEL, Framebuffer};
use std::io::Write;
use std::path::Path;

/// Writes the framebuffer as a binary PPM, dropping the alpha channel.
pub fn write_ppm(frame: &Framebuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", frame.width(), frame.height())?;
    writeln!(file, "255")?;

    let mut rgb = Vec::with_capacity(frame.width() as usize * frame.height() as usize * 3);
    for pixel in frame.data().chunks_exact(BYTES_PER_PIXEL) {
        rgb.extend_from_slice(&pixel[..3]);
    }
    file.write_all(&rgb)?;

    Ok(())
}
