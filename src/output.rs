//! Image sinks for rendered pixel buffers.
//!
//! The primary format is plain-text PPM (P3): header, then one `R G B`
//! triple per pixel, row-major, top row first. A PNG sink using the same
//! tone mapping is available for convenience. Channels go through
//! square-root gamma and are clamped to [0, 0.999] before scaling to 8 bits.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use log::{info, warn};

use crate::interval::Interval;
use crate::material::Color;

/// Valid channel range after tone mapping; 0.999 keeps the scaled value
/// strictly below 256.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Square-root tone mapping from linear radiance to display gamma.
fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Map one linear channel to an 8-bit output value.
fn to_channel(value: f32) -> u8 {
    (256.0 * INTENSITY.clamp(linear_to_gamma(value))) as u8
}

/// Write the pixel buffer as a plain-text PPM (P3) image.
///
/// `pixels` holds averaged linear radiance, row-major with the top row
/// first, exactly as produced by [`crate::renderer::render`].
pub fn write_ppm<W: Write>(out: &mut W, pixels: &[Color], width: u32, height: u32) -> io::Result<()> {
    debug_assert_eq!(pixels.len(), (width * height) as usize);

    writeln!(out, "P3")?;
    writeln!(out, "{} {}", width, height)?;
    writeln!(out, "255")?;
    for color in pixels {
        writeln!(
            out,
            "{} {} {}",
            to_channel(color.x),
            to_channel(color.y),
            to_channel(color.z)
        )?;
    }
    Ok(())
}

/// Save the pixel buffer as a PPM file, logging the outcome.
pub fn save_ppm(pixels: &[Color], width: u32, height: u32, path: &str) {
    let result = File::create(path)
        .map(BufWriter::new)
        .and_then(|mut out| write_ppm(&mut out, pixels, width, height));
    match result {
        Ok(_) => info!("Image saved as {}", path),
        Err(e) => warn!("Failed to save image {}: {}", path, e),
    }
}

/// Save the pixel buffer as an 8-bit PNG, using the same tone mapping as
/// the PPM sink so both formats agree pixel for pixel.
pub fn save_png(pixels: &[Color], width: u32, height: u32, path: &str) {
    let img: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        let c = pixels[(y * width + x) as usize];
        Rgb([to_channel(c.x), to_channel(c.y), to_channel(c.z)])
    });
    match img.save(Path::new(path)) {
        Ok(_) => info!("Image saved as {}", path),
        Err(e) => warn!("Failed to save image {}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_pixel_lines_are_well_formed() {
        let pixels = vec![Color::new(0.0, 0.25, 1.0); 6];
        let mut out = Vec::new();
        write_ppm(&mut out, &pixels, 3, 2).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("P3\n3 2\n255\n"));
        assert_eq!(text.lines().count(), 3 + 6);
    }

    #[test]
    fn channels_are_gamma_corrected_and_clamped() {
        // 0.25 linear -> 0.5 after sqrt gamma -> 128.
        assert_eq!(to_channel(0.25), 128);
        // Overbright values clamp to 255 instead of wrapping.
        assert_eq!(to_channel(10.0), 255);
        assert_eq!(to_channel(1.0), 255);
        assert_eq!(to_channel(-1.0), 0);
        assert_eq!(to_channel(0.0), 0);
    }

    #[test]
    fn every_emitted_value_fits_a_channel() {
        let pixels = vec![
            Color::new(-1.0, 0.0, 0.5),
            Color::new(1.0, 2.0, 100.0),
            Color::new(0.123, 0.456, 0.789),
        ];
        let mut out = Vec::new();
        write_ppm(&mut out, &pixels, 3, 1).unwrap();

        let text = String::from_utf8(out).unwrap();
        for token in text.lines().skip(3).flat_map(|l| l.split_whitespace()) {
            let value: u32 = token.parse().unwrap();
            assert!(value <= 255);
        }
    }
}
