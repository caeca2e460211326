//! Pixel storage and export.

use image::{Rgb, RgbImage};
use lumen_math::{Color, BLACK};

/// Longest line emitted by [`Canvas::to_ppm`].
const PPM_LINE_LIMIT: usize = 70;

/// Where rendered pixels go.
///
/// Coordinates outside the image are clamped to the nearest edge pixel.
pub trait PixelSink {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn write(&mut self, x: usize, y: usize, color: Color);
    fn read(&self, x: usize, y: usize) -> Color;
}

/// A plain row-major grid of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a canvas filled with black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        Some(y * self.width + x)
    }

    /// Serialize as ASCII PPM (P3) with 0-255 channels.
    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n255\n", self.width, self.height);
        for row in self.pixels.chunks(self.width.max(1)) {
            let mut line = String::new();
            for value in row.iter().flat_map(|c| [c.x, c.y, c.z]).map(to_byte) {
                let token = value.to_string();
                if !line.is_empty() && line.len() + 1 + token.len() > PPM_LINE_LIMIT {
                    out.push_str(&line);
                    out.push('\n');
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&token);
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Convert to an 8-bit RGB image for saving through `image`.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let c = self.read(x as usize, y as usize);
            Rgb([to_byte(c.x), to_byte(c.y), to_byte(c.z)])
        })
    }
}

impl PixelSink for Canvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn write(&mut self, x: usize, y: usize, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn read(&self, x: usize, y: usize) -> Color {
        self.index(x, y).map_or(BLACK, |i| self.pixels[i])
    }
}

/// Scale a channel to 0-255, clamping out-of-range values.
fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
