
use crate::error::{RenderError, Result};
use crate::math::Color;

/// Largest channel value written to PPM output.
pub const PPM_MAX: u16 = 255;

/// Longest PPM data line, in characters.
const PPM_LINE_WIDTH: usize = 70;

/// A row-major grid of unclamped colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates an all-black canvas.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidDimensions`] if either side is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(RenderError::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }
            .into());
        }
        Ok(y * self.width + x)
    }

    /// The color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PixelOutOfBounds`] outside the canvas.
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Color> {
        Ok(self.pixels[self.index(x, y)?])
    }

    /// Sets the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::PixelOutOfBounds`] outside the canvas.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let index = self.index(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Plain (`P3`) PPM text with channels clamped to `0..=255`.
    ///
    /// Data lines never exceed 70 characters and the output ends in a newline.
    #[must_use]
    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n{PPM_MAX}\n", self.width, self.height);
        for row in self.pixels.chunks(self.width) {
            let mut line = String::new();
            for channel in row.iter().flat_map(|c| c.to_scaled(PPM_MAX)) {
                let value = channel.to_string();
                if !line.is_empty() && line.len() + 1 + value.len() > PPM_LINE_WIDTH {
                    out.push_str(&line);
                    out.push('\n');
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&value);
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
