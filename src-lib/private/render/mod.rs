// This file is part of simple-rainbow-fill and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 the simple-rainbow-fill contributors

//! Pixel buffer addressing and the gradient fill

use anyhow::{bail, ensure, Result};

use crate::private::color::{self, Rgb};

#[cfg(any(test, feature = "benchmark"))]
pub mod naive;

const OPAQUE_ALPHA: u8 = 255;

/// Per-pixel byte packing supported by the renderer.
///
/// Both orders lead with blue: little-endian x86 framebuffers and softbuffer's `0RGB`
/// u32 packing agree on `[blue, green, red]` in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 3 bytes per pixel: `[blue, green, red]`
    Bgr24,
    /// 4 bytes per pixel: `[blue, green, red, alpha]`, alpha always written fully opaque
    Bgrx32,
}

impl PixelFormat {
    fn from_bytes_per_pixel(bytes_per_pixel: u32) -> Result<PixelFormat> {
        match bytes_per_pixel {
            3 => Ok(PixelFormat::Bgr24),
            4 => Ok(PixelFormat::Bgrx32),
            other => bail!("unsupported pixel format: {other} bytes per pixel (only 3 and 4 are supported)"),
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgr24 => 3,
            PixelFormat::Bgrx32 => 4,
        }
    }
}

/// Geometry of a target pixel buffer, as reported by whatever display system owns it.
///
/// Construction validates the descriptor, so a `BufferLayout` in hand means every pixel
/// write it describes lands inside a buffer of [`required_bytes`](Self::required_bytes).
#[derive(Debug, Clone, Copy)]
pub struct BufferLayout {
    width: u32,
    height: u32,
    stride_bytes: u32,
    format: PixelFormat,
}

impl BufferLayout {
    pub fn new(width: u32, height: u32, stride_bytes: u32, bytes_per_pixel: u32) -> Result<BufferLayout> {
        let format = PixelFormat::from_bytes_per_pixel(bytes_per_pixel)?;
        ensure!(
            width > 0 && height > 0,
            "pixel buffer has a zero dimension ({width}x{height})"
        );
        ensure!(
            stride_bytes as usize >= width as usize * format.bytes_per_pixel(),
            "row stride of {stride_bytes} bytes cannot hold {width} pixels at {bytes_per_pixel} bytes each"
        );
        Ok(BufferLayout { width, height, stride_bytes, format })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Minimum buffer size this layout describes.
    pub fn required_bytes(&self) -> usize {
        self.height as usize * self.stride_bytes as usize
    }

    /// Bytes of a row holding pixels; anything between this and the stride is padding.
    fn row_bytes(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel()
    }

    fn offset_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride_bytes as usize + x as usize * self.format.bytes_per_pixel()
    }
}

/// Write one pixel into `buffer` at `(x, y)`.
///
/// `x` and `y` must be inside the layout's dimensions and `buffer` must hold at least
/// [`BufferLayout::required_bytes`]; this indexes straight into the slice.
#[inline(always)]
pub fn write_pixel(buffer: &mut [u8], layout: &BufferLayout, x: u32, y: u32, color: Rgb) {
    debug_assert!(
        x < layout.width && y < layout.height,
        "pixel ({x}, {y}) outside {}x{}",
        layout.width,
        layout.height
    );

    let offset = layout.offset_of(x, y);
    buffer[offset] = color.blue;
    buffer[offset + 1] = color.green;
    buffer[offset + 2] = color.red;
    if let PixelFormat::Bgrx32 = layout.format {
        buffer[offset + 3] = OPAQUE_ALPHA;
    }
}

/// Hue angle for a column, sweeping the full color wheel left to right.
/// Stays within `[0, 360)` because `x < width`.
#[inline(always)]
pub fn hue_for_column(x: u32, width: u32) -> f32 {
    (x as f32 / width as f32) * 360.0
}

/// Fill `buffer` with the horizontal rainbow gradient: hue swept across the color wheel
/// by column, fully saturated, full brightness.
///
/// Only pixel bytes are touched. Row padding beyond the pixels and anything past
/// `height * stride` is left exactly as it was.
pub fn fill_gradient(buffer: &mut [u8], layout: &BufferLayout) -> Result<()> {
    ensure!(
        buffer.len() >= layout.required_bytes(),
        "pixel buffer is {} bytes but the layout needs at least {}",
        buffer.len(),
        layout.required_bytes()
    );

    // hue only varies by column, so paint the top row once and stamp it onto the rest
    for x in 0..layout.width {
        let color = color::hsv_to_rgb(hue_for_column(x, layout.width), 1.0, 1.0);
        write_pixel(buffer, layout, x, 0, color);
    }

    let stride = layout.stride_bytes as usize;
    let row_bytes = layout.row_bytes();
    let (template_row, rest) = buffer.split_at_mut(stride);
    for y in 1..layout.height as usize {
        let start = (y - 1) * stride;
        rest[start..start + row_bytes].copy_from_slice(&template_row[..row_bytes]);
    }

    Ok(())
}

#[cfg(test)]
mod test_layout_validation {
    use super::*;

    #[test]
    fn accepts_3_and_4_bytes_per_pixel() {
        assert_eq!(BufferLayout::new(4, 4, 16, 4).unwrap().format(), PixelFormat::Bgrx32);
        assert_eq!(BufferLayout::new(4, 4, 12, 3).unwrap().format(), PixelFormat::Bgr24);
    }

    #[test]
    fn rejects_other_bytes_per_pixel() {
        for bytes_per_pixel in [0, 1, 2, 5, 8] {
            assert!(
                BufferLayout::new(4, 4, 32, bytes_per_pixel).is_err(),
                "{bytes_per_pixel} bytes per pixel should be rejected"
            );
        }
    }

    #[test]
    fn rejects_undersized_stride() {
        // 5 pixels at 4 bytes each need 20 bytes per row
        assert!(BufferLayout::new(5, 4, 19, 4).is_err());
    }

    #[test]
    fn accepts_padded_stride() {
        assert!(BufferLayout::new(5, 4, 24, 4).is_ok());
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(BufferLayout::new(0, 4, 16, 4).is_err());
        assert!(BufferLayout::new(4, 0, 16, 4).is_err());
    }

    #[test]
    fn required_bytes_covers_every_row() {
        assert_eq!(BufferLayout::new(5, 4, 24, 4).unwrap().required_bytes(), 96);
    }
}
