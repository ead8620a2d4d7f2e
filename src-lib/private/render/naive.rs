// This file is part of simple-rainbow-fill and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 the simple-rainbow-fill contributors

//! Naive implementations of various functions that are less performant than their
//! optimized alternatives.
//!
//! These are retained for:
//!
//! 1. benchmarking comparisons
//! 2. unit testing known good output

use anyhow::{ensure, Result};

use crate::private::color;
use crate::private::render::{hue_for_column, write_pixel, BufferLayout};

/// Per-pixel rendition of [`super::fill_gradient`]: two plain loops, one conversion and
/// one write per pixel, nothing shared between rows.
pub fn fill_gradient(buffer: &mut [u8], layout: &BufferLayout) -> Result<()> {
    ensure!(
        buffer.len() >= layout.required_bytes(),
        "pixel buffer is {} bytes but the layout needs at least {}",
        buffer.len(),
        layout.required_bytes()
    );

    for y in 0..layout.height() {
        for x in 0..layout.width() {
            let color = color::hsv_to_rgb(hue_for_column(x, layout.width()), 1.0, 1.0);
            write_pixel(buffer, layout, x, y, color);
        }
    }

    Ok(())
}
