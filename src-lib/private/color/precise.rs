// This file is part of simple-rainbow-fill and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 the simple-rainbow-fill contributors

//! Precise implementations of various functions that are less performant than their
//! production alternatives. The theme here is f64 math and round-to-nearest over the
//! f32/truncating conversion the renderer ships with.
//!
//! These are retained for:
//!
//! 1. benchmarking comparisons
//! 2. unit testing known good output

use super::Rgb;

/// see https://en.wikipedia.org/wiki/HSL_and_HSV#Color_conversion_formulae
/// this is a HSV -> RGB conversion
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Rgb {
    let chroma = value * saturation;
    let hue_over_60 = hue / 60.0;
    let intermediate_color = chroma * (1.0 - (hue_over_60 % 2.0 - 1.0).abs());
    let brightness_floor = value - chroma;

    let [red, green, blue] = match hue_over_60 {
        h if h < 1.0 => [chroma, intermediate_color, 0.0],
        h if h < 2.0 => [intermediate_color, chroma, 0.0],
        h if h < 3.0 => [0.0, chroma, intermediate_color],
        h if h < 4.0 => [0.0, intermediate_color, chroma],
        h if h < 5.0 => [intermediate_color, 0.0, chroma],
        _ => [chroma, 0.0, intermediate_color],
    };

    Rgb {
        red: ((red + brightness_floor) * 255.0).round() as u8,
        green: ((green + brightness_floor) * 255.0).round() as u8,
        blue: ((blue + brightness_floor) * 255.0).round() as u8,
    }
}
