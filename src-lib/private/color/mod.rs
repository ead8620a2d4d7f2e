// This file is part of simple-rainbow-fill and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2026 the simple-rainbow-fill contributors

//! Color conversion

#[cfg(any(test, feature = "benchmark"))]
pub mod precise;

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// see https://en.wikipedia.org/wiki/HSL_and_HSV#Color_conversion_formulae
/// this is a HSV -> RGB conversion
///
/// `hue` is in degrees and must be within `[0, 360)`. `saturation` and `value` must be
/// within `[0, 1]`. Channels are scaled to `[0, 255]` by truncation, so the same input
/// always packs to the same bytes.
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let chroma = value * saturation;
    let hue_over_60 = hue / 60.0;
    let secondary = chroma * (1.0 - (hue_over_60 % 2.0 - 1.0).abs());
    let brightness_floor = value - chroma;

    // sextant boundaries (1.0, 2.0, ...) fall into the lower arm
    let [red, green, blue] = match hue_over_60 {
        h if h < 1.0 => [chroma, secondary, 0.0],
        h if h < 2.0 => [secondary, chroma, 0.0],
        h if h < 3.0 => [0.0, chroma, secondary],
        h if h < 4.0 => [0.0, secondary, chroma],
        h if h < 5.0 => [secondary, 0.0, chroma],
        _ => [chroma, 0.0, secondary],
    };

    Rgb {
        red: ((red + brightness_floor) * 255.0) as u8,
        green: ((green + brightness_floor) * 255.0) as u8,
        blue: ((blue + brightness_floor) * 255.0) as u8,
    }
}

#[cfg(test)]
mod test_hsv_conversion {
    use super::*;

    /// Euclidean distance between two colors, channel-wise.
    fn color_error(actual: Rgb, expected: Rgb) -> f64 {
        let red = actual.red as f64 - expected.red as f64;
        let green = actual.green as f64 - expected.green as f64;
        let blue = actual.blue as f64 - expected.blue as f64;
        (red * red + green * green + blue * blue).sqrt()
    }

    #[test]
    fn test_primary_and_secondary_hues() {
        let cases = [
            (0.0, Rgb { red: 255, green: 0, blue: 0 }),
            (60.0, Rgb { red: 255, green: 255, blue: 0 }),
            (120.0, Rgb { red: 0, green: 255, blue: 0 }),
            (180.0, Rgb { red: 0, green: 255, blue: 255 }),
            (240.0, Rgb { red: 0, green: 0, blue: 255 }),
            (300.0, Rgb { red: 255, green: 0, blue: 255 }),
        ];

        for (hue, expected) in cases {
            assert_eq!(hsv_to_rgb(hue, 1.0, 1.0), expected, "mismatch at hue {hue}");
        }
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        for value in [0.0f32, 0.25, 0.5, 0.75, 1.0] {
            let expected = (value * 255.0) as u8;
            for hue in [0.0f32, 42.0, 180.0, 359.0] {
                let color = hsv_to_rgb(hue, 0.0, value);
                assert_eq!(
                    color,
                    Rgb { red: expected, green: expected, blue: expected },
                    "expected gray at hue {hue}, value {value}"
                );
            }
        }
    }

    #[test]
    fn test_zero_value_is_black() {
        for hue in [0.0f32, 90.0, 222.0, 359.0] {
            for saturation in [0.0f32, 0.5, 1.0] {
                assert_eq!(
                    hsv_to_rgb(hue, saturation, 0.0),
                    Rgb { red: 0, green: 0, blue: 0 },
                    "expected black at hue {hue}, saturation {saturation}"
                );
            }
        }
    }

    /// channels scale by truncation, not rounding
    #[test]
    fn test_truncating_channel_scale() {
        // 0.999 * 255 = 254.745, which must floor to 254
        assert_eq!(
            hsv_to_rgb(0.0, 0.0, 0.999),
            Rgb { red: 254, green: 254, blue: 254 }
        );
        // one degree short of wrapping: the blue channel holds the truncated remainder
        assert_eq!(hsv_to_rgb(359.0, 1.0, 1.0), Rgb { red: 255, green: 0, blue: 4 });
    }

    #[test]
    fn test_boundary_hues_fall_into_the_lower_sextant() {
        // one degree below 120 the red channel still carries the fading secondary
        // component; at exactly 120 it must already be zero
        let just_below = hsv_to_rgb(119.0, 1.0, 1.0);
        assert_eq!(just_below, Rgb { red: 4, green: 255, blue: 0 });
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb { red: 0, green: 255, blue: 0 });
    }

    #[test]
    fn test_tracks_precise_reference_over_hue() {
        let max_error = 2.0;

        for hue in 0..360 {
            let actual = hsv_to_rgb(hue as f32, 1.0, 1.0);
            let expected = precise::hsv_to_rgb(hue as f64, 1.0, 1.0);
            let error = color_error(actual, expected);
            assert!(
                error <= max_error,
                "precise and production hsv->rgb differ @ hue {hue}: {actual:?} != {expected:?}, error={error}"
            );
        }
    }

    #[test]
    fn test_tracks_precise_reference_over_saturation() {
        let max_error = 2.0;

        for step in 0..=255 {
            let saturation = step as f64 / 255.0;
            let actual = hsv_to_rgb(80.0, saturation as f32, 1.0);
            let expected = precise::hsv_to_rgb(80.0, saturation, 1.0);
            let error = color_error(actual, expected);
            assert!(
                error <= max_error,
                "precise and production hsv->rgb differ @ saturation {saturation}: {actual:?} != {expected:?}, error={error}"
            );
        }
    }

    #[test]
    fn test_tracks_precise_reference_over_value() {
        let max_error = 2.0;

        for step in 0..=255 {
            let value = step as f64 / 255.0;
            let actual = hsv_to_rgb(210.0, 1.0, value as f32);
            let expected = precise::hsv_to_rgb(210.0, 1.0, value);
            let error = color_error(actual, expected);
            assert!(
                error <= max_error,
                "precise and production hsv->rgb differ @ value {value}: {actual:?} != {expected:?}, error={error}"
            );
        }
    }
}
