//! RGB color value type with HSB conversions and hex parsing.

use crate::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};

/// An immutable RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Color {
    /// Create a color from RGB channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from hue/saturation/brightness components.
    ///
    /// All components are in `[0, 1]`; `h` is a fraction of the full hue
    /// circle and wraps around. Out-of-range saturation and brightness are
    /// clamped.
    #[allow(clippy::many_single_char_names)]
    pub fn from_hsb(h: f32, s: f32, b: f32) -> Self {
        let h = h.rem_euclid(1.0) * 6.0;
        let s = s.clamp(0.0, 1.0);
        let v = b.clamp(0.0, 1.0);

        let sector = (h.floor() as u8) % 6;
        let f = h - h.floor();

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self::new(channel(r), channel(g), channel(b))
    }

    /// Convert to hue/saturation/brightness components, each in `[0, 1]`.
    pub fn to_hsb(&self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        (h, s, v)
    }

    /// Parse a hex color token of the form `#RRGGBB` (leading `#` optional).
    pub fn from_hex(token: &str) -> Result<Self> {
        let digits = token.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(PaletteError::InvalidHexColor {
                value: token.to_string(),
            });
        }
        let rgb =
            u32::from_str_radix(digits, 16).map_err(|_| PaletteError::InvalidHexColor {
                value: token.to_string(),
            })?;
        Ok(Self::new(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        ))
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Convert a `[0, 1]` channel fraction to a `u8` channel value.
fn channel(v: f32) -> u8 {
    (v * 255.0 + 0.5).floor() as u8
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ==================== Hex parsing tests ====================

    #[test]
    fn test_from_hex_with_hash() {
        let c = Color::from_hex("#1B9E77").unwrap();
        assert_eq!(c, Color::new(0x1B, 0x9E, 0x77));
    }

    #[test]
    fn test_from_hex_without_hash() {
        let c = Color::from_hex("D95F02").unwrap();
        assert_eq!(c, Color::new(0xD9, 0x5F, 0x02));
    }

    #[test]
    fn test_from_hex_surrounding_whitespace() {
        let c = Color::from_hex("  #FFFFFF ").unwrap();
        assert_eq!(c, Color::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_rejects_short_token() {
        assert!(Color::from_hex("#FFF").is_err());
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        assert!(Color::from_hex("#GGHHII").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        let c = Color::from_hex("#1B9E77").unwrap();
        assert_eq!(c.to_hex(), "#1B9E77");
    }

    // ==================== HSB conversion tests ====================

    #[test]
    fn test_from_hsb_primary_sextants() {
        assert_eq!(Color::from_hsb(0.0, 1.0, 1.0), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsb(1.0 / 6.0, 1.0, 1.0), Color::new(255, 255, 0));
        assert_eq!(Color::from_hsb(2.0 / 6.0, 1.0, 1.0), Color::new(0, 255, 0));
        assert_eq!(Color::from_hsb(3.0 / 6.0, 1.0, 1.0), Color::new(0, 255, 255));
        assert_eq!(Color::from_hsb(4.0 / 6.0, 1.0, 1.0), Color::new(0, 0, 255));
        assert_eq!(Color::from_hsb(5.0 / 6.0, 1.0, 1.0), Color::new(255, 0, 255));
    }

    #[test]
    fn test_from_hsb_hue_wraps() {
        assert_eq!(Color::from_hsb(1.0, 1.0, 1.0), Color::from_hsb(0.0, 1.0, 1.0));
        assert_eq!(Color::from_hsb(1.5, 1.0, 1.0), Color::from_hsb(0.5, 1.0, 1.0));
    }

    #[test]
    fn test_from_hsb_zero_saturation_is_gray() {
        let c = Color::from_hsb(0.3, 0.0, 0.5);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn test_to_hsb_round_trip() {
        let original = Color::new(255, 128, 0);
        let (h, s, b) = original.to_hsb();
        let back = Color::from_hsb(h, s, b);
        assert!((back.r as i16 - original.r as i16).abs() <= 1);
        assert!((back.g as i16 - original.g as i16).abs() <= 1);
        assert!((back.b as i16 - original.b as i16).abs() <= 1);
    }
}
