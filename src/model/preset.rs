//! Generation presets: named hue/chroma/lightness constraint profiles.

use crate::model::Color;
use serde::{Deserialize, Serialize};

/// A named constraint profile for palette generation.
///
/// Bounds restrict the colors the external generator may produce. Hue is
/// circular: `hue_max < hue_min` is a legitimate wrap-around arc (e.g.
/// 330..30 covers the reds across the 0/360 seam).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Unique name within the loaded preset set.
    pub name: String,
    /// Whether generated colors should skew toward the dark end of the
    /// lightness range.
    pub dark: bool,
    /// Inclusive hue arc start, in degrees (0-360).
    pub hue_min: i32,
    /// Inclusive hue arc end, in degrees (0-360).
    pub hue_max: i32,
    /// Lower chroma/saturation bound.
    pub chroma_min: f32,
    /// Upper chroma/saturation bound.
    pub chroma_max: f32,
    /// Lower lightness/brightness bound.
    pub lightness_min: f32,
    /// Upper lightness/brightness bound.
    pub lightness_max: f32,
}

impl Preset {
    /// Whether the hue arc crosses the 0/360 seam.
    pub fn hue_wraps(&self) -> bool {
        self.hue_max < self.hue_min
    }

    /// Width of the hue arc in degrees, wrap-aware.
    pub fn hue_span(&self) -> i32 {
        if self.hue_wraps() {
            360 - self.hue_min + self.hue_max
        } else {
            self.hue_max - self.hue_min
        }
    }

    /// Whether a hue (in degrees) falls inside the arc, wrap-aware.
    pub fn contains_hue(&self, hue: i32) -> bool {
        let h = hue.rem_euclid(360);
        if self.hue_wraps() {
            h >= self.hue_min || h <= self.hue_max
        } else {
            h >= self.hue_min && h <= self.hue_max
        }
    }

    /// Anchor colors handed to the external generator: the corner colors of
    /// this preset's hue/chroma/lightness box.
    ///
    /// Dark presets sample only the lower half of the lightness range, so the
    /// anchors themselves already sit at the dark end.
    pub fn constraint_colors(&self) -> Vec<Color> {
        let lightness_max = if self.dark {
            self.lightness_min + (self.lightness_max - self.lightness_min) / 2.0
        } else {
            self.lightness_max
        };

        let hue_mid = self.hue_min + self.hue_span() / 2;
        let hues = [self.hue_min, hue_mid.rem_euclid(360), self.hue_max];

        let mut anchors = Vec::with_capacity(hues.len() * 4);
        for hue in hues {
            let h = hue as f32 / 360.0;
            for chroma in [self.chroma_min, self.chroma_max] {
                for lightness in [self.lightness_min, lightness_max] {
                    anchors.push(Color::from_hsb(h, chroma, lightness));
                }
            }
        }
        anchors
    }
}
