//! Palette definition: an ordered, immutable sequence of colors.

use crate::model::Color;
use serde::{Deserialize, Serialize};

/// An ordered sequence of colors, immutable after construction.
///
/// Palettes compare and hash by their color sequence, so two palettes with
/// the same colors in the same order are the same palette wherever they are
/// deduplicated (the recent-palette cache relies on this).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from an ordered color sequence.
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Number of colors in the palette.
    pub fn size(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colors, in assignment order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Copy this palette to exactly `size` colors: truncate if it is longer,
    /// pad trailing slots with `fill` if it is shorter.
    pub fn resized(&self, size: usize, fill: Color) -> Self {
        let mut colors = Vec::with_capacity(size);
        colors.extend(self.colors.iter().copied().take(size));
        colors.resize(size, fill);
        Self { colors }
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
