//! Configuration constants for the palette engine.

use crate::model::Color;

/// Capacity of the recent-palette MRU cache.
pub const RECENT_PALETTE_SIZE: usize = 5;

/// Sentinel color used to pad undersized default palettes (light gray).
pub const DEFAULT_COLOR: Color = Color::new(192, 192, 192);

/// Lower bound of the shared brightness/saturation draw for random palettes.
pub const RANDOM_BS_FLOOR: f32 = 0.6;

/// Span of the shared brightness/saturation draw for random palettes.
pub const RANDOM_BS_SPAN: f32 = 0.4;

/// Quality (effort) parameter for the external generator, selected from the
/// palette size. Smaller palettes get more effort per color; large palettes
/// trade refinement for speed.
///
/// The bands are evaluated in ascending order of `color_count` and the
/// boundaries are inclusive on the low side: 50 colors still gets quality 50,
/// 51 drops to 25, and so on.
pub fn quality_for(color_count: usize) -> u32 {
    match color_count {
        0..=50 => 50,
        51..=100 => 25,
        101..=200 => 10,
        201..=300 => 5,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quality_band_boundaries() {
        assert_eq!(quality_for(1), 50);
        assert_eq!(quality_for(50), 50);
        assert_eq!(quality_for(51), 25);
        assert_eq!(quality_for(100), 25);
        assert_eq!(quality_for(101), 10);
        assert_eq!(quality_for(200), 10);
        assert_eq!(quality_for(201), 5);
        assert_eq!(quality_for(300), 5);
        assert_eq!(quality_for(301), 2);
        assert_eq!(quality_for(10_000), 2);
    }
}
