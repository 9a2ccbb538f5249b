//! External palette generator boundary.
//!
//! The perceptually-constrained search that turns a color count and a set of
//! anchor colors into visually distinct colors lives outside this crate. The
//! engine only fixes its calling contract and validates the result size.

use crate::model::Color;

/// Strategy interface for the external palette generation algorithm.
///
/// Implementations must return exactly `color_count` colors. `quality` is an
/// effort parameter: smaller values mean faster, less refined search (see
/// [`crate::config::quality_for`]). `constraints` is the set of anchor
/// colors bounding the search, empty when generation is unconstrained.
pub trait PaletteGenerator {
    fn generate(&self, color_count: usize, quality: u32, constraints: &[Color]) -> Vec<Color>;
}

impl<F> PaletteGenerator for F
where
    F: Fn(usize, u32, &[Color]) -> Vec<Color>,
{
    fn generate(&self, color_count: usize, quality: u32, constraints: &[Color]) -> Vec<Color> {
        self(color_count, quality, constraints)
    }
}
