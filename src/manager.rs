//! Palette manager: loaded presets, default palettes, and the recent cache.

use crate::config::{
    quality_for, DEFAULT_COLOR, RANDOM_BS_FLOOR, RANDOM_BS_SPAN, RECENT_PALETTE_SIZE,
};
use crate::error::{PaletteError, Result};
use crate::generator::PaletteGenerator;
use crate::model::{Color, Palette, Preset};
use crate::parser;

use lru::LruCache;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::seq::SliceRandom;
use rand::Rng;
use std::num::NonZeroUsize;
use tracing::warn;

/// Packaged preset rows.
const PRESETS_CSV: &str = include_str!("../resources/palette_presets.csv");

/// Packaged default-palette rows.
const DEFAULT_PALETTES_CSV: &str = include_str!("../resources/palette_default.csv");

static INSTANCE: Lazy<PaletteManager> = Lazy::new(PaletteManager::new);

/// Owner of the loaded presets, the loaded default palettes, and the bounded
/// most-recently-used palette cache.
///
/// The process-wide instance is reachable through [`PaletteManager::instance`]
/// and is initialized exactly once on first access. Hosts that prefer
/// dependency injection can construct their own instances; all state is
/// per-instance.
pub struct PaletteManager {
    presets: Vec<Preset>,
    default_palettes: Vec<Palette>,
    recent: Mutex<LruCache<Palette, ()>>,
}

impl PaletteManager {
    /// The shared process-wide manager, lazily initialized on first access.
    pub fn instance() -> &'static PaletteManager {
        &INSTANCE
    }

    /// Create a manager backed by the packaged preset and palette resources.
    pub fn new() -> Self {
        Self::from_resources(PRESETS_CSV, DEFAULT_PALETTES_CSV)
    }

    /// Create a manager from raw resource text.
    ///
    /// A resource that fails to parse degrades to an empty collection with a
    /// logged diagnostic; construction itself never fails.
    pub fn from_resources(presets_csv: &str, palettes_csv: &str) -> Self {
        let presets = parser::parse_presets(presets_csv).unwrap_or_else(|e| {
            warn!("failed to load palette presets: {e}");
            Vec::new()
        });
        let default_palettes = parser::parse_palettes(palettes_csv).unwrap_or_else(|e| {
            warn!("failed to load default palettes: {e}");
            Vec::new()
        });

        let capacity =
            NonZeroUsize::new(RECENT_PALETTE_SIZE).expect("cache capacity must be non-zero");

        Self {
            presets,
            default_palettes,
            recent: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// The loaded generation presets.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Look up a loaded preset by name.
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Build an ad-hoc palette of `color_count` distinct-hue colors.
    ///
    /// One brightness and one saturation value are drawn for the whole
    /// palette, hues are spread evenly over the full circle, and the result
    /// is shuffled. `color_count == 0` yields the empty palette.
    pub fn random_palette(&self, color_count: usize) -> Palette {
        self.random_palette_with(&mut rand::thread_rng(), color_count)
    }

    /// [`random_palette`](Self::random_palette) with a caller-supplied RNG.
    pub fn random_palette_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        color_count: usize,
    ) -> Palette {
        if color_count == 0 {
            return Palette::new(Vec::new());
        }

        let b = RANDOM_BS_FLOOR + rng.gen::<f32>() * RANDOM_BS_SPAN;
        let s = RANDOM_BS_FLOOR + rng.gen::<f32>() * RANDOM_BS_SPAN;

        let mut colors: Vec<Color> = (1..=color_count)
            .map(|i| Color::from_hsb(i as f32 / color_count as f32, s, b))
            .collect();
        colors.shuffle(rng);

        Palette::new(colors)
    }

    /// Generate a palette of exactly `color_count` colors through the
    /// external generator, constrained by `preset` when one is given.
    ///
    /// The generator's effort parameter is selected from the palette size
    /// (see [`quality_for`]). A generator result of the wrong length is
    /// rejected, never wrapped into a wrong-sized palette.
    pub fn generate_palette(
        &self,
        generator: &dyn PaletteGenerator,
        color_count: usize,
        preset: Option<&Preset>,
    ) -> Result<Palette> {
        if color_count == 0 {
            return Err(PaletteError::InvalidColorCount { count: color_count });
        }

        let quality = quality_for(color_count);
        let constraints = preset.map(Preset::constraint_colors).unwrap_or_default();

        let colors = generator.generate(color_count, quality, &constraints);
        if colors.len() != color_count {
            return Err(PaletteError::GeneratorContract {
                expected: color_count,
                actual: colors.len(),
            });
        }

        Ok(Palette::new(colors))
    }

    /// Default palettes for `color_count` colors.
    ///
    /// Returns the stored defaults whose size matches exactly. If none
    /// match, every stored default of the largest size is copied to the
    /// requested length instead: truncated when too long, padded with the
    /// light-gray sentinel when too short. Stored defaults are never
    /// mutated.
    pub fn default_palettes_for(&self, color_count: usize) -> Vec<Palette> {
        let mut palettes: Vec<Palette> = self
            .default_palettes
            .iter()
            .filter(|p| p.size() == color_count)
            .cloned()
            .collect();

        if palettes.is_empty() {
            if let Some(max) = self.default_palettes.iter().map(Palette::size).max() {
                for p in &self.default_palettes {
                    if p.size() == max {
                        palettes.push(p.resized(color_count, DEFAULT_COLOR));
                    }
                }
            }
        }

        palettes
    }

    /// Record `palette` as the most recently used one.
    ///
    /// A structurally equal entry already in the cache is promoted rather
    /// than duplicated; at capacity the least-recently-used entry is
    /// evicted.
    pub fn add_recent_palette(&self, palette: Palette) {
        self.recent.lock().put(palette, ());
    }

    /// Snapshot of the recently used palettes, most recent first.
    pub fn recent_palettes(&self) -> Vec<Palette> {
        self.recent
            .lock()
            .iter()
            .map(|(palette, _)| palette.clone())
            .collect()
    }
}

impl Default for PaletteManager {
    fn default() -> Self {
        Self::new()
    }
}
