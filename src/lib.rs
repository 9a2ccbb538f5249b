//! palette-core - Palette generation and management engine.
//!
//! This library supplies ready-made color palettes for graph visualization,
//! synthesizes new ones under perceptual constraints, and remembers the five
//! most recently used ones. The perceptually-constrained search itself is an
//! external collaborator behind the [`PaletteGenerator`] trait; this crate
//! owns the data model, the resource loading, the random-palette algorithm,
//! the default-palette sizing policy, and the recent-palette cache.
//!
//! # Example
//!
//! ```
//! use palette_core::PaletteManager;
//!
//! let manager = PaletteManager::instance();
//! let palette = manager.random_palette(8);
//! assert_eq!(palette.size(), 8);
//! manager.add_recent_palette(palette);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod manager;
pub mod model;
pub mod parser;

// Re-exports for convenience
pub use error::{PaletteError, Result};
pub use generator::PaletteGenerator;
pub use manager::PaletteManager;
pub use model::{Color, Palette, Preset};
