//! Data model types for the palette engine.

mod color;
mod palette;
mod preset;

pub use color::Color;
pub use palette::Palette;
pub use preset::Preset;
