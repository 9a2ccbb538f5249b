//! Palette resource parsing module.

mod csv;

pub use csv::{parse_palettes, parse_presets};

use crate::error::{PaletteError, Result};
use crate::model::{Palette, Preset};
use std::fs;
use std::path::Path;

/// Load presets from a CSV file on disk.
pub fn load_presets_from_path(path: &Path) -> Result<Vec<Preset>> {
    parse_presets(&read_resource(path)?)
}

/// Load default palettes from a CSV file on disk.
pub fn load_palettes_from_path(path: &Path) -> Result<Vec<Palette>> {
    parse_palettes(&read_resource(path)?)
}

fn read_resource(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PaletteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}
