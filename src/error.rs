//! Error types for palette loading and generation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the palette engine.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Invalid numeric value at line {line}: {value}")]
    InvalidNumber { line: usize, value: String },

    #[error("Invalid hex color: '{value}'")]
    InvalidHexColor { value: String },

    #[error("Invalid color count: {count} (must be >= 1)")]
    InvalidColorCount { count: usize },

    #[error("Generator returned {actual} colors, expected {expected}")]
    GeneratorContract { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for palette operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
