//! Error types for the surface visualization crates.

use thiserror::Error;

/// Result type alias using VizError.
pub type VizResult<T> = Result<T, VizError>;

/// Primary error type for figure-building operations.
#[derive(Debug, Error)]
pub enum VizError {
    // === Colorscale errors ===
    #[error("Palette not found: {0}")]
    UnknownPalette(String),

    #[error("Palette exhausted: requested {requested} bands, palette has {available} colors")]
    PaletteExhausted { requested: usize, available: usize },

    // === Lookup errors ===
    #[error("Surface not found: {0}")]
    UnknownKey(String),

    #[error("Surfaces belong to different dataset groups: {left} vs {right}")]
    GroupMismatch { left: String, right: String },

    // === Grid errors ===
    #[error("Grid shape mismatch: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("Degenerate value range in reference grid (max == min == {0})")]
    DegenerateRange(f64),

    #[error("Malformed surface: {0}")]
    MalformedSurface(String),

    // === Startup errors ===
    #[error("Failed to load data: {0}")]
    Load(String),
}

// Conversion from common error types
impl From<std::io::Error> for VizError {
    fn from(err: std::io::Error) -> Self {
        VizError::Load(err.to_string())
    }
}

impl From<serde_json::Error> for VizError {
    fn from(err: serde_json::Error) -> Self {
        VizError::Load(format!("JSON error: {}", err))
    }
}
