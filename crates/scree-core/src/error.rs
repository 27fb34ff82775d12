//! Error types for Scree

use thiserror::Error;

/// The main error type for Scree operations
#[derive(Debug, Error)]
pub enum ScreeError {
    #[error("Layer index {index} out of range: terrain has {layer_count} layers")]
    InvalidLayerIndex { index: usize, layer_count: usize },

    #[error("Grid is {got_width}x{got_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        got_width: u32,
        got_height: u32,
    },

    #[error("Resample target {width}x{height} has a zero dimension")]
    InvalidTargetSize { width: u32, height: u32 },

    #[error("Slope threshold {0} degrees outside [0, 90]")]
    ThresholdOutOfRange(f32),

    #[error("Blend region at ({origin_row}, {origin_col}) exceeds alphamap bounds")]
    RegionOutOfBounds { origin_row: u32, origin_col: u32 },

    #[error("Heightmap error: {0}")]
    HeightmapError(String),

    #[error("Terrain error: {0}")]
    TerrainError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Scree operations
pub type Result<T> = std::result::Result<T, ScreeError>;

impl From<toml::de::Error> for ScreeError {
    fn from(err: toml::de::Error) -> Self {
        ScreeError::TomlParseError(err.to_string())
    }
}

