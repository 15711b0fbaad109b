//! Configuration errors
//!
//! Malformed geometry is rejected when a level is built. Nothing in the
//! stepping loop returns these.

use thiserror::Error;

/// A polygon definition that cannot be used by the collision core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// Texture coordinates present but not one per vertex.
    #[error("polygon has {vertices} vertices but {tex_coords} texture coordinates")]
    TexCoordMismatch { vertices: usize, tex_coords: usize },
    /// Vertices enclose no area.
    #[error("polygon has zero area")]
    Degenerate,
    /// Boundary turns both ways.
    #[error("polygon is not convex")]
    NonConvex,
}

/// Failure to load or build a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// JSON could not be parsed into a level description.
    #[error("level json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Level file could not be read.
    #[error("level io error: {0}")]
    Io(#[from] std::io::Error),
    /// A shape in the level is malformed.
    #[error("shape {index}: {source}")]
    Geometry {
        index: usize,
        #[source]
        source: GeometryError,
    },
    /// The actor's bounding shape is malformed.
    #[error("actor shape: {0}")]
    Actor(#[source] GeometryError),
    /// Settings supplied with the level are unusable.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Settings the stepper cannot run with.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A step limit that must be positive is not.
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    /// The horizontal clamp range is empty.
    #[error("play field is empty: min x {min} > max x {max}")]
    EmptyField { min: f32, max: f32 },
    /// JSON could not be parsed into settings.
    #[error("settings json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Settings file could not be read or written.
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
}
