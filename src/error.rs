//! Error types for preset tables, sample grids and rendering.

use thiserror::Error;

/// Errors that can occur while building preset tables or grids, or while
/// handing a figure to a plot backend.
///
/// Evaluating a curve never fails; see [`evaluate_hermite()`](crate::evaluate_hermite).
#[derive(Error, Debug)]
pub enum EasingError {
    /// A preset entry lacks one of `p0`, `v0`, `p1` or `v1`.
    #[error("preset '{preset}' is missing parameter '{parameter}'")]
    MissingParameter {
        preset: String,
        parameter: &'static str,
    },

    /// A preset parameter is present but is not a number.
    #[error("parameter '{parameter}' of preset '{preset}' is not a number")]
    NonNumericParameter {
        preset: String,
        parameter: &'static str,
    },

    /// A preset entry is not a JSON object.
    #[error("preset '{preset}' must be an object with p0, v0, p1 and v1")]
    MalformedPreset { preset: String },

    /// A preset table document is not a JSON object.
    #[error("a preset table must be an object mapping names to presets")]
    MalformedTable,

    /// The same preset name was inserted into a table twice.
    #[error("preset '{0}' is defined more than once")]
    DuplicatePreset(String),

    /// The grid bounds or length cannot produce a strictly increasing grid.
    #[error("cannot sample {len} points on [{start}, {end}]")]
    InvalidGrid { start: f64, end: f64, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Failure reported by a caller-provided [`PlotBackend`](crate::PlotBackend).
    #[error("plot backend failed: {0}")]
    Backend(String),
}

/// Result type for preset, grid and rendering operations.
pub type Result<T> = core::result::Result<T, EasingError>;
