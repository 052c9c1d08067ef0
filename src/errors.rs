//! Error types for graph configuration and the WASM API boundary

use thiserror::Error;

/// Errors surfaced by graph construction and API misuse
///
/// Steady-state drawing never fails; degenerate input degrades to
/// "no visible change" instead of producing an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid domain: min {min} must be less than max {max}")]
    InvalidDomain { min: i32, max: i32 },

    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidSurface { width: f64, height: f64 },

    #[error("surface width {width} too narrow for number line (needs {required})")]
    SurfaceTooNarrow { width: f64, required: f64 },

    #[error("graph not initialized: call createGraph first")]
    NotInitialized,
}
