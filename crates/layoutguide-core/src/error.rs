//! Errors surfaced by the guidance engine.

use thiserror::Error;

/// Guidance errors.
///
/// Geometry never fails; malformed components are skipped instead. These
/// errors cover configuration and misuse of the orchestrator.
#[derive(Debug, Error)]
pub enum GuidanceError {
    #[error("Pointer sample received while no drag is active")]
    NotDragging,
    #[error("Invalid configuration value for {field}: {value}")]
    InvalidConfig { field: &'static str, value: f64 },
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type for guidance operations.
pub type Result<T> = std::result::Result<T, GuidanceError>;
