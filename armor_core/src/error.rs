//! Error types for material lookup, input parsing and the chunk passes

use thiserror::Error;

/// Errors raised while building or solving an armor chunk
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),
    #[error("Invalid layer count: {0}")]
    InvalidCount(String),
    #[error("Invalid shell angle: {0} (expected a whole number of degrees, 0-90)")]
    InvalidAngle(String),
    /// No layer falls inside the scored range, so there is no useful AP
    #[error("Armor chunk has no layers to score")]
    EmptyChunk,
}

pub type Result<T> = std::result::Result<T, CalcError>;
