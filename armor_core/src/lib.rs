//! armor_core - Layered armor model and KD-required penetration calculator
//!
//! This library provides:
//! - MaterialTable: Named beam materials (hp, ac, structural flag)
//! - ArmorChunk: Ordered armor layers plus the per-AP KD results
//! - Layering: Effective AC from adjacent structural layers
//! - Penetration: Required KD for every useful AP at a given shell angle

pub mod chunk;
pub mod config;
pub mod error;
pub mod input;
pub mod material;
pub mod prelude;

// Re-export core types for convenience
pub use chunk::{ApValue, ArmorChunk, ChunkState, KdTable, Layer};
pub use config::{AngleUnit, CalcConfig, CalcOptions, LayerRange, LayeringConstants};
pub use error::{CalcError, Result};
pub use material::{MaterialEntry, MaterialTable};
