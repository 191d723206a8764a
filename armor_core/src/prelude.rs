//! Prelude module for convenient imports
//!
//! ```rust
//! use armor_core::prelude::*;
//! ```

// Model
pub use crate::chunk::{ApValue, ArmorChunk, ChunkState, KdTable, Layer};

// Materials
pub use crate::material::{MaterialEntry, MaterialTable};

// Config
pub use crate::config::{AngleUnit, CalcConfig, CalcOptions, LayerRange};

// Errors
pub use crate::error::{CalcError, Result};
