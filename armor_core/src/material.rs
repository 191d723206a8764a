//! Material table - Stats for 4-metre beams of each armor material

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Stats of a single 4-metre beam of one material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Beam health
    pub hp: f64,
    /// Armor class (called "Armor" in game)
    pub ac: f64,
    /// Whether the material contributes to layering
    pub is_structural: bool,
}

impl MaterialEntry {
    pub const fn new(hp: f64, ac: f64, is_structural: bool) -> Self {
        MaterialEntry {
            hp,
            ac,
            is_structural,
        }
    }
}

/// Built-in beam stats, in menu order
pub const STANDARD_MATERIALS: [(&str, MaterialEntry); 7] = [
    ("WOOD", MaterialEntry::new(864.0, 8.0, true)),
    ("METAL", MaterialEntry::new(1680.0, 40.0, true)),
    ("ALLOY", MaterialEntry::new(1440.0, 35.0, true)),
    ("STONE", MaterialEntry::new(1200.0, 16.0, true)),
    ("LEAD", MaterialEntry::new(1440.0, 10.0, true)),
    ("HA", MaterialEntry::new(6000.0, 60.0, true)),
    ("AIR", MaterialEntry::new(0.0, 0.0, false)),
];

/// Read-only lookup from canonical (upper-case) material name to its stats
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialTable {
    entries: Vec<(String, MaterialEntry)>,
}

impl MaterialTable {
    /// The built-in table, initialized once for the life of the process
    pub fn standard() -> &'static MaterialTable {
        static STANDARD: OnceLock<MaterialTable> = OnceLock::new();
        STANDARD.get_or_init(|| {
            MaterialTable::from_entries(
                STANDARD_MATERIALS
                    .iter()
                    .map(|(name, entry)| (name.to_string(), *entry)),
            )
        })
    }

    /// Build a table from (name, entry) pairs, keeping their order.
    ///
    /// Names are stored exactly as given; callers upper-case them first.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, MaterialEntry)>) -> Self {
        MaterialTable {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up a material by its canonical name
    pub fn lookup(&self, name: &str) -> Result<MaterialEntry> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, entry)| *entry)
            .ok_or_else(|| CalcError::UnknownMaterial(name.to_string()))
    }

    /// Material names in table order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        MaterialTable::standard().clone()
    }
}
