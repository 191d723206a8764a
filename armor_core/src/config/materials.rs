//! Material table loading

use super::ConfigError;
use crate::material::{MaterialEntry, MaterialTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One `[[materials]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDef {
    pub name: String,
    pub hp: f64,
    pub ac: f64,
    #[serde(default = "default_structural")]
    pub is_structural: bool,
}

fn default_structural() -> bool {
    true
}

/// Container for material definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialsConfig {
    pub materials: Vec<MaterialDef>,
}

/// Load a material table from a TOML file
pub fn load_material_table(path: &Path) -> Result<MaterialTable, ConfigError> {
    let config: MaterialsConfig = super::load_toml(path)?;
    build_table(config)
}

/// Load a material table from a TOML string
pub fn parse_material_table(content: &str) -> Result<MaterialTable, ConfigError> {
    let config: MaterialsConfig = super::parse_toml(content)?;
    build_table(config)
}

fn build_table(config: MaterialsConfig) -> Result<MaterialTable, ConfigError> {
    if config.materials.is_empty() {
        return Err(ConfigError::ValidationError(
            "material table is empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(config.materials.len());
    for def in config.materials {
        let name = def.name.trim().to_uppercase();
        if name.is_empty() {
            return Err(ConfigError::ValidationError(
                "material name is empty".to_string(),
            ));
        }
        if !seen.insert(name.clone()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate material: {}",
                name
            )));
        }
        if !(def.hp >= 0.0 && def.ac >= 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "material {} needs non-negative hp and ac",
                name
            )));
        }
        entries.push((name, MaterialEntry::new(def.hp, def.ac, def.is_structural)));
    }

    tracing::debug!(materials = entries.len(), "loaded material table");
    Ok(MaterialTable::from_entries(entries))
}
