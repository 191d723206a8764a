//! ArmorChunk - Ordered armor layers and the KD needed to punch through them

pub mod layering;
pub mod penetration;
mod table;

pub use table::{ApValue, KdTable};

use crate::config::CalcConfig;
use crate::error::Result;
use crate::material::MaterialEntry;
use serde::{Deserialize, Serialize};

/// One 4-metre slab of a single material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub hp: f64,
    /// Base AC until the layering pass runs, effective AC afterwards
    pub ac: f64,
    pub is_structural: bool,
}

impl Layer {
    pub fn new(hp: f64, ac: f64, is_structural: bool) -> Self {
        Layer {
            hp,
            ac,
            is_structural,
        }
    }

    /// A layer that takes part in layering
    pub fn structural(hp: f64, ac: f64) -> Self {
        Layer::new(hp, ac, true)
    }
}

impl From<MaterialEntry> for Layer {
    fn from(entry: MaterialEntry) -> Self {
        Layer::new(entry.hp, entry.ac, entry.is_structural)
    }
}

/// Where a chunk is in its build -> boost -> solve lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkState {
    Empty,
    Populated,
    Boosted,
    Solved,
}

/// Stats for all layers of a chunk of armor.
///
/// Layers are stored outermost first, in the order they were added.
/// Call [`ArmorChunk::effective_ac_pass`] once, then
/// [`ArmorChunk::kd_required_pass`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArmorChunk {
    layers: Vec<Layer>,
    kd_required: KdTable,
    #[serde(skip)]
    config: CalcConfig,
    #[serde(skip)]
    boost_passes: u32,
    #[serde(skip)]
    solved: bool,
}

impl ArmorChunk {
    /// Create an empty chunk with the default (legacy) settings
    pub fn new() -> Self {
        ArmorChunk::default()
    }

    pub fn with_config(config: CalcConfig) -> Self {
        ArmorChunk {
            config,
            ..ArmorChunk::default()
        }
    }

    /// Append a layer. Values are taken as given.
    pub fn add_layer(&mut self, hp: f64, ac: f64, is_structural: bool) {
        self.layers.push(Layer::new(hp, ac, is_structural));
    }

    /// Append `count` consecutive layers of one material
    pub fn add_material(&mut self, entry: MaterialEntry, count: usize) {
        self.layers
            .extend(std::iter::repeat(Layer::from(entry)).take(count));
    }

    /// Apply the layering bonus to every layer in place.
    ///
    /// Not idempotent: a second call boosts the already boosted layers again.
    pub fn effective_ac_pass(&mut self) {
        if self.boost_passes > 0 {
            tracing::warn!(
                passes = self.boost_passes + 1,
                "layering applied again; AC bonuses will stack"
            );
        }
        layering::apply_layering(&mut self.layers, self.config.layering.boost_factor);
        self.boost_passes += 1;
        tracing::debug!(layers = self.layers.len(), "applied layering");
    }

    /// Boosted copy of this chunk; `self` is left as it is
    pub fn layered(&self) -> ArmorChunk {
        let mut copy = self.clone();
        copy.effective_ac_pass();
        copy
    }

    /// Fill the KD table for every useful AP at `shell_angle`.
    ///
    /// Replaces any previous results. On error nothing is stored.
    pub fn kd_required_pass(&mut self, shell_angle: f64) -> Result<()> {
        if self.boost_passes == 0 {
            tracing::warn!("computing KD before layering; results use base AC");
        }
        let table = penetration::kd_table(&self.layers, shell_angle, self.config.options)?;
        self.kd_required = table;
        self.solved = true;
        Ok(())
    }

    /// (AP, KD) pairs in ascending AP order. Can be called any number of times.
    pub fn render(&self) -> impl Iterator<Item = (f64, i64)> + Clone + '_ {
        self.kd_required.iter().map(|(ap, kd)| (ap.value(), kd))
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn kd_required(&self) -> &KdTable {
        &self.kd_required
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn boost_passes(&self) -> u32 {
        self.boost_passes
    }

    pub fn state(&self) -> ChunkState {
        if self.layers.is_empty() {
            ChunkState::Empty
        } else if self.solved {
            ChunkState::Solved
        } else if self.boost_passes > 0 {
            ChunkState::Boosted
        } else {
            ChunkState::Populated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AngleUnit, CalcOptions, LayerRange};
    use crate::error::CalcError;
    use crate::material::MaterialTable;

    fn material(name: &str) -> MaterialEntry {
        MaterialTable::standard().lookup(name).unwrap()
    }

    #[test]
    fn test_add_layer_keeps_order() {
        let mut chunk = ArmorChunk::new();
        chunk.add_layer(864.0, 8.0, true);
        chunk.add_layer(0.0, 0.0, false);
        chunk.add_layer(1680.0, 40.0, true);

        let acs: Vec<f64> = chunk.layers().iter().map(|l| l.ac).collect();
        assert_eq!(acs, vec![8.0, 0.0, 40.0]);
        assert!(!chunk.layers()[1].is_structural);
    }

    #[test]
    fn test_add_layer_accepts_anything() {
        let mut chunk = ArmorChunk::new();
        chunk.add_layer(-10.0, 0.0, true);
        assert!((chunk.layers()[0].hp + 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_material_repeats() {
        let mut chunk = ArmorChunk::new();
        chunk.add_material(material("LEAD"), 3);
        chunk.add_material(material("AIR"), 0);
        assert_eq!(chunk.layers().len(), 3);
        assert!(chunk.layers().iter().all(|l| (l.hp - 1440.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_state_machine() {
        let mut chunk = ArmorChunk::new();
        assert_eq!(chunk.state(), ChunkState::Empty);

        chunk.add_material(material("METAL"), 2);
        assert_eq!(chunk.state(), ChunkState::Populated);

        chunk.effective_ac_pass();
        assert_eq!(chunk.state(), ChunkState::Boosted);

        chunk.kd_required_pass(45.0).unwrap();
        assert_eq!(chunk.state(), ChunkState::Solved);
    }

    #[test]
    fn test_two_structural_layers_boost() {
        let mut chunk = ArmorChunk::new();
        chunk.add_material(material("HA"), 1);
        chunk.add_material(material("METAL"), 1);
        chunk.effective_ac_pass();

        assert!((chunk.layers()[0].ac - (60.0 + 0.2 * 40.0)).abs() < 1e-9);
        assert!((chunk.layers()[1].ac - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_air_blocks_boost() {
        let mut chunk = ArmorChunk::new();
        chunk.add_material(material("METAL"), 1);
        chunk.add_layer(0.0, 500.0, false);
        chunk.effective_ac_pass();
        assert!((chunk.layers()[0].ac - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_effective_ac_pass_is_not_idempotent() {
        let mut once = ArmorChunk::new();
        once.add_material(material("METAL"), 2);
        once.effective_ac_pass();

        let mut twice = once.clone();
        twice.effective_ac_pass();

        assert_eq!(twice.boost_passes(), 2);
        assert!((once.layers()[0].ac - 48.0).abs() < 1e-9);
        assert!((twice.layers()[0].ac - 56.0).abs() < 1e-9);
        assert_ne!(once.layers(), twice.layers());
    }

    #[test]
    fn test_layered_copy_preserves_original() {
        let mut chunk = ArmorChunk::new();
        chunk.add_material(material("ALLOY"), 2);

        let boosted = chunk.layered();
        assert_eq!(chunk.state(), ChunkState::Populated);
        assert!((chunk.layers()[0].ac - 35.0).abs() < f64::EPSILON);
        assert!((boosted.layers()[0].ac - 42.0).abs() < 1e-9);

        // Re-running from the preserved original gives the same result
        assert_eq!(chunk.layered().layers(), boosted.layers());
    }

    #[test]
    fn test_metal_over_air_scenario() {
        let mut chunk = ArmorChunk::new();
        chunk.add_material(material("METAL"), 1);
        chunk.add_material(material("AIR"), 1);
        chunk.effective_ac_pass();
        chunk.kd_required_pass(90.0).unwrap();

        let rows: Vec<(f64, i64)> = chunk.render().collect();
        assert_eq!(rows.len(), 400);
        assert_eq!(rows[0], (0.1, 973_105));
        assert_eq!(rows[399], (40.0, 2_433));
    }

    #[test]
    fn test_kd_before_boost_uses_base_ac() {
        let mut unboosted = ArmorChunk::new();
        unboosted.add_material(material("METAL"), 3);
        let mut boosted = unboosted.layered();

        unboosted.kd_required_pass(30.0).unwrap();
        boosted.kd_required_pass(30.0).unwrap();

        // Base METAL tops out at 40, boosted METAL at 48
        assert_eq!(unboosted.kd_required().last().unwrap().0, ApValue::from_tenths(400));
        assert_eq!(boosted.kd_required().last().unwrap().0, ApValue::from_tenths(480));
    }

    #[test]
    fn test_empty_and_single_layer_chunks() {
        let mut empty = ArmorChunk::new();
        empty.effective_ac_pass();
        assert_eq!(empty.kd_required_pass(45.0), Err(CalcError::EmptyChunk));
        assert_eq!(empty.state(), ChunkState::Empty);

        let mut single = ArmorChunk::new();
        single.add_material(material("HA"), 1);
        single.effective_ac_pass();
        assert!((single.layers()[0].ac - 60.0).abs() < f64::EPSILON);
        assert_eq!(single.kd_required_pass(45.0), Err(CalcError::EmptyChunk));
        assert!(single.kd_required().is_empty());
        assert_eq!(single.state(), ChunkState::Boosted);
    }

    #[test]
    fn test_rerun_replaces_table() {
        let mut chunk = ArmorChunk::new();
        chunk.add_material(material("METAL"), 2);
        chunk.effective_ac_pass();
        chunk.kd_required_pass(45.0).unwrap();
        let first = chunk.kd_required().clone();

        chunk.kd_required_pass(0.0).unwrap();
        assert_eq!(chunk.kd_required().len(), first.len());
        assert!(chunk.render().all(|(_, kd)| kd == 0));
    }

    #[test]
    fn test_render_is_restartable() {
        let mut chunk = ArmorChunk::new();
        chunk.add_material(material("WOOD"), 2);
        chunk.effective_ac_pass();
        chunk.kd_required_pass(10.0).unwrap();

        let rows = chunk.render();
        let again = rows.clone();
        assert_eq!(rows.count(), again.count());
        assert_eq!(chunk.render().next().map(|(ap, _)| ap), Some(0.1));
    }

    #[test]
    fn test_corrected_mode() {
        let config = CalcConfig {
            options: CalcOptions {
                layer_range: LayerRange::All,
                angle_unit: AngleUnit::Degrees,
            },
            ..CalcConfig::default()
        };
        let mut chunk = ArmorChunk::with_config(config);
        chunk.add_material(material("METAL"), 1);
        chunk.add_material(material("HA"), 1);
        chunk.effective_ac_pass();
        chunk.kd_required_pass(60.0).unwrap();

        // HA is now scored, so the sweep reaches 60.0
        let (last_ap, last_kd) = chunk.kd_required().last().unwrap();
        assert_eq!(last_ap, ApValue::from_tenths(600));
        // METAL (ac 52): round(1680 * 52/60 * 0.5) = 728
        // HA (ac 60):    round(728 + 6000 * 1 * 0.5) = 3728
        assert_eq!(last_kd, 3_728);
    }

    #[test]
    fn test_chunk_json() {
        let mut chunk = ArmorChunk::new();
        chunk.add_material(material("WOOD"), 1);
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["layers"][0]["ac"], 8.0);
        assert!(json["kd_required"].as_array().unwrap().is_empty());
    }
}
