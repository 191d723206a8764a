//! Penetration - Required KD for every useful AP
//!
//! Formula, per scored layer:
//! `layer_hp = hp * (ac / shell_ap) * (1 - cos(angle))`
//!
//! The running total is rounded (half to even) after every layer, so the
//! total is `round(round(round(l0) + l1) + l2)...` rather than one rounding
//! of the raw sum. The sweep covers `shell_ap = 0.1, 0.2, ...` while
//! `shell_ap <= max_ap`, where `max_ap` is the highest scored AC.

use super::{ApValue, KdTable, Layer};
use crate::config::{AngleUnit, CalcOptions, LayerRange};
use crate::error::{CalcError, Result};

/// Layers that contribute to `max_ap` and effective HP
pub fn scored_layers(layers: &[Layer], range: LayerRange) -> &[Layer] {
    match range {
        LayerRange::ExcludeLast => &layers[..layers.len().saturating_sub(1)],
        LayerRange::All => layers,
    }
}

/// `1 - cos(angle)`: 0 for a perpendicular hit
pub fn angle_multiplier(shell_angle: f64, unit: AngleUnit) -> f64 {
    1.0 - unit.to_radians(shell_angle).cos()
}

/// Highest AC among the scored layers; past it extra AP gains nothing
pub fn max_useful_ap(scored: &[Layer]) -> Result<f64> {
    scored
        .iter()
        .map(|layer| layer.ac)
        .reduce(f64::max)
        .ok_or(CalcError::EmptyChunk)
}

/// AP grid from 0.1 up to and including the last step not above `max_ap`
pub fn ap_steps(max_ap: f64) -> impl Iterator<Item = ApValue> {
    std::iter::successors(Some(ApValue::FIRST), |ap| Some(ap.next()))
        .take_while(move |ap| ap.value() <= max_ap)
}

/// Effective HP of the scored layers at one AP, rounded after each layer
pub fn effective_hp(scored: &[Layer], shell_ap: f64, angle_multiplier: f64) -> i64 {
    let total = scored.iter().fold(0.0_f64, |total, layer| {
        let ac_multiplier = layer.ac / shell_ap;
        let layer_hp = layer.hp * ac_multiplier * angle_multiplier;
        (total + layer_hp).round_ties_even()
    });
    total as i64
}

/// Required KD for every AP step.
///
/// Reads the layers' current AC, so the layering bonus must already be
/// applied for the intended results.
pub fn kd_table(layers: &[Layer], shell_angle: f64, options: CalcOptions) -> Result<KdTable> {
    let scored = scored_layers(layers, options.layer_range);
    let max_ap = max_useful_ap(scored)?;
    let multiplier = angle_multiplier(shell_angle, options.angle_unit);

    let mut table = KdTable::new();
    for ap in ap_steps(max_ap) {
        table.insert(ap, effective_hp(scored, ap.value(), multiplier));
    }

    tracing::debug!(
        scored = scored.len(),
        max_ap,
        multiplier,
        steps = table.len(),
        "computed kd table"
    );
    Ok(table)
}
