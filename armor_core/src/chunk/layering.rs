//! Layering - Effective AC from adjacent structural layers
//!
//! A structural layer gains a share of the AC of the structural layer
//! stacked directly after it:
//! `effective_ac = ac + next.ac * boost_factor`
//!
//! The bonus is read from the next layer's *base* AC, so it never
//! compounds beyond one hop. The last layer has no successor and keeps
//! its base AC.

use super::Layer;

/// Apply the layering bonus in place, in a single left-to-right pass.
///
/// Not idempotent: running it again on boosted layers adds the bonus again.
pub fn apply_layering(layers: &mut [Layer], boost_factor: f64) {
    for i in 0..layers.len().saturating_sub(1) {
        let next = layers[i + 1];
        let boost = next.ac * boost_factor;

        let current = &mut layers[i];
        if current.is_structural && next.is_structural {
            current.ac += boost;
        }
    }
}

/// Boosted copy of `layers`; the input is left untouched
pub fn effective_layers(layers: &[Layer], boost_factor: f64) -> Vec<Layer> {
    let mut boosted = layers.to_vec();
    apply_layering(&mut boosted, boost_factor);
    boosted
}
