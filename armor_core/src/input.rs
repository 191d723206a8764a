//! Input parsing - Turning raw driver input into typed values
//!
//! Each parser trims surrounding whitespace and reports failures as
//! [`CalcError`] so a driver can re-prompt or bail out.

use crate::error::{CalcError, Result};
use crate::material::{MaterialEntry, MaterialTable};

/// Largest accepted shell angle in degrees (a grazing hit)
pub const MAX_SHELL_ANGLE: u32 = 90;

/// Answer to "add more layers?": only `y`/`Y` means yes
pub fn parse_yes_no(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Case-insensitive material lookup; returns the canonical name with its stats
pub fn parse_material(input: &str, table: &MaterialTable) -> Result<(String, MaterialEntry)> {
    let name = input.trim().to_uppercase();
    let entry = table.lookup(&name)?;
    Ok((name, entry))
}

/// Number of consecutive layers; must be a positive integer
pub fn parse_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(CalcError::InvalidCount(trimmed.to_string())),
    }
}

/// Shell angle as a whole number of degrees in `0..=90`
pub fn parse_angle(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(angle) if angle <= MAX_SHELL_ANGLE => Ok(angle),
        _ => Err(CalcError::InvalidAngle(trimmed.to_string())),
    }
}

/// Parse a `MATERIAL[:COUNT]` layer spec, e.g. `metal:3` or `air`
pub fn parse_layer_spec(input: &str, table: &MaterialTable) -> Result<(String, MaterialEntry, usize)> {
    let (material, count) = match input.split_once(':') {
        Some((material, count)) => (material, parse_count(count)?),
        None => (input, 1),
    };
    let (name, entry) = parse_material(material, table)?;
    Ok((name, entry, count))
}
