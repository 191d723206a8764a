//! Result rendering: plain `AP KD` lines or a JSON report

use armor_core::{ArmorChunk, CalcOptions, KdTable, Layer};
use serde::Serialize;
use std::io::{self, Write};

/// Everything needed to reproduce a table
#[derive(Serialize)]
pub struct Report<'a> {
    pub shell_angle: u32,
    pub options: CalcOptions,
    /// Layers with their effective AC
    pub layers: &'a [Layer],
    pub kd_required: &'a KdTable,
}

impl<'a> Report<'a> {
    pub fn new(chunk: &'a ArmorChunk, shell_angle: u32) -> Self {
        Report {
            shell_angle,
            options: chunk.config().options,
            layers: chunk.layers(),
            kd_required: chunk.kd_required(),
        }
    }
}

/// One `AP KD` line per step, ascending
pub fn write_table(out: &mut impl Write, chunk: &ArmorChunk) -> io::Result<()> {
    for (ap, kd) in chunk.render() {
        writeln!(out, "{:.1} {}", ap, kd)?;
    }
    Ok(())
}

pub fn write_json(out: &mut impl Write, report: &Report<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
