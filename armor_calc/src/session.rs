//! Prompt-driven session: collects layers and the shell angle line by line

use crate::CliError;
use armor_core::input::{parse_angle, parse_count, parse_material, parse_yes_no};
use armor_core::{ArmorChunk, MaterialTable, Result as CalcResult};
use std::io::{BufRead, Write};

/// Reads answers from `input` and writes prompts to `output`
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Ask for layers until the user declines, appending them to `chunk`
    pub fn collect_layers(
        &mut self,
        chunk: &mut ArmorChunk,
        table: &MaterialTable,
    ) -> Result<(), CliError> {
        let menu = material_menu(table);
        loop {
            let answer = self.prompt("Do you want to add more layers?  y/n")?;
            if !parse_yes_no(&answer) {
                break;
            }

            let (name, entry) = self.ask(&menu, |line| parse_material(line, table))?;
            let count = self.ask("How many consecutive layers of this material?", parse_count)?;

            chunk.add_material(entry, count);
            tracing::info!(material = %name, count, total = chunk.layers().len(), "added layers");
        }
        Ok(())
    }

    /// Ask for the shell angle in whole degrees
    pub fn collect_angle(&mut self) -> Result<u32, CliError> {
        self.ask("Enter shell angle in degrees, 0-90.", parse_angle)
    }

    /// Repeat `question` until `parse` accepts the answer
    fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> CalcResult<T>,
    ) -> Result<T, CliError> {
        loop {
            let line = self.prompt(question)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.output, "{}, try again.", err)?,
            }
        }
    }

    fn prompt(&mut self, question: &str) -> Result<String, CliError> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::UnexpectedEof);
        }
        Ok(line)
    }
}

fn material_menu(table: &MaterialTable) -> String {
    let mut menu = String::from("Enter layer material (not case-sensitive):");
    for name in table.names() {
        menu.push('\n');
        menu.push_str(name);
    }
    menu
}
