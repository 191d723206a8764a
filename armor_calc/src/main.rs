//! armor_calc - Required kinetic damage to penetrate a layered armor chunk
//!
//! With no `--layer` flags the layers and angle are collected from prompts.
//! Otherwise the chunk is built from the flags and nothing is asked.

mod output;
mod session;

use armor_core::config::{load_calc_config, load_material_table, ConfigError};
use armor_core::input::{parse_angle, parse_layer_spec};
use armor_core::{AngleUnit, ArmorChunk, CalcConfig, CalcError, LayerRange, MaterialTable};
use clap::Parser;
use output::Report;
use session::Session;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Calculate the KD required to penetrate an armor chunk at every useful AP
#[derive(Parser, Debug)]
#[command(name = "armor_calc")]
#[command(about = "Calculate required kinetic damage for a layered armor chunk")]
struct Args {
    /// Layer spec MATERIAL[:COUNT], outermost first (repeatable); skips the prompts
    #[arg(long = "layer", short = 'l', value_name = "MATERIAL[:COUNT]")]
    layers: Vec<String>,

    /// Shell angle in whole degrees, 0-90
    #[arg(long, short = 'a')]
    angle: Option<String>,

    /// Calculation settings (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Material table replacing the built-in one (TOML)
    #[arg(long)]
    materials: Option<PathBuf>,

    /// Score the last layer too
    #[arg(long)]
    include_last_layer: bool,

    /// Convert the angle from degrees before taking its cosine
    #[arg(long)]
    angle_in_degrees: bool,

    /// Print a JSON report instead of `AP KD` lines
    #[arg(long)]
    json: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Input ended before the armor chunk was complete")]
    UnexpectedEof,
    #[error("--angle is required when layers are given with --layer")]
    MissingAngle,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("armor_calc=info,armor_core=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = resolve_config(&args)?;

    let custom_table;
    let table = match &args.materials {
        Some(path) => {
            custom_table = load_material_table(path)?;
            &custom_table
        }
        None => MaterialTable::standard(),
    };

    let mut chunk = ArmorChunk::with_config(config);
    let shell_angle = if args.layers.is_empty() {
        let stdin = io::stdin();
        let mut session = Session::new(stdin.lock(), io::stdout());
        session.collect_layers(&mut chunk, table)?;
        match &args.angle {
            Some(angle) => parse_angle(angle)?,
            None => session.collect_angle()?,
        }
    } else {
        for spec in &args.layers {
            let (name, entry, count) = parse_layer_spec(spec, table)?;
            chunk.add_material(entry, count);
            tracing::debug!(material = %name, count, "added layers");
        }
        let angle = args.angle.as_deref().ok_or(CliError::MissingAngle)?;
        parse_angle(angle)?
    };

    chunk.effective_ac_pass();
    chunk.kd_required_pass(f64::from(shell_angle))?;
    tracing::info!(
        layers = chunk.layers().len(),
        steps = chunk.kd_required().len(),
        shell_angle,
        "solved armor chunk"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        output::write_json(&mut out, &Report::new(&chunk, shell_angle))?;
    } else {
        output::write_table(&mut out, &chunk)?;
    }
    out.flush()?;
    Ok(())
}

/// Config file (if any) with the command-line switches applied on top
fn resolve_config(args: &Args) -> Result<CalcConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_calc_config(path)?,
        None => CalcConfig::default(),
    };
    if args.include_last_layer {
        config.options.layer_range = LayerRange::All;
    }
    if args.angle_in_degrees {
        config.options.angle_unit = AngleUnit::Degrees;
    }
    Ok(config)
}
