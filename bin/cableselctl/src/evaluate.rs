//! ---
//! csel_section: "05-external-interfaces"
//! csel_subsection: "binary"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "`evaluate` command: rank cable sizes for one circuit."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{Context, Result};
use cablesel_common::AppConfig;
use cablesel_engine::{
    analyse_circuit, io::load_context_from_file, is_ring_candidate, ReportExporter,
};
use clap::Args;
use tracing::info;

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Circuit descriptor (JSON or YAML).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Evaluate as a ring final circuit.
    #[arg(long, conflicts_with = "auto_ring")]
    pub ring: bool,
    /// Treat the circuit as a ring when it qualifies as one.
    #[arg(long)]
    pub auto_ring: bool,
    /// Measured earth fault loop impedance; estimated from Ze when omitted.
    #[arg(long, value_name = "OHMS")]
    pub zs: Option<f64>,
    /// Write JSON reports into this directory.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// Write reports to the configured reports directory.
    #[arg(long, conflicts_with = "output")]
    pub export: bool,
}

pub fn run(args: EvaluateArgs, config: &AppConfig) -> Result<()> {
    let context = load_context_from_file(&args.file)
        .with_context(|| format!("failed to load circuit from {}", args.file.display()))?;
    let is_ring = args.ring || (args.auto_ring && is_ring_candidate(&context));
    info!(file = %args.file.display(), is_ring, "evaluating circuit");

    let report = analyse_circuit(&context, is_ring, args.zs)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    let output = match (args.output, args.export) {
        (Some(dir), _) => Some(dir),
        (None, true) => Some(config.reports.directory.clone()),
        (None, false) => None,
    };
    if let Some(dir) = output {
        ReportExporter::new()
            .export_selection(&report, &dir)
            .with_context(|| format!("failed to export reports to {}", dir.display()))?;
    }
    Ok(())
}
