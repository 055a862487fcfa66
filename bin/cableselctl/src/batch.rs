//! ---
//! csel_section: "05-external-interfaces"
//! csel_subsection: "binary"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "`batch` command: evaluate many circuits under shared site conditions."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::{Context, Result};
use cablesel_common::AppConfig;
use cablesel_engine::{evaluate_many, io::load_circuits_from_file, ReportExporter};
use clap::Args;
use tracing::{info, warn};

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Circuit list (JSON or YAML), optionally with an `environment` section.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Named environment preset from the configuration file.
    #[arg(long, value_name = "NAME")]
    pub environment: Option<String>,
    /// Write the batch report into this directory.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Site conditions: `--environment` preset, then the file's own section,
/// then the configured defaults.
pub fn run(args: BatchArgs, config: &AppConfig) -> Result<()> {
    let batch = load_circuits_from_file(&args.file)
        .with_context(|| format!("failed to load circuits from {}", args.file.display()))?;

    let environment = match (&args.environment, &batch.environment) {
        (Some(name), _) => config.environment(Some(name))?.clone(),
        (None, Some(from_file)) => from_file.clone(),
        (None, None) => config.environment(None)?.clone(),
    };
    info!(
        circuits = batch.circuits.len(),
        preset = args.environment.as_deref().unwrap_or("default"),
        "evaluating batch"
    );

    let results = evaluate_many(&batch.circuits, &environment)?;
    for result in &results {
        if !result.report.has_suitable() {
            warn!(circuit = %result.name, "no suitable cable size");
        }
    }
    println!("{}", serde_json::to_string_pretty(&results)?);

    if let Some(dir) = args.output {
        ReportExporter::new()
            .export_batch(&results, &dir)
            .with_context(|| format!("failed to export batch report to {}", dir.display()))?;
    }
    Ok(())
}
