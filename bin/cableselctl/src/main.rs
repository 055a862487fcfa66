//! ---
//! csel_section: "05-external-interfaces"
//! csel_subsection: "binary"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Command-line front end for the cable selection engine."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use cablesel_common::{init_tracing, AppConfig, LoadedAppConfig};
use clap::{Parser, Subcommand};
use tracing::debug;

mod batch;
mod catalogue;
mod evaluate;
mod tables;

const DEFAULT_CONFIG: &str = "configs/cablesel.toml";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "BS 7671 cable selection and compliance checks",
    long_about = None
)]
struct Cli {
    /// Configuration file, overriding `CABLESEL_CONFIG` and the default location.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a cable property table.
    Tables(tables::TablesArgs),
    /// List cable types by method or current, or cheaper alternatives.
    Catalogue(catalogue::CatalogueArgs),
    /// Rank cable sizes for one circuit.
    Evaluate(evaluate::EvaluateArgs),
    /// Evaluate a batch of circuits under shared site conditions.
    Batch(batch::BatchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = load_config(cli.config.as_ref())?;
    init_tracing("cableselctl", &loaded.config.logging)?;
    if let Some(source) = &loaded.source {
        debug!(config = %source.display(), "configuration loaded");
    }

    match cli.command {
        Commands::Tables(args) => tables::run(args)?,
        Commands::Catalogue(args) => catalogue::run(args)?,
        Commands::Evaluate(args) => evaluate::run(args, &loaded.config)?,
        Commands::Batch(args) => batch::run(args, &loaded.config)?,
    }
    Ok(())
}

fn load_config(explicit: Option<&PathBuf>) -> Result<LoadedAppConfig> {
    match explicit {
        Some(path) => Ok(LoadedAppConfig {
            config: AppConfig::from_path(path)?,
            source: Some(path.clone()),
        }),
        None => AppConfig::load_or_default(&[PathBuf::from(DEFAULT_CONFIG)]),
    }
}
