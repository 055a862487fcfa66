//! ---
//! csel_section: "05-external-interfaces"
//! csel_subsection: "binary"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "`catalogue` command: list cable types or cheaper alternatives for a size."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use anyhow::Result;
use cablesel_engine::{
    catalogue::{self, cables_for_current, cables_for_method, cost_effective_alternatives},
    model::{CableType, InstallationMethod},
};
use clap::Args;

#[derive(Debug, Args)]
pub struct CatalogueArgs {
    /// Only list cable types rated for this installation method.
    #[arg(long, value_name = "METHOD")]
    pub method: Option<InstallationMethod>,
    /// Only list cable types with a size carrying at least this current for
    /// `--method` (clipped-direct when omitted).
    #[arg(long, value_name = "AMPS")]
    pub min_current: Option<f64>,
    /// List cheaper constructions in the same size as this cable type.
    #[arg(long, value_name = "TYPE", requires = "size", conflicts_with_all = ["method", "min_current"])]
    pub alternatives_to: Option<CableType>,
    /// Conductor size in mm² for `--alternatives-to`.
    #[arg(long, value_name = "MM2")]
    pub size: Option<f64>,
    /// Highest acceptable retail price per metre for `--alternatives-to`.
    #[arg(long, value_name = "GBP")]
    pub budget: Option<f64>,
}

pub fn run(args: CatalogueArgs) -> Result<()> {
    if let (Some(cable_type), Some(size_mm2)) = (args.alternatives_to, args.size) {
        let alternatives =
            cost_effective_alternatives(cable_type, size_mm2, args.budget.unwrap_or(f64::MAX));
        println!("{}", serde_json::to_string_pretty(&alternatives)?);
        return Ok(());
    }

    let mut selected: Vec<CableType> = catalogue::catalogue()
        .iter()
        .map(|profile| profile.cable_type)
        .collect();
    if let Some(method) = args.method {
        let rated = cables_for_method(method);
        selected.retain(|cable_type| rated.contains(cable_type));
    }
    if let Some(min_current) = args.min_current {
        let capable = cables_for_current(min_current, args.method.unwrap_or_default());
        selected.retain(|cable_type| capable.contains(cable_type));
    }

    let profiles: Vec<_> = selected.into_iter().map(catalogue::profile).collect();
    println!("{}", serde_json::to_string_pretty(&profiles)?);
    Ok(())
}
