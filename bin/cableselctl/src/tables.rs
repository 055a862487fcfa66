//! ---
//! csel_section: "05-external-interfaces"
//! csel_subsection: "binary"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "`tables` command: print the general or ring cable property table."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use anyhow::Result;
use cablesel_engine::get_table;
use clap::Args;

#[derive(Debug, Args)]
pub struct TablesArgs {
    /// Show the ring final circuit table instead of the general one.
    #[arg(long)]
    pub ring: bool,
}

pub fn run(args: TablesArgs) -> Result<()> {
    let table = get_table(args.ring);
    println!("{}", serde_json::to_string_pretty(table)?);
    Ok(())
}
