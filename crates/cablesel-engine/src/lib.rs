//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Crate root for the BS 7671 cable selection and compliance engine."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
//! Cable selection against BS 7671.
//!
//! Given an [`InstallationContext`], the engine ranks every size of the
//! general or ring final circuit table, then derives installation
//! suggestions and regulatory compliance verdicts for the best candidate.
//! Everything below [`engine`] is a pure function over the inputs, the
//! static tables in [`tables`] and the cable type profiles in [`catalogue`].

pub mod calculations;
pub mod catalogue;
pub mod classifier;
pub mod compliance;
pub mod engine;
pub mod errors;
pub mod io;
pub mod model;
pub mod reports;
pub mod suggestions;
pub mod tables;

pub use classifier::{CableRecommendation, Suitability};
pub use compliance::{ComplianceCheck, ComplianceStatus};
pub use engine::{
    analyse_circuit, evaluate, evaluate_many, is_ring_candidate, CircuitResult, SelectionReport,
};
pub use errors::{Result, SelectionError};
pub use model::{CircuitSpec, EnvironmentalSettings, InstallationContext};
pub use reports::ReportExporter;
pub use suggestions::InstallationSuggestion;
pub use tables::{find_optimal_cable_size, get_table};
