//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Orchestrates candidate evaluation, ranking, suggestions and compliance for single and batch circuits."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    calculations::{estimate_zs, RING_MAX_LENGTH_M, RING_MAX_LOAD_W},
    classifier::{classify, CableRecommendation, CircuitBasis, Suitability},
    compliance::{compliance_checks, ComplianceCheck},
    errors::{Result, SelectionError},
    model::{CircuitSpec, EnvironmentalSettings, InstallationContext, LoadType},
    suggestions::{suggestions, InstallationSuggestion},
    tables::get_table,
};

/// Recommendations, hints and compliance verdicts for one circuit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectionReport {
    pub is_ring: bool,
    pub design_current_a: f64,
    pub derating_factor: f64,
    pub zs_ohm: f64,
    pub recommendations: Vec<CableRecommendation>,
    pub suggestions: Vec<InstallationSuggestion>,
    pub compliance: Vec<ComplianceCheck>,
}

impl SelectionReport {
    pub fn best(&self) -> Option<&CableRecommendation> {
        self.recommendations.first()
    }

    pub fn has_suitable(&self) -> bool {
        self.recommendations
            .iter()
            .any(|candidate| candidate.suitability == Suitability::Suitable)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitResult {
    pub circuit_id: Uuid,
    pub name: String,
    pub report: SelectionReport,
}

/// Power circuits short and light enough to be wired as a ring final circuit.
pub fn is_ring_candidate(context: &InstallationContext) -> bool {
    context.load_type == LoadType::Power
        && context.run_length_m <= RING_MAX_LENGTH_M
        && context.total_load_w <= RING_MAX_LOAD_W
}

/// Evaluate every size in the selected table and rank the results.
///
/// Ordering is suitability tier, then cost tier, then conductor size, then
/// voltage drop. A list with no suitable entry is a valid outcome.
pub fn evaluate(context: &InstallationContext, is_ring: bool) -> Result<Vec<CableRecommendation>> {
    context.validate()?;
    let table = get_table(is_ring);
    if table.is_empty() {
        return Err(SelectionError::EmptyCableTable);
    }

    let basis = CircuitBasis::from_context(context);
    info!(
        table = table.name(),
        candidates = table.len(),
        design_current_a = basis.design_current_a,
        derating_factor = basis.derating_factor,
        "evaluating cable candidates"
    );

    let mut ranked: Vec<CableRecommendation> = table
        .iter()
        .map(|spec| classify(context, &basis, spec, is_ring))
        .collect();
    ranked.sort_by(rank_order);

    if !ranked
        .iter()
        .any(|candidate| candidate.suitability == Suitability::Suitable)
    {
        warn!(
            table = table.name(),
            load_w = context.total_load_w,
            run_length_m = context.run_length_m,
            "no suitable cable size found"
        );
    }

    Ok(ranked)
}

fn rank_order(left: &CableRecommendation, right: &CableRecommendation) -> Ordering {
    left.suitability
        .cmp(&right.suitability)
        .then_with(|| left.cost.cmp(&right.cost))
        .then_with(|| left.size_mm2.total_cmp(&right.size_mm2))
        .then_with(|| left.voltage_drop_percent.total_cmp(&right.voltage_drop_percent))
}

/// Full analysis of one circuit. Without a measured `zs_ohm` the loop
/// impedance is estimated from Ze and the top-ranked conductor.
pub fn analyse_circuit(
    context: &InstallationContext,
    is_ring: bool,
    zs_ohm: Option<f64>,
) -> Result<SelectionReport> {
    if let Some(zs) = zs_ohm {
        if !zs.is_finite() || zs < 0.0 {
            return Err(SelectionError::invalid(
                "zs_ohm",
                format!("must not be negative, got {zs}"),
            ));
        }
    }

    let recommendations = evaluate(context, is_ring)?;
    let top = recommendations
        .first()
        .ok_or(SelectionError::EmptyCableTable)?;

    let zs_ohm = match zs_ohm {
        Some(measured) => measured,
        None => {
            let spec = get_table(is_ring)
                .get(&top.size)
                .ok_or_else(|| SelectionError::UnknownCableSize(top.size.clone()))?;
            let estimated = estimate_zs(context, spec, is_ring);
            debug!(size = %top.size, zs_ohm = estimated, "estimated loop impedance");
            estimated
        }
    };

    let compliance = compliance_checks(context, zs_ohm, top, is_ring);
    let suggestions = suggestions(context, &recommendations, is_ring);
    let basis = CircuitBasis::from_context(context);

    Ok(SelectionReport {
        is_ring,
        design_current_a: basis.design_current_a,
        derating_factor: basis.derating_factor,
        zs_ohm,
        recommendations,
        suggestions,
        compliance,
    })
}

/// Evaluate a batch of circuits under shared site conditions. Topology is
/// auto-detected per circuit.
pub fn evaluate_many(
    circuits: &[CircuitSpec],
    environment: &EnvironmentalSettings,
) -> Result<Vec<CircuitResult>> {
    environment.validate()?;
    info!(
        circuits = circuits.len(),
        ambient_c = environment.ambient_temperature_c,
        grouping_factor = environment.grouping_factor,
        "evaluating circuit batch"
    );

    circuits
        .iter()
        .map(|circuit| {
            circuit.validate()?;
            let context = circuit.with_environment(environment);
            let is_ring = is_ring_candidate(&context);
            info!(circuit = %circuit.name, is_ring, "circuit topology detected");
            Ok(CircuitResult {
                circuit_id: circuit.id,
                name: circuit.name.clone(),
                report: analyse_circuit(&context, is_ring, None)?,
            })
        })
        .collect()
}
