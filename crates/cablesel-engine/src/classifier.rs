//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Per-candidate suitability classification and verdict notes."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::debug;

use crate::{
    calculations::{
        derating_factor, design_current, max_voltage_drop_percent, select_device_rating,
        voltage_drop, CURRENT_MARGIN, RING_MAX_LENGTH_M,
    },
    catalogue::profile,
    model::{
        CableType, ConductorMaterial, InstallationContext, InstallationMethod, SpecialRequirement,
    },
    tables::{AvailabilityTier, CableSpecification, ComplexityTier, CostTier},
};

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Suitability {
    Suitable,
    Marginal,
    Unsuitable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuitabilityChecks {
    pub current_ok: bool,
    pub voltage_drop_ok: bool,
    pub length_ok: bool,
    pub device_compatible: bool,
}

impl SuitabilityChecks {
    /// First matching row wins: all four pass is suitable; current capacity
    /// plus either voltage drop or run length is marginal; anything else is
    /// unsuitable.
    pub fn tier(&self) -> Suitability {
        if self.current_ok && self.voltage_drop_ok && self.length_ok && self.device_compatible {
            Suitability::Suitable
        } else if self.current_ok && (self.voltage_drop_ok || self.length_ok) {
            Suitability::Marginal
        } else {
            Suitability::Unsuitable
        }
    }
}

/// Values computed once per circuit and shared by every candidate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CircuitBasis {
    pub design_current_a: f64,
    pub derating_factor: f64,
    pub max_voltage_drop_percent: f64,
}

impl CircuitBasis {
    pub fn from_context(context: &InstallationContext) -> Self {
        Self {
            design_current_a: design_current(context),
            derating_factor: derating_factor(context),
            max_voltage_drop_percent: max_voltage_drop_percent(context),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CableRecommendation {
    pub size: String,
    pub size_mm2: f64,
    pub cable_type: CableType,
    /// Derated capacity rounded to 0.1 A for display.
    pub derated_capacity_a: f64,
    /// Unrounded derated capacity (Iz) used by the coordination checks.
    pub iz_a: f64,
    pub voltage_drop_percent: f64,
    pub device_rating_a: u32,
    pub suitability: Suitability,
    pub checks: SuitabilityChecks,
    /// The chosen cable type is made in this size and rated for the method.
    /// Informational; suitability comes from `checks` alone.
    pub cable_type_fits: bool,
    pub notes: Vec<String>,
    pub cost: CostTier,
    pub availability: AvailabilityTier,
    pub installation_complexity: ComplexityTier,
    pub special_considerations: Vec<String>,
}

pub fn classify(
    context: &InstallationContext,
    basis: &CircuitBasis,
    spec: &CableSpecification,
    is_ring: bool,
) -> CableRecommendation {
    let tabulated_a = spec.ampacity.for_method(context.installation_method);
    let derated_a = tabulated_a * basis.derating_factor;
    let required_a = basis.design_current_a * CURRENT_MARGIN;
    let drop = voltage_drop(context, spec, is_ring);
    let device_rating_a = select_device_rating(basis.design_current_a, derated_a, spec);

    let checks = SuitabilityChecks {
        current_ok: derated_a >= required_a,
        voltage_drop_ok: drop.percent <= basis.max_voltage_drop_percent,
        length_ok: context.run_length_m <= spec.max_length_m,
        device_compatible: spec.breaker_range_contains(device_rating_a),
    };
    let suitability = checks.tier();

    let mut notes = Vec::new();
    if !checks.current_ok {
        notes.push(format!(
            "Derated capacity {:.1} A is below the required {:.1} A ({CURRENT_MARGIN} × design current {:.2} A)",
            derated_a, required_a, basis.design_current_a
        ));
    }
    if !checks.voltage_drop_ok {
        notes.push(format!(
            "Voltage drop {:.2}% ({:.2} V) exceeds the {:.1}% limit for {} circuits",
            drop.percent, drop.volts, basis.max_voltage_drop_percent, context.load_type
        ));
    }
    if !checks.length_ok {
        notes.push(format!(
            "Run length {:.1} m exceeds the {:.0} m maximum recommended for {}",
            context.run_length_m, spec.max_length_m, spec.size
        ));
    }
    if !checks.device_compatible {
        notes.push(format!(
            "Protective device {} A lies outside the {}-{} A range compatible with {}",
            device_rating_a, spec.min_breaker_a, spec.max_breaker_a, spec.size
        ));
    }
    if suitability == Suitability::Suitable {
        notes.push(format!(
            "{} meets all selection criteria: {:.1} A derated capacity (method {}), {:.2}% voltage drop, {} A device",
            spec.size,
            derated_a,
            context.installation_method.reference_method(),
            drop.percent,
            device_rating_a
        ));
        if is_ring {
            notes.push(format!(
                "Ring final circuit: {:.1} m run within the {RING_MAX_LENGTH_M} m ring limit",
                context.run_length_m
            ));
        }
    }

    let construction = profile(context.cable_type);
    let cable_type_fits = construction.fits(spec.size_mm2, context.installation_method);
    if !construction.is_made_in(spec.size_mm2) {
        notes.push(format!(
            "{} is not made in {}; largest practical size is {}mm²",
            construction.name, spec.size, construction.max_practical_size_mm2
        ));
    }

    debug!(
        size = spec.size,
        cable_type_fits,
        suitability = %suitability,
        derated_a,
        voltage_drop_percent = drop.percent,
        device_rating_a,
        "classified candidate"
    );

    CableRecommendation {
        size: spec.size.to_owned(),
        size_mm2: spec.size_mm2,
        cable_type: context.cable_type,
        derated_capacity_a: round_to(derated_a, 1),
        iz_a: derated_a,
        voltage_drop_percent: drop.percent,
        device_rating_a,
        suitability,
        checks,
        cable_type_fits,
        notes,
        cost: spec.cost,
        availability: spec.availability,
        installation_complexity: spec.installation_complexity,
        special_considerations: special_considerations(context, is_ring),
    }
}

/// Topology and application caveats attached to every candidate of a circuit.
pub fn special_considerations(context: &InstallationContext, is_ring: bool) -> Vec<String> {
    let mut considerations = Vec::new();
    if is_ring {
        considerations.push(
            "Ring final circuit: verify end-to-end continuity of line, neutral and protective conductors"
                .to_owned(),
        );
        considerations
            .push("Unfused spurs limited to one single or twin socket-outlet each".to_owned());
    }
    let construction = profile(context.cable_type);
    if context
        .special_requirements
        .iter()
        .any(SpecialRequirement::is_safety_critical)
        && !construction.fire_performance.maintains_circuit_integrity()
    {
        considerations.push(
            "Safety-critical circuit: use fire-resistant cable (BS 5839 / BS 5266) with fire-rated supports"
                .to_owned(),
        );
    }
    let method = context.installation_method;
    if method == InstallationMethod::BuriedDirect && !construction.direct_burial {
        considerations.push(format!(
            "{} is not rated for direct burial; use armoured cable (SWA) laid with marker tape",
            construction.name
        ));
    } else if !construction.supports_method(method) {
        considerations.push(format!(
            "{} is not rated for reference method {} ({})",
            construction.name,
            method.reference_method(),
            method
        ));
    }
    if method == InstallationMethod::Overhead {
        considerations.push("Overhead span requires catenary support".to_owned());
    }
    if context.has_requirement(SpecialRequirement::Outdoor) && !construction.uv_resistant {
        considerations.push(format!(
            "Outdoor run: {} needs a UV-stabilised sheath or protective containment",
            construction.name
        ));
    }
    if context.has_requirement(SpecialRequirement::HighTemperature)
        && construction.conductor_temperature_c < 90
    {
        considerations.push("High-temperature location: consider 90 °C thermosetting insulation".to_owned());
    }
    if context.conductor == ConductorMaterial::Aluminium {
        considerations.push(
            "Aluminium conductors need compatible terminations and anti-oxidant compound".to_owned(),
        );
    }
    considerations
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
