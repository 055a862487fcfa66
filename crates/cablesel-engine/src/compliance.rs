//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Regulatory compliance verdicts for a chosen cable."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::warn;

use crate::{
    calculations::{
        design_current, max_voltage_drop_percent, max_zs, OVERLOAD_RATIO, RING_MAX_LENGTH_M,
        RING_MAX_LOAD_W,
    },
    classifier::CableRecommendation,
    model::InstallationContext,
};

pub const REGULATION: &str = "BS 7671:2018+A2:2022";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ComplianceStatus {
    Pass,
    Fail,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceCheck {
    pub regulation: String,
    pub requirement: String,
    pub status: ComplianceStatus,
    pub reference: String,
    pub details: String,
}

impl ComplianceCheck {
    fn new(
        requirement: &str,
        status: ComplianceStatus,
        reference: &str,
        details: String,
    ) -> Self {
        Self {
            regulation: REGULATION.to_owned(),
            requirement: requirement.to_owned(),
            status,
            reference: reference.to_owned(),
            details,
        }
    }

    pub fn passed(&self) -> bool {
        self.status == ComplianceStatus::Pass
    }
}

fn pass_or_fail(ok: bool) -> ComplianceStatus {
    if ok {
        ComplianceStatus::Pass
    } else {
        ComplianceStatus::Fail
    }
}

/// Evaluate the chosen cable. Order is fixed: loop impedance, voltage drop,
/// current coordination, protection coordination, then the two ring limits.
pub fn compliance_checks(
    context: &InstallationContext,
    zs_ohm: f64,
    chosen: &CableRecommendation,
    is_ring: bool,
) -> Vec<ComplianceCheck> {
    let mut checks = Vec::with_capacity(if is_ring { 6 } else { 4 });

    let zs_limit = max_zs(context.protective_device, context.voltage);
    checks.push(ComplianceCheck::new(
        "Earth fault loop impedance",
        pass_or_fail(zs_ohm <= zs_limit),
        "Regulation 411.4.4, Table 41.3",
        format!(
            "Zs {:.2} Ω against maximum {:.2} Ω for {} device at {:.0} V",
            zs_ohm, zs_limit, context.protective_device, context.voltage
        ),
    ));

    let drop_limit = max_voltage_drop_percent(context);
    checks.push(ComplianceCheck::new(
        "Voltage drop",
        pass_or_fail(chosen.voltage_drop_percent <= drop_limit),
        "Regulation 525, Appendix 4 Table 4Ab",
        format!(
            "{:.2}% against {:.1}% limit for {} circuits",
            chosen.voltage_drop_percent, drop_limit, context.load_type
        ),
    ));

    let ib = design_current(context);
    let rated = f64::from(chosen.device_rating_a);
    let iz = chosen.iz_a;
    checks.push(ComplianceCheck::new(
        "Current-carrying capacity coordination",
        pass_or_fail(ib <= rated && rated <= iz),
        "Regulation 433.1.1 (Ib ≤ In ≤ Iz)",
        format!(
            "Ib {:.2} A, In {} A, Iz {:.2} A",
            ib, chosen.device_rating_a, iz
        ),
    ));

    let overload_limit = OVERLOAD_RATIO * iz;
    checks.push(ComplianceCheck::new(
        "Overload protection coordination",
        if rated > overload_limit {
            ComplianceStatus::Warning
        } else {
            ComplianceStatus::Pass
        },
        "Regulation 433.1.1 (I2 ≤ 1.45 Iz)",
        format!(
            "In {} A against {OVERLOAD_RATIO} × Iz {:.1} A = {:.1} A",
            chosen.device_rating_a, iz, overload_limit
        ),
    ));

    if is_ring {
        checks.push(ComplianceCheck::new(
            "Ring final circuit length",
            pass_or_fail(context.run_length_m <= RING_MAX_LENGTH_M),
            "Appendix 15, ring final circuits",
            format!(
                "{:.2} m against {RING_MAX_LENGTH_M} m maximum",
                context.run_length_m
            ),
        ));
        checks.push(ComplianceCheck::new(
            "Ring final circuit load",
            pass_or_fail(context.total_load_w <= RING_MAX_LOAD_W),
            "Appendix 15, ring final circuits",
            format!(
                "{:.0} W against {RING_MAX_LOAD_W} W maximum",
                context.total_load_w
            ),
        ));
    }

    for failed in checks
        .iter()
        .filter(|check| check.status == ComplianceStatus::Fail)
    {
        warn!(
            size = %chosen.size,
            requirement = %failed.requirement,
            details = %failed.details,
            "compliance check failed"
        );
    }

    checks
}
