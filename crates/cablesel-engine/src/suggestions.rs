//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Remediation and optimisation hints derived from ranked candidates."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
    calculations::{design_current, RING_MAX_LENGTH_M},
    catalogue::{cables_fitting, profile},
    classifier::{CableRecommendation, Suitability},
    model::{InstallationContext, InstallationMethod, LoadType},
    tables::CostTier,
};

const LONG_CONDUIT_RUN_M: f64 = 50.0;
const REFERENCE_AMBIENT_C: f64 = 30.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SuggestionCategory {
    CableUpgrade,
    ProtectiveDevice,
    Environmental,
    InstallationMethod,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstallationSuggestion {
    pub category: SuggestionCategory,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    #[serde(default)]
    pub cost: Option<CostTier>,
    #[serde(default)]
    pub regulation: Option<String>,
}

/// Independent heuristics; the returned order is the priority order.
pub fn suggestions(
    context: &InstallationContext,
    ranked: &[CableRecommendation],
    is_ring: bool,
) -> Vec<InstallationSuggestion> {
    let mut out = Vec::new();

    if !is_ring && context.load_type == LoadType::Power && context.run_length_m <= RING_MAX_LENGTH_M
    {
        out.push(InstallationSuggestion {
            category: SuggestionCategory::InstallationMethod,
            title: "Consider a ring final circuit".to_owned(),
            description: format!(
                "A {:.1} m power circuit is within the {RING_MAX_LENGTH_M} m ring limit; a ring on 2.5mm² halves the current in each leg and cuts voltage drop",
                context.run_length_m
            ),
            impact: Impact::Medium,
            cost: Some(CostTier::Low),
            regulation: Some("Appendix 15".to_owned()),
        });
    }

    if let Some(top) = ranked.first() {
        if top.suitability != Suitability::Suitable {
            if let Some(upgrade) = ranked
                .iter()
                .skip(1)
                .find(|candidate| candidate.suitability == Suitability::Suitable)
            {
                out.push(InstallationSuggestion {
                    category: SuggestionCategory::CableUpgrade,
                    title: format!("Upgrade to {}", upgrade.size),
                    description: format!(
                        "{} is {}; {} passes every check with {:.1} A capacity and {:.2}% voltage drop",
                        top.size,
                        top.suitability,
                        upgrade.size,
                        upgrade.derated_capacity_a,
                        upgrade.voltage_drop_percent
                    ),
                    impact: Impact::High,
                    cost: Some(upgrade.cost),
                    regulation: Some("Regulation 433.1.1".to_owned()),
                });
            }
        }

        // Engine rankings never size a device below Ib; this only fires on
        // candidate lists assembled by callers.
        let ib = design_current(context);
        if f64::from(top.device_rating_a) < ib {
            out.push(InstallationSuggestion {
                category: SuggestionCategory::ProtectiveDevice,
                title: "Protective device rated below design current".to_owned(),
                description: format!(
                    "{} A device on {} is below the {:.2} A design current and will trip under normal load",
                    top.device_rating_a, top.size, ib
                ),
                impact: Impact::High,
                cost: None,
                regulation: Some("Regulation 433.1.1".to_owned()),
            });
        }

        if !top.cable_type_fits {
            let method = context.installation_method;
            let construction = profile(top.cable_type);
            let alternatives: Vec<&str> = cables_fitting(top.size_mm2, method)
                .into_iter()
                .map(|cable_type| profile(cable_type).name)
                .collect();
            let offered = if alternatives.is_empty() {
                "no catalogued construction is".to_owned()
            } else {
                format!("{} offered", alternatives.join(", "))
            };
            out.push(InstallationSuggestion {
                category: SuggestionCategory::CableUpgrade,
                title: format!("Change cable type for {}", top.size),
                description: format!(
                    "{} is not offered in {} for reference method {}; {}",
                    construction.name,
                    top.size,
                    method.reference_method(),
                    offered
                ),
                impact: Impact::High,
                cost: None,
                regulation: Some("Regulation 522".to_owned()),
            });
        }
    }

    let ambient = context.ambient_temperature();
    if ambient > REFERENCE_AMBIENT_C {
        out.push(InstallationSuggestion {
            category: SuggestionCategory::Environmental,
            title: "Reduce ambient temperature exposure".to_owned(),
            description: format!(
                "Ambient {ambient:.0} °C is above the {REFERENCE_AMBIENT_C} °C reference; reroute away from heat sources or improve ventilation to recover capacity"
            ),
            impact: Impact::Medium,
            cost: None,
            regulation: Some("Appendix 4 Table 4B1".to_owned()),
        });
    }

    if context.installation_method == InstallationMethod::Conduit
        && context.run_length_m > LONG_CONDUIT_RUN_M
    {
        out.push(InstallationSuggestion {
            category: SuggestionCategory::InstallationMethod,
            title: "Consider alternative containment".to_owned(),
            description: format!(
                "A {:.1} m conduit run limits heat dissipation; cable tray or clipped-direct installation gives higher ratings",
                context.run_length_m
            ),
            impact: Impact::Medium,
            cost: Some(CostTier::Medium),
            regulation: Some("Appendix 4 Table 4A2".to_owned()),
        });
    }

    out
}
