//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "JSON report export for selection and batch results."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::{
    engine::{CircuitResult, SelectionReport},
    errors::Result,
};

#[derive(Debug)]
pub struct ReportExporter {
    generated_at: DateTime<Utc>,
}

impl Default for ReportExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportExporter {
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(generated_at: DateTime<Utc>) -> Self {
        Self { generated_at }
    }

    /// Writes `recommendations.json`, `suggestions.json` and `compliance.json`.
    pub fn export_selection(
        &self,
        report: &SelectionReport,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        ensure_dir(output_dir)?;
        let timestamp = self.generated_at.to_rfc3339();

        let written = vec![
            write_json(
                output_dir.join("recommendations.json"),
                &ReportEnvelope::new(&timestamp, recommendations_schema(), &report.recommendations),
            )?,
            write_json(
                output_dir.join("suggestions.json"),
                &ReportEnvelope::new(&timestamp, suggestions_schema(), &report.suggestions),
            )?,
            write_json(
                output_dir.join("compliance.json"),
                &ReportEnvelope::new(&timestamp, compliance_schema(), &report.compliance),
            )?,
        ];

        info!("Selection reports exported to {}", output_dir.display());
        Ok(written)
    }

    /// Writes every circuit result of a batch into `batch.json`.
    pub fn export_batch(&self, results: &[CircuitResult], output_dir: &Path) -> Result<PathBuf> {
        ensure_dir(output_dir)?;
        let timestamp = self.generated_at.to_rfc3339();
        let path = write_json(
            output_dir.join("batch.json"),
            &ReportEnvelope::new(&timestamp, batch_schema(), &results),
        )?;
        info!(
            circuits = results.len(),
            "Batch report exported to {}",
            path.display()
        );
        Ok(path)
    }
}

#[derive(Debug, Serialize)]
struct ReportEnvelope<'a, T: Serialize> {
    timestamp: &'a str,
    schema: serde_json::Value,
    data: &'a T,
}

impl<'a, T: Serialize> ReportEnvelope<'a, T> {
    fn new(timestamp: &'a str, schema: serde_json::Value, data: &'a T) -> Self {
        Self {
            timestamp,
            schema,
            data,
        }
    }
}

fn ensure_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
    }
    Ok(())
}

fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<PathBuf> {
    let serialized = serde_json::to_string_pretty(value)?;
    fs::write(&path, serialized)?;
    Ok(path)
}

fn recommendations_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "CableRecommendations",
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "size": {"type": "string"},
                "size_mm2": {"type": "number"},
                "derated_capacity_a": {"type": "number"},
                "iz_a": {"type": "number"},
                "voltage_drop_percent": {"type": "number"},
                "device_rating_a": {"type": "integer"},
                "suitability": {"enum": ["suitable", "marginal", "unsuitable"]},
                "cable_type_fits": {"type": "boolean"},
                "notes": {"type": "array", "items": {"type": "string"}},
                "cost": {"enum": ["low", "medium", "high"]},
                "availability": {"enum": ["common", "limited", "special-order"]},
                "installation_complexity": {"enum": ["simple", "moderate", "complex"]}
            },
            "required": [
                "size",
                "derated_capacity_a",
                "voltage_drop_percent",
                "device_rating_a",
                "suitability"
            ]
        }
    })
}

fn suggestions_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "InstallationSuggestions",
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "category": {
                    "enum": ["cable-upgrade", "protective-device", "environmental", "installation-method"]
                },
                "title": {"type": "string"},
                "description": {"type": "string"},
                "impact": {"enum": ["low", "medium", "high"]},
                "cost": {"enum": ["low", "medium", "high", null]},
                "regulation": {"type": ["string", "null"]}
            },
            "required": ["category", "title", "description", "impact"]
        }
    })
}

fn compliance_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "ComplianceChecks",
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "regulation": {"type": "string"},
                "requirement": {"type": "string"},
                "status": {"enum": ["pass", "fail", "warning"]},
                "reference": {"type": "string"},
                "details": {"type": "string"}
            },
            "required": ["regulation", "requirement", "status", "reference", "details"]
        }
    })
}

fn batch_schema() -> serde_json::Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "BatchSelection",
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "circuit_id": {"type": "string", "format": "uuid"},
                "name": {"type": "string"},
                "report": {
                    "type": "object",
                    "properties": {
                        "is_ring": {"type": "boolean"},
                        "design_current_a": {"type": "number"},
                        "derating_factor": {"type": "number"},
                        "zs_ohm": {"type": "number"},
                        "recommendations": {"type": "array"},
                        "suggestions": {"type": "array"},
                        "compliance": {"type": "array"}
                    },
                    "required": ["is_ring", "recommendations", "suggestions", "compliance"]
                }
            },
            "required": ["circuit_id", "name", "report"]
        }
    })
}
