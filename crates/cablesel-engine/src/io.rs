//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Loading circuit descriptors from JSON or YAML files."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    errors::{Result, SelectionError},
    model::{CircuitSpec, EnvironmentalSettings, InstallationContext},
};

/// Circuits of one batch file, with optional site conditions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchInput {
    #[serde(default)]
    pub environment: Option<EnvironmentalSettings>,
    pub circuits: Vec<CircuitSpec>,
}

// A batch file is either a bare list of circuits or a document with an
// `environment` section.
#[derive(Deserialize)]
#[serde(untagged)]
enum BatchDocument {
    List(Vec<CircuitSpec>),
    Document(BatchInput),
}

pub fn load_context_from_file(path: impl AsRef<Path>) -> Result<InstallationContext> {
    parse_document(&fs::read_to_string(path)?)
}

pub fn load_circuits_from_file(path: impl AsRef<Path>) -> Result<BatchInput> {
    let batch = match parse_document(&fs::read_to_string(path)?)? {
        BatchDocument::List(circuits) => BatchInput {
            environment: None,
            circuits,
        },
        BatchDocument::Document(batch) => batch,
    };
    Ok(batch)
}

fn parse_document<T: DeserializeOwned>(data: &str) -> Result<T> {
    let trimmed = data.trim_start();
    let value = if trimmed.starts_with('{') || trimmed.starts_with('[') {
        serde_json::from_str(data)?
    } else {
        serde_yaml::from_str(data).map_err(SelectionError::YamlSerializationFailed)?
    };
    Ok(value)
}
