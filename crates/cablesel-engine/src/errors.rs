//! ---
//! csel_section: "02-selection-engine"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Error taxonomy for the cable selection engine."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SelectionError>;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("cable table for the requested topology is empty")]
    EmptyCableTable,
    #[error("cable size {0} not found in the selected table")]
    UnknownCableSize(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    SerializationFailed(#[from] serde_json::Error),
    #[error("yaml serialization error: {0}")]
    YamlSerializationFailed(#[from] serde_yaml::Error),
}

impl SelectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SelectionError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
