//! ---
//! csel_section: "01-core-functionality"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "Shared configuration and logging primitives."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
//! Shared primitives for the CableSel workspace: TOML configuration with
//! named site-condition presets, and tracing initialisation.

pub mod config;
pub mod logging;

pub use config::{AppConfig, LoadedAppConfig, LoggingConfig, ReportsConfig};
pub use logging::{init_tracing, LogFormat};
