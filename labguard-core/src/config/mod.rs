//! Application configuration and the default analyte panel.

mod labguard_config;
mod seed;

pub use labguard_config::{DatabaseConfig, LabguardConfig, ReportConfig};
pub use seed::seed_panel;
