//! Error handling for LabGuard.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod report_error;
pub mod session_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use report_error::ReportError;
pub use session_error::SessionError;
pub use storage_error::StorageError;
