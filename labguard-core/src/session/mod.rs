//! Re-evaluation protocol: sessions and the repository-backed engine.

mod analyte_session;
mod engine;

pub use analyte_session::AnalyteSession;
pub use engine::QcEngine;
