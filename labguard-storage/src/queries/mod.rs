//! Per-table query modules.

pub mod controls;
pub mod measurements;
