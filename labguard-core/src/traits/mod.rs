//! Seams the engine depends on: repository access.

mod memory;
mod repository;

pub use memory::MemoryRepository;
pub use repository::QcRepository;
