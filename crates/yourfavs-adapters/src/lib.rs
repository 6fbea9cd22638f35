//! Infrastructure adapters for YourFavs.
//!
//! This crate implements the ports defined in `yourfavs-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod audit;

// Re-export commonly used adapters
pub use audit::{MemoryAudit, TracingAudit};
