//! Redirect audit adapters.

mod log;
mod memory;

pub use log::TracingAudit;
pub use memory::MemoryAudit;
