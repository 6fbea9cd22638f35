//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `yourfavs-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RedirectAudit`: Reporting of rejected redirect candidates
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `RedirectService` (auth handlers and the CLI call it directly)

pub mod output;

pub use output::{RedirectAudit, RedirectEvent};

#[cfg(test)]
pub use output::MockRedirectAudit;
