//! Application layer for YourFavs redirect handling.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RedirectService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer but contains no
//! validation logic itself. All rules live in `crate::domain`.

pub mod ports;
pub mod services;

// Re-export main services
pub use services::RedirectService;

// Re-export port traits (for adapter implementation)
pub use ports::{RedirectAudit, RedirectEvent};
