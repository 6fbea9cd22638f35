//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "resolve the post-login redirect".

pub mod redirect_service;

pub use redirect_service::RedirectService;
