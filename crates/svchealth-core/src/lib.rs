//! svchealth core: transport-free primitives for the service health registry.
//!
//! This crate defines the reported service states, the name sanitizer used to
//! turn caller-supplied names into metric identifiers, and the error surface
//! shared by the server crate. It carries no HTTP or metrics dependencies.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod sanitize;
pub mod state;

/// Shared result type.
pub use error::{Result, SvcHealthError};
pub use sanitize::{CharReplacer, IdentitySanitizer, NameSanitizer};
pub use state::{all_up, ServiceState, ServiceStatus};
