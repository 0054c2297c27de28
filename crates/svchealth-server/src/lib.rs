//! svchealth server library entry.
//!
//! Wires the service registry, its prometheus gauges, and the liveness and
//! scrape endpoints into an axum router. Consumed by the binary (`main.rs`),
//! by hosts embedding the endpoints, and by integration tests.

pub mod app_state;
pub mod config;
pub mod facade;
pub mod ops;
pub mod registry;
pub mod router;

pub use registry::{HealthRegistry, Registry};
