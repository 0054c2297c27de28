//! Top-level facade crate for svchealth.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use svchealth_core::*;
}

pub mod server {
    pub use svchealth_server::*;
}

pub use svchealth_server::facade::{
    clear_items, ensure_service, health_check_handler, scrape_handler, service_down, service_up,
};
