//! Reported service states.
//!
//! The string table is part of the liveness contract: `Up` and `Down` are
//! capitalized, `undefined` is not.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Observed state of one registered dependency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceState {
    /// Registered but never marked up or down.
    #[default]
    #[serde(rename = "undefined")]
    Undefined,
    #[serde(rename = "Up")]
    Up,
    #[serde(rename = "Down")]
    Down,
}

impl ServiceState {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceState::Undefined => "undefined",
            ServiceState::Up => "Up",
            ServiceState::Down => "Down",
        }
    }

    /// Value exported on the service's gauge.
    pub fn gauge_value(self) -> i64 {
        match self {
            ServiceState::Up => 1,
            ServiceState::Undefined | ServiceState::Down => 0,
        }
    }

    pub fn is_up(self) -> bool {
        self == ServiceState::Up
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the liveness report, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub name: String,
    pub namespace: String,
    pub state: ServiceState,
}

impl ServiceStatus {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, state: ServiceState) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            state,
        }
    }
}

/// Aggregate health: every service is `Up`. An empty slice is healthy.
pub fn all_up(statuses: &[ServiceStatus]) -> bool {
    statuses.iter().all(|s| s.state.is_up())
}
