//! Service health registry.
//!
//! Ordered records keyed by `(name, namespace)`. Every record owns one
//! `IntGauge` registered in the registry's own prometheus registry; the gauge
//! mirrors the record state (1 = Up, 0 otherwise).
//!
//! Names are stored as given. Sanitizing happens at the facade boundary.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use prometheus::proto::MetricFamily;
use prometheus::{IntGauge, Opts};

use svchealth_core::error::{Result, SvcHealthError};
use svchealth_core::state::{all_up, ServiceState, ServiceStatus};

/// Capability surface of a health registry.
pub trait HealthRegistry: Send + Sync {
    /// Register `(name, namespace)` if absent. Returns `true` when newly added.
    fn ensure_service(&self, name: &str, namespace: &str) -> Result<bool>;
    /// Mark a known service up. Unknown identities are ignored.
    fn service_up(&self, name: &str, namespace: &str);
    /// Mark a known service down. Unknown identities are ignored.
    fn service_down(&self, name: &str, namespace: &str);
    /// Reported state of every record, in insertion order.
    fn snapshot(&self) -> Vec<ServiceStatus>;
    /// Unregister every gauge and drop every record.
    fn clear_items(&self);
}

struct ServiceRecord {
    name: String,
    namespace: String,
    state: ServiceState,
    gauge: IntGauge,
}

impl ServiceRecord {
    fn matches(&self, name: &str, namespace: &str) -> bool {
        self.name == name && self.namespace == namespace
    }

    fn status(&self) -> ServiceStatus {
        ServiceStatus::new(self.name.clone(), self.namespace.clone(), self.state)
    }
}

/// In-process registry of dependency health.
pub struct Registry {
    items: RwLock<Vec<ServiceRecord>>,
    metrics: prometheus::Registry,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry with a fresh metrics registry.
    pub fn new() -> Self {
        Self::with_metrics_registry(prometheus::Registry::new())
    }

    /// Empty registry exporting its gauges through `metrics`.
    pub fn with_metrics_registry(metrics: prometheus::Registry) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            metrics,
        }
    }

    pub fn metrics_registry(&self) -> &prometheus::Registry {
        &self.metrics
    }

    /// Collect the metric families for a scrape.
    pub fn gather(&self) -> Vec<MetricFamily> {
        // Hold the read lock so a concurrent clear cannot interleave.
        let _items = self.read();
        self.metrics.gather()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// True iff every record is Up. An empty registry is healthy.
    pub fn is_healthy(&self) -> bool {
        all_up(&self.snapshot())
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ServiceRecord>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ServiceRecord>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, name: &str, namespace: &str, state: ServiceState) {
        let mut items = self.write();
        let Some(record) = items.iter_mut().find(|r| r.matches(name, namespace)) else {
            tracing::debug!(%name, %namespace, %state, "state change for unknown service ignored");
            return;
        };

        if record.state != state {
            tracing::info!(
                %name,
                %namespace,
                from = %record.state,
                to = %state,
                "service state changed"
            );
        }
        record.state = state;
        record.gauge.set(state.gauge_value());
    }
}

impl HealthRegistry for Registry {
    fn ensure_service(&self, name: &str, namespace: &str) -> Result<bool> {
        let mut items = self.write();
        if items.iter().any(|r| r.matches(name, namespace)) {
            return Ok(false);
        }

        let opts = Opts::new(name, format!("{name} up status")).namespace(namespace);
        let gauge = IntGauge::with_opts(opts).map_err(|e| {
            SvcHealthError::Metric(format!("gauge for {namespace}/{name} rejected: {e}"))
        })?;
        self.metrics.register(Box::new(gauge.clone())).map_err(|e| {
            SvcHealthError::Metric(format!("gauge for {namespace}/{name} not registered: {e}"))
        })?;

        items.push(ServiceRecord {
            name: name.to_string(),
            namespace: namespace.to_string(),
            state: ServiceState::Undefined,
            gauge,
        });
        tracing::info!(%name, %namespace, "service registered");
        Ok(true)
    }

    fn service_up(&self, name: &str, namespace: &str) {
        self.set_state(name, namespace, ServiceState::Up);
    }

    fn service_down(&self, name: &str, namespace: &str) {
        self.set_state(name, namespace, ServiceState::Down);
    }

    fn snapshot(&self) -> Vec<ServiceStatus> {
        self.read().iter().map(ServiceRecord::status).collect()
    }

    fn clear_items(&self) {
        let mut items = self.write();
        for record in items.iter() {
            if let Err(e) = self.metrics.unregister(Box::new(record.gauge.clone())) {
                tracing::warn!(
                    name = %record.name,
                    namespace = %record.namespace,
                    error = %e,
                    "gauge unregister failed"
                );
            }
        }
        let cleared = items.len();
        items.clear();
        tracing::info!(cleared, "registry cleared");
    }
}
