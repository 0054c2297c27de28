use std::net::SocketAddr;
use std::sync::Arc;

use serde::Deserialize;
use svchealth_core::error::{Result, SvcHealthError};
use svchealth_core::sanitize::{CharReplacer, NameSanitizer};

use crate::facade::{DEFAULT_HEALTH_PATH, DEFAULT_METRICS_PATH};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub sanitizer: SanitizerSection,

    /// Services registered at startup (state `undefined` until reported).
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SvcHealthError::UnsupportedVersion);
        }

        self.server.validate()?;

        for (i, svc) in self.services.iter().enumerate() {
            if svc.name.trim().is_empty() {
                return Err(SvcHealthError::BadRequest(format!(
                    "services[{i}].name must not be empty"
                )));
            }
            if svc.namespace.trim().is_empty() {
                return Err(SvcHealthError::BadRequest(format!(
                    "services[{i}].namespace must not be empty"
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_health_path")]
    pub health_path: String,

    #[serde(default = "default_metrics_path")]
    pub metrics_path: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            health_path: default_health_path(),
            metrics_path: default_metrics_path(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        let paths = [
            ("health_path", &self.health_path),
            ("metrics_path", &self.metrics_path),
        ];
        for (key, path) in paths {
            if !path.starts_with('/') {
                return Err(SvcHealthError::BadRequest(format!(
                    "server.{key} must start with '/'"
                )));
            }
        }
        if self.health_path == self.metrics_path {
            return Err(SvcHealthError::BadRequest(
                "server.health_path and server.metrics_path must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            SvcHealthError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_health_path() -> String {
    DEFAULT_HEALTH_PATH.into()
}
fn default_metrics_path() -> String {
    DEFAULT_METRICS_PATH.into()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SanitizerSection {
    /// Characters replaced with `_` in service names and namespaces.
    #[serde(default)]
    pub replace: String,
}

impl SanitizerSection {
    /// `None` selects the identity transform.
    pub fn build(&self) -> Option<Arc<dyn NameSanitizer>> {
        if self.replace.is_empty() {
            return None;
        }
        Some(Arc::new(CharReplacer::new(self.replace.chars())))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntry {
    pub name: String,
    pub namespace: String,
}
