//! Server config loader (strict parsing).

pub mod schema;

use std::fs;

use svchealth_core::error::{Result, SvcHealthError};

pub use schema::{SanitizerSection, ServerConfig, ServerSection, ServiceEntry};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SvcHealthError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| SvcHealthError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
