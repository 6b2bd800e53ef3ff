//! Link configuration.
//!
//! Lambda exposes the function's region through `AWS_REGION`. The adapters
//! take a [`LinkConfig`] instead of reading it themselves, so handlers load
//! it once at cold start and tests can build one directly.

#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Region variable set by the Lambda runtime
pub const REGION_ENV: &str = "AWS_REGION";

/// Region variable used by the SDKs and CLI
pub const DEFAULT_REGION_ENV: &str = "AWS_DEFAULT_REGION";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Region used for the console host and the `region` query parameter
    pub region: String,
}

impl LinkConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }

    /// Load from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in [REGION_ENV, DEFAULT_REGION_ENV] {
            if let Some(region) = lookup(key).filter(|value| !value.trim().is_empty()) {
                trace_debug!("Using region {} from {}", region, key);
                return Ok(Self::new(region.trim()));
            }
        }
        Err(anyhow!(
            "No region configured: set {} or {}",
            REGION_ENV,
            DEFAULT_REGION_ENV
        ))
    }
}
