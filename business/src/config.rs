use serde::Deserialize;
use std::env::vars;
use ustr::Ustr;

/// Backend used when `API_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

#[derive(Deserialize)]
struct RawBusinessConfig {
    api_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Reads `API_URL` from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let raw: RawBusinessConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawBusinessConfig) -> Self {
        match raw.api_url {
            Some(url) if !url.trim().is_empty() => {
                Self::new(url.trim().trim_end_matches('/'))
            }
            _ => Self::default(),
        }
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }

    /// Endpoint serving the Master Production Schedule.
    pub fn mps_url(&self) -> String {
        format!("{}/mps", self.api_url())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
