//! Runtime configuration read from the process environment.
//!
//! A local `.env` file is merged into the environment first (see
//! [`load_env_file`]); values already set in the environment win.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::consts::{BASE_API_URL, FLOW_ID, LANGFLOW_ID};

pub const API_KEY_VAR: &str = "API_KEY";
pub const APP_TOKEN_VAR: &str = "APP_TOKEN";
pub const BASE_URL_VAR: &str = "KUNDALI_BASE_URL";
pub const LANGFLOW_ID_VAR: &str = "KUNDALI_LANGFLOW_ID";
pub const FLOW_ID_VAR: &str = "KUNDALI_FLOW_ID";
pub const ENDPOINT_VAR: &str = "KUNDALI_ENDPOINT";
pub const TIMEOUT_VAR: &str = "KUNDALI_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("APP_TOKEN is not set; add it to .env or the environment")]
    MissingAppToken,
    #[error("KUNDALI_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    BadTimeout(String),
}

/// Where the hosted flow lives and how to authenticate to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Loaded for parity with the `.env` layout; the flow itself only
    /// authenticates with the application token.
    pub api_key: Option<String>,
    pub app_token: Option<String>,
    pub base_url: String,
    pub langflow_id: String,
    pub flow_id: String,
    /// Named endpoint from the flow settings. Takes precedence over `flow_id`.
    pub endpoint: Option<String>,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            app_token: None,
            base_url: BASE_API_URL.to_string(),
            langflow_id: LANGFLOW_ID.to_string(),
            flow_id: FLOW_ID.to_string(),
            endpoint: None,
            timeout: None,
        }
    }
}

impl Config {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout = match get(TIMEOUT_VAR) {
            Some(raw) => Some(Duration::from_secs(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::BadTimeout(raw.clone()))?,
            )),
            None => None,
        };

        Ok(Self {
            api_key: get(API_KEY_VAR),
            app_token: get(APP_TOKEN_VAR),
            base_url: get(BASE_URL_VAR)
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            langflow_id: get(LANGFLOW_ID_VAR).unwrap_or(defaults.langflow_id),
            flow_id: get(FLOW_ID_VAR).unwrap_or(defaults.flow_id),
            endpoint: get(ENDPOINT_VAR),
            timeout,
        })
    }

    /// The bearer token, required only when the hosted flow is called.
    pub fn require_app_token(&self) -> Result<&str, ConfigError> {
        self.app_token
            .as_deref()
            .ok_or(ConfigError::MissingAppToken)
    }

    /// Full URL of the flow run endpoint.
    pub fn run_url(&self) -> String {
        let target = self.endpoint.as_deref().unwrap_or(&self.flow_id);
        format!(
            "{}/lf/{}/api/v1/run/{}",
            self.base_url, self.langflow_id, target
        )
    }

    /// Short human-readable credential status for the banner.
    pub fn auth_status(&self) -> &'static str {
        match (&self.app_token, &self.api_key) {
            (Some(_), _) => "app token ✓",
            (None, Some(_)) => "api key only",
            (None, None) => "not configured",
        }
    }
}

/// Merge a `.env` file into the process environment.
///
/// With an explicit path the file must exist. Without one, `.env` is
/// searched for from the current directory upward and silently skipped
/// when absent.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            dotenvy::from_path(p)
                .with_context(|| format!("failed to load env file {}", p.display()))?;
            debug!(path = %p.display(), "loaded env file");
        }
        None => match dotenvy::dotenv() {
            Ok(found) => debug!(path = %found.display(), "loaded env file"),
            Err(e) if e.not_found() => debug!("no .env file found"),
            Err(e) => return Err(e).context("failed to load .env"),
        },
    }
    Ok(())
}
