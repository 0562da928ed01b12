//! Client for the hosted Langflow run endpoint.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{Config, ConfigError};
use crate::consts::FLOW_IO_TYPE;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API request failed: {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Serialize)]
struct RunRequest<'a> {
    input_value: &'a str,
    output_type: &'a str,
    input_type: &'a str,
}

/// Sends one chat message to the flow and returns its JSON reply.
pub struct FlowClient {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl FlowClient {
    /// Fails when no application token is configured.
    pub fn new(config: &Config) -> Result<Self, FlowError> {
        let token = config.require_app_token()?.to_string();
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            url: config.run_url(),
            token,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST `message` to the flow. No retries.
    pub async fn run_flow(&self, message: &str) -> Result<Value, FlowError> {
        let body = RunRequest {
            input_value: message,
            output_type: FLOW_IO_TYPE,
            input_type: FLOW_IO_TYPE,
        };

        debug!(url = %self.url, "running flow");
        let resp = self
            .http
            .post(&self.url)
            .header("authorization", format!("Bearer {}", self.token))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(%status, "flow returned an error status");
            return Err(FlowError::Status { status, body });
        }

        Ok(resp.json().await?)
    }
}

/// Configured request timeout, for display.
pub fn describe_timeout(timeout: Option<Duration>) -> String {
    match timeout {
        Some(t) => format!("{}s", t.as_secs()),
        None => "none".to_string(),
    }
}

/// Pretty-print with four-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
