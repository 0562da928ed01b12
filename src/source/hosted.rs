use anyhow::{Result, bail};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use super::{KundaliSource, Report};
use crate::flow::FlowClient;
use crate::form::BirthDetails;

/// Source backed by the hosted Langflow flow.
pub struct HostedSource {
    client: FlowClient,
}

impl HostedSource {
    pub fn new(client: FlowClient) -> Self {
        Self { client }
    }
}

/// Replies with no content (`null`, `{}`, `[]`, `""`, `false`, `0`) count
/// as a failed run.
fn is_empty_reply(reply: &Value) -> bool {
    match reply {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[async_trait]
impl KundaliSource for HostedSource {
    fn name(&self) -> &str {
        "api"
    }

    async fn generate(&self, details: &BirthDetails) -> Result<Report> {
        let message = details.message();
        info!(url = self.client.url(), "sending birth details to flow");
        let reply = self.client.run_flow(&message).await?;
        if is_empty_reply(&reply) {
            warn!(%reply, "flow returned an empty reply");
            bail!("API returned an empty reply: {}", reply);
        }
        Ok(Report::Remote(reply))
    }
}
