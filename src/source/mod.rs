pub mod hosted;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use clap::ValueEnum;
use serde_json::Value;

use crate::flow::to_pretty_json;
use crate::form::BirthDetails;
use crate::kundali::{Kundali, format_output};

/// How a report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What a source hands back to the form handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Locally generated demonstration chart.
    Chart(Kundali),
    /// Raw reply from the hosted flow, unchanged.
    Remote(Value),
}

impl Report {
    /// Render for display. Remote replies are always shown as JSON.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let text = match (self, format) {
            (Report::Chart(k), OutputFormat::Text) => format_output(k),
            (Report::Chart(k), OutputFormat::Json) => to_pretty_json(k)?,
            (Report::Remote(v), _) => to_pretty_json(v)?,
        };
        Ok(text)
    }
}

/// Turns a validated submission into a report. Could be the built-in mock
/// or the hosted flow.
#[async_trait]
pub trait KundaliSource: Send + Sync {
    /// Label shown to the user, e.g. `"mock"`.
    fn name(&self) -> &str;

    async fn generate(&self, details: &BirthDetails) -> Result<Report>;
}
