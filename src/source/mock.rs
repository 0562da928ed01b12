use anyhow::Result;
use async_trait::async_trait;

use super::{KundaliSource, Report};
use crate::form::BirthDetails;
use crate::kundali::generate_mock;

/// Offline source returning the fixed demonstration chart.
pub struct MockSource;

#[async_trait]
impl KundaliSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, details: &BirthDetails) -> Result<Report> {
        Ok(Report::Chart(generate_mock(details)))
    }
}
