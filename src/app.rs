//! The form handler: validate a submission, pick a source, print the result.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::flow::FlowClient;
use crate::form::{BirthDetails, FormError, FormInput};
use crate::source::hosted::HostedSource;
use crate::source::mock::MockSource;
use crate::source::{KundaliSource, OutputFormat};
use crate::spinner::with_spinner;

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    InvalidForm,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Generated => ExitCode::SUCCESS,
            Outcome::InvalidForm => ExitCode::from(2),
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// One form submission.
pub struct Submission {
    pub form: FormInput,
    /// Use the hosted flow instead of the mock chart.
    pub api: bool,
    pub format: OutputFormat,
}

fn check_form(form: FormInput) -> Result<BirthDetails, FormError> {
    let details = form.into_details()?;
    details.validate()?;
    Ok(details)
}

fn build_source(api: bool, config: &Config) -> Result<Box<dyn KundaliSource>> {
    if api {
        Ok(Box::new(HostedSource::new(FlowClient::new(config)?)))
    } else {
        Ok(Box::new(MockSource))
    }
}

/// Handle `submission`, writing results to `out` and problems to `err`.
pub async fn submit<O: Write, E: Write>(
    submission: Submission,
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> Result<Outcome> {
    let details = match check_form(submission.form) {
        Ok(d) => d,
        Err(e @ FormError::Missing(_)) => {
            writeln!(err, "Please fill out all fields. ({})", e)?;
            return Ok(Outcome::InvalidForm);
        }
        Err(e) => {
            writeln!(err, "{}", e)?;
            return Ok(Outcome::InvalidForm);
        }
    };
    debug!(?details, "form accepted");

    writeln!(out, "Processing your request...")?;
    out.flush()?;

    let generated = match build_source(submission.api, config) {
        Ok(source) => {
            debug!(source = source.name(), "generating kundali");
            if submission.api {
                with_spinner("contacting flow", source.generate(&details)).await
            } else {
                source.generate(&details).await
            }
        }
        Err(e) => Err(e),
    };

    let report = match generated {
        Ok(report) => report,
        Err(e) => {
            writeln!(err, "error: {:#}", e)?;
            if submission.api {
                writeln!(err, "Failed to generate Kundali via API. Please try again.")?;
            } else {
                writeln!(err, "Please try again.")?;
            }
            return Ok(Outcome::Failed);
        }
    };

    if submission.api {
        writeln!(out, "Kundali Generated Successfully via API!\n")?;
    } else {
        writeln!(out, "Kundali Generated Successfully!\n")?;
    }
    writeln!(out, "{}", report.render(submission.format)?)?;
    Ok(Outcome::Generated)
}
