//! Birth details collected from the user, and their validation.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveTime};
use clap::ValueEnum;
use thiserror::Error;

use crate::consts::MIN_BIRTH_DATE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("missing required field: {0}")]
    Missing(&'static str),
    #[error("date of birth {dob} is outside {min}..={max}")]
    DateOutOfRange {
        dob: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    BadDate(String),
    #[error("invalid time {0:?}, expected HH:MM or HH:MM:SS")]
    BadTime(String),
    #[error("invalid gender {0:?}, expected male, female or other")]
    BadGender(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(s)
    }
}

impl FromStr for Gender {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "o" => Ok(Gender::Other),
            _ => Err(FormError::BadGender(s.to_string())),
        }
    }
}

/// One submission of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDetails {
    pub name: String,
    pub dob: NaiveDate,
    pub tob: NaiveTime,
    pub place: String,
    pub gender: Gender,
}

impl BirthDetails {
    /// Check required fields against today's local date.
    pub fn validate(&self) -> Result<(), FormError> {
        self.validate_on(Local::now().date_naive())
    }

    /// Same as [`validate`](Self::validate) with an explicit "today".
    pub fn validate_on(&self, today: NaiveDate) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("name"));
        }
        if self.place.trim().is_empty() {
            return Err(FormError::Missing("place of birth"));
        }
        let min = min_birth_date();
        if self.dob < min || self.dob > today {
            return Err(FormError::DateOutOfRange {
                dob: self.dob,
                min,
                max: today,
            });
        }
        Ok(())
    }

    /// The free-text prompt sent to the hosted flow.
    pub fn message(&self) -> String {
        format!(
            "Generate Kundali for {}, born on {} at {} in {}. Gender: {}.",
            self.name,
            self.dob.format("%Y-%m-%d"),
            self.tob.format("%H:%M:%S"),
            self.place,
            self.gender
        )
    }
}

pub fn min_birth_date() -> NaiveDate {
    let (y, m, d) = MIN_BIRTH_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| FormError::BadDate(s.to_string()))
}

/// Parse `HH:MM` or `HH:MM:SS` (24-hour clock).
pub fn parse_time(s: &str) -> Result<NaiveTime, FormError> {
    let t = s.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .map_err(|_| FormError::BadTime(s.to_string()))
}

/// Raw field values as typed by the user, before parsing.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub tob: Option<String>,
    pub place: Option<String>,
    pub gender: Option<Gender>,
}

impl FormInput {
    /// Parse every field. Blank or absent fields are reported as missing.
    /// Name and place are kept exactly as typed.
    pub fn into_details(self) -> Result<BirthDetails, FormError> {
        let dob = parse_date(&required(self.dob, "date of birth")?)?;
        let tob = parse_time(&required(self.tob, "time of birth")?)?;
        let details = BirthDetails {
            name: required(self.name, "name")?,
            dob,
            tob,
            place: required(self.place, "place of birth")?,
            gender: self.gender.ok_or(FormError::Missing("gender"))?,
        };
        Ok(details)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, FormError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FormError::Missing(field)),
    }
}
