//! The demonstration Kundali: fixed chart literals around the user's own
//! birth details, and its plain-text rendering.
//!
//! Nothing here is derived from an ephemeris. Only the five echoed fields
//! depend on the input.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::consts::{REPORT_DATE_FORMAT, REPORT_TIME_FORMAT, underline};
use crate::form::BirthDetails;

/// Width of the rule under the report title.
const TITLE_RULE_WIDTH: usize = 37;

/// Ordered `label: value` pairs inside a report section.
pub type Section = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kundali {
    pub name: String,
    pub date_of_birth: String,
    pub time_of_birth: String,
    pub place_of_birth: String,
    pub gender: String,
    pub planetary_positions: Section,
    pub ascendant: String,
    pub nakshatra_details: Section,
    pub dasha_information: String,
    pub lucky_attributes: Section,
    pub career_focus: String,
    pub summary: String,
}

fn section(pairs: &[(&str, &str)]) -> Section {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build the mock chart for `details`.
pub fn generate_mock(details: &BirthDetails) -> Kundali {
    Kundali {
        name: details.name.clone(),
        date_of_birth: details.dob.format(REPORT_DATE_FORMAT).to_string(),
        time_of_birth: details.tob.format(REPORT_TIME_FORMAT).to_string(),
        place_of_birth: details.place.clone(),
        gender: details.gender.to_string(),
        planetary_positions: section(&[
            ("Sun", "Virgo"),
            ("Moon", "Capricorn"),
            ("Mars", "Libra"),
            ("Mercury", "Virgo"),
        ]),
        ascendant: "Libra".to_string(),
        nakshatra_details: section(&[
            ("Moon Nakshatra", "Shravana"),
            ("Nakshatra Ruler", "Moon"),
        ]),
        dasha_information: "Jupiter Mahadasha (5 years remaining)".to_string(),
        lucky_attributes: section(&[
            ("Lucky Color", "Blue, Green"),
            ("Lucky Gemstone", "Yellow Sapphire"),
        ]),
        career_focus: "Financial growth and development".to_string(),
        summary: "Strong analytical mind with a focus on financial growth.".to_string(),
    }
}

fn push_pairs(out: &mut String, heading: &str, pairs: &Section) {
    out.push_str(&format!("\n{}\n", underline(heading)));
    for (label, value) in pairs {
        out.push_str(&format!("{}: {}\n", label, value));
    }
}

fn push_paragraph(out: &mut String, heading: &str, text: &str) {
    out.push_str(&format!("\n{}\n{}\n", underline(heading), text));
}

/// Render the chart as a plain-text report.
///
/// The ascendant is carried in the structured form only.
pub fn format_output(kundali: &Kundali) -> String {
    let mut out = String::new();
    out.push_str(&format!("Kundali Details for {}:\n", kundali.name));
    out.push_str(&"-".repeat(TITLE_RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!("Date of Birth: {}\n", kundali.date_of_birth));
    out.push_str(&format!("Time of Birth: {}\n", kundali.time_of_birth));
    out.push_str(&format!("Place of Birth: {}\n", kundali.place_of_birth));
    out.push_str(&format!("Gender: {}\n", kundali.gender));

    push_pairs(&mut out, "Planetary Positions:", &kundali.planetary_positions);
    push_pairs(&mut out, "Nakshatra Details:", &kundali.nakshatra_details);
    push_paragraph(&mut out, "Dasha Information:", &kundali.dasha_information);
    push_pairs(&mut out, "Lucky Attributes:", &kundali.lucky_attributes);
    push_paragraph(&mut out, "Career Focus:", &kundali.career_focus);
    push_paragraph(&mut out, "Summary:", &kundali.summary);
    out
}

struct Pairs<'a>(&'a Section);

impl Serialize for Pairs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Serialises as an object keyed by the report labels, in report order.
impl Serialize for Kundali {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(12))?;
        map.serialize_entry("Name", &self.name)?;
        map.serialize_entry("Date of Birth", &self.date_of_birth)?;
        map.serialize_entry("Time of Birth", &self.time_of_birth)?;
        map.serialize_entry("Place of Birth", &self.place_of_birth)?;
        map.serialize_entry("Gender", &self.gender)?;
        map.serialize_entry("Planetary Positions", &Pairs(&self.planetary_positions))?;
        map.serialize_entry("Ascendant", &self.ascendant)?;
        map.serialize_entry("Nakshatra Details", &Pairs(&self.nakshatra_details))?;
        map.serialize_entry("Dasha Information", &self.dasha_information)?;
        map.serialize_entry("Lucky Attributes", &Pairs(&self.lucky_attributes))?;
        map.serialize_entry("Career Focus", &self.career_focus)?;
        map.serialize_entry("Summary", &self.summary)?;
        map.end()
    }
}
