//! Project-wide constants.

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// Hosted Langflow API root.
pub const BASE_API_URL: &str = "https://api.langflow.astra.datastax.com";

/// Langflow organisation id the flow lives under.
pub const LANGFLOW_ID: &str = "88bdc206-3a82-475e-94fd-543ed8a7cefc";

/// Flow that turns a birth-details message into a Kundali.
pub const FLOW_ID: &str = "e80b75ea-e2be-4990-b879-f47a18ec221a";

/// Both input and output of the flow are chat messages.
pub const FLOW_IO_TYPE: &str = "chat";

/// Earliest accepted date of birth as (year, month, day).
pub const MIN_BIRTH_DATE: (i32, u32, u32) = (1900, 1, 1);

/// Rendering of the date of birth in the mock report, e.g. `March 07, 1994`.
pub const REPORT_DATE_FORMAT: &str = "%B %d, %Y";

/// Rendering of the time of birth in the mock report, e.g. `02:05 PM`.
pub const REPORT_TIME_FORMAT: &str = "%I:%M %p";

/// Render `s` over a line of dashes of the same width.
pub fn underline(s: &str) -> String {
    format!("{}\n{}", s, "-".repeat(s.chars().count()))
}
