//! Interactive terminal prompts for fields not given on the command line.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::form::{FormInput, Gender};

fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask for every field still missing from `form`.
///
/// Answers are kept as typed apart from the line ending. A blank answer
/// leaves the field unset so validation reports it. Gender is asked again
/// until it parses; end of input leaves it unset.
pub fn fill_missing<R: BufRead, W: Write>(
    form: &mut FormInput,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Enter Your Details")?;

    let text_fields: [(&mut Option<String>, &str); 4] = [
        (&mut form.name, "Full Name (e.g., Vihan Verma): "),
        (&mut form.dob, "Date of Birth (YYYY-MM-DD): "),
        (&mut form.tob, "Time of Birth (HH:MM, 24h): "),
        (&mut form.place, "Place of Birth (e.g., Vadodara, Gujarat): "),
    ];
    for (slot, prompt) in text_fields {
        if slot.is_none() {
            let answer = read_line(input, output, prompt)?;
            if !answer.trim().is_empty() {
                *slot = Some(answer);
            }
        }
    }

    while form.gender.is_none() {
        let answer = read_line(input, output, "Gender [Male/Female/Other]: ")?;
        if answer.trim().is_empty() {
            break;
        }
        match answer.parse::<Gender>() {
            Ok(g) => form.gender = Some(g),
            Err(e) => writeln!(output, "  {}", e)?,
        }
    }
    Ok(())
}
