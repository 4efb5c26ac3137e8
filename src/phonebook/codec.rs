//! # Persisted Text Format
//!
//! One contact per line:
//!
//! ```text
//! Ann,"123, 456"
//! Bob Smith,"+44 20 7946 0958"
//! "Smith, John","555 01"
//! ```
//!
//! The name is written literally unless it contains a comma or a double quote.
//! Such names are written as a quoted field with inner quotes doubled, which
//! keeps every other line byte-identical to files written by older versions
//! that had no escaping at all.
//!
//! The numbers field is always quoted and joined with `", "`. Numbers never
//! contain commas, so splitting on `,` and dropping the single separator space
//! after each comma gives back the exact strings, spaces included.
//!
//! Loading is lenient: lines that don't match the grammar are skipped and
//! counted, and number tokens are not re-validated.

use crate::book::ContactBook;
use crate::model::Contact;
use crate::validation::{NAME_MAX_CHARS, NAME_MIN_CHARS};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static PLAIN_LINE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r#"^([^,"]{{{},{}}}),"([0-9+, ]+)"$"#,
        NAME_MIN_CHARS, NAME_MAX_CHARS
    );
    Regex::new(&pattern).expect("plain line pattern is valid")
});

static QUOTED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^"((?:[^"\r\n]|"")+)","([0-9+, ]+)"$"#).expect("quoted line pattern is valid")
});

/// The outcome of parsing a persisted file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub book: ContactBook,
    /// Non-blank lines that did not match the format.
    pub skipped_lines: usize,
}

pub fn serialize(book: &ContactBook) -> String {
    let mut out = String::new();
    for contact in book.list() {
        out.push_str(&encode_name(contact.name()));
        out.push_str(",\"");
        out.push_str(&contact.numbers().join(", "));
        out.push_str("\"\n");
    }
    out
}

pub fn deserialize(text: &str) -> LoadReport {
    let mut report = LoadReport::default();

    for (line_no, raw) in text.lines().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(contact) => {
                if let Some(previous) = report.book.insert(contact) {
                    debug!(
                        line = line_no + 1,
                        name = previous.name(),
                        "duplicate contact line replaces earlier entry"
                    );
                }
            }
            None => {
                debug!(line = line_no + 1, "skipping malformed contact line");
                report.skipped_lines += 1;
            }
        }
    }

    report
}

fn parse_line(line: &str) -> Option<Contact> {
    let (name, numbers) = if let Some(caps) = PLAIN_LINE.captures(line) {
        (caps[1].to_string(), caps[2].to_string())
    } else if let Some(caps) = QUOTED_LINE.captures(line) {
        let name = caps[1].replace("\"\"", "\"");
        let len = name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
            return None;
        }
        (name, caps[2].to_string())
    } else {
        return None;
    };

    let numbers = split_numbers(&numbers);
    if numbers.is_empty() {
        return None;
    }
    Some(Contact::from_parts(name, numbers))
}

/// Splits the numbers field, dropping blank tokens (`"123,"`, `"1, , 2"`).
fn split_numbers(field: &str) -> Vec<String> {
    let mut numbers: Vec<String> = Vec::new();
    for (i, token) in field.split(',').enumerate() {
        let token = if i == 0 {
            token
        } else {
            token.strip_prefix(' ').unwrap_or(token)
        };
        if token.trim().is_empty() {
            continue;
        }
        if !numbers.iter().any(|n| n == token) {
            numbers.push(token.to_string());
        }
    }
    numbers
}

fn encode_name(name: &str) -> String {
    if name.contains(',') || name.contains('"') {
        format!("\"{}\"", name.replace('"', "\"\""))
    } else {
        name.to_string()
    }
}
