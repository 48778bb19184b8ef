//! Date-time display formatting for backend timestamps.
//!
//! Backend timestamps arrive as RFC 3339 or as offset-less local times
//! (`2024-05-01 08:30:00`, `2024-05-01T08:30:00`). They are rendered in the
//! offset they carry; nothing is converted to the host's zone.

#[cfg(test)]
#[path = "date_test.rs"]
mod tests;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss";
/// Rendered for a missing timestamp.
pub const EMPTY_PLACEHOLDER: &str = "--";

/// Render `input` with `format` (default [`DEFAULT_FORMAT`]).
///
/// Tokens `YYYY MM DD HH mm ss` are each replaced once, zero-padded.
/// Missing input renders as `--`; unparseable input is returned unchanged.
#[must_use]
pub fn format_date_time(input: Option<&str>, format: Option<&str>) -> String {
    let Some(raw) = input.filter(|raw| !raw.trim().is_empty()) else {
        return EMPTY_PLACEHOLDER.to_owned();
    };
    match parse(raw.trim()) {
        Some(moment) => render(moment, format.unwrap_or(DEFAULT_FORMAT)),
        None => raw.to_owned(),
    }
}

fn parse(raw: &str) -> Option<PrimitiveDateTime> {
    if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(moment.date(), moment.time()));
    }
    let spaced = format_description!("[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]");
    let t_separated = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
    PrimitiveDateTime::parse(raw, spaced)
        .or_else(|_| PrimitiveDateTime::parse(raw, t_separated))
        .ok()
        .or_else(|| Date::parse(raw, format_description!("[year]-[month]-[day]")).ok().map(Date::midnight))
}

fn render(moment: PrimitiveDateTime, format: &str) -> String {
    format
        .replacen("YYYY", &format!("{:04}", moment.year()), 1)
        .replacen("MM", &format!("{:02}", u8::from(moment.month())), 1)
        .replacen("DD", &format!("{:02}", moment.day()), 1)
        .replacen("HH", &format!("{:02}", moment.hour()), 1)
        .replacen("mm", &format!("{:02}", moment.minute()), 1)
        .replacen("ss", &format!("{:02}", moment.second()), 1)
}
