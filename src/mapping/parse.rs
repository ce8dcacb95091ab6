// Field-level parsers used by the row mapper
// Author: Gabriel Demetrios Lafis
//
// Every function here is total: malformed input degrades to an empty or
// absent value and never produces an error.

use crate::data::{CurriculumItem, Schedule};

const PERIOD_MARKERS: [char; 2] = ['~', '/'];

/// Parse a signed integer, ignoring surrounding whitespace.
///
/// Full-width digits (`２５`) count as digits and single underscores may
/// group digits (`1_000`). Returns `None` for empty or non-numeric input.
pub fn parse_int(value: &str) -> Option<i64> {
    let digits: Vec<char> = value.trim().chars().map(to_ascii_digit).collect();

    let grouped = digits.iter().enumerate().all(|(i, c)| {
        *c != '_'
            || (i > 0
                && digits[i - 1].is_ascii_digit()
                && digits.get(i + 1).map_or(false, char::is_ascii_digit))
    });
    if !grouped {
        return None;
    }

    digits
        .into_iter()
        .filter(|c| *c != '_')
        .collect::<String>()
        .parse::<i64>()
        .ok()
}

fn to_ascii_digit(c: char) -> char {
    match c {
        '\u{ff10}'..='\u{ff19}' => char::from(b'0' + (c as u32 - 0xff10) as u8),
        _ => c,
    }
}

/// Split a comma-separated list, trimming entries and dropping empty ones
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Wrap free text as a single-entry list, or no entries when blank
pub fn text_block(value: &str) -> Vec<String> {
    let value = value.trim();
    if value.is_empty() {
        Vec::new()
    } else {
        vec![value.to_string()]
    }
}

/// Parse `title|hours` items separated by semicolons.
///
/// Items without a pipe are dropped; an unparseable duration becomes 0.
pub fn parse_curriculum(value: &str) -> Vec<CurriculumItem> {
    value
        .split(';')
        .filter_map(|item| {
            let mut parts = item.split('|');
            let title = parts.next()?;
            let duration = parts.next()?;
            Some(CurriculumItem {
                title: title.trim().to_string(),
                duration_hours: parse_int(duration).unwrap_or(0),
            })
        })
        .collect()
}

/// Classify a schedule as a period (`~` or `/` present) or a list of dates
pub fn parse_schedule(value: &str) -> Schedule {
    if value.contains(&PERIOD_MARKERS[..]) {
        let period = value
            .replace('~', "/")
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        Schedule::Period { period }
    } else {
        // Empty entries are kept as positional blanks.
        Schedule::Dates {
            dates: value.split(',').map(|date| date.trim().to_string()).collect(),
        }
    }
}

/// Split an `email/phone` field into its first and last segments.
///
/// A value without a slash yields the same text for both.
pub fn split_contact(value: &str) -> (String, String) {
    let first = value.split('/').next().unwrap_or_default();
    let last = value.rsplit('/').next().unwrap_or_default();
    (first.trim().to_string(), last.trim().to_string())
}

/// Turn `2025-07-01 18:00` into `2025-07-01T18:00`
pub fn normalize_deadline(value: &str) -> String {
    value.trim().replace(' ', "T")
}
