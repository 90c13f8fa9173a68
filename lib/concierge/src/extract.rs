//! Best-effort slot extraction from free-text guest messages.
//!
//! Each extractor is an independent check against the same message, so
//! one message can fill several slots at once. A failed match returns
//! `None` and leaves the caller's state alone.

use regex::Regex;
use std::sync::LazyLock;

static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{4}-\d{2}-\d{2})\s*(?:to|-)\s*(\d{4}-\d{2}-\d{2})").expect("valid regex")
});

static GUEST_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:guests?|adults?)\b").expect("valid regex"));

static NAME_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)name[:\-]\s*(.*)").expect("valid regex"));

/// Matches the message against a hotel's room-type labels.
///
/// Case-insensitive substring match; the first label in the hotel's
/// list that appears anywhere in the message wins, and the canonical
/// label is returned rather than whatever casing the guest typed.
#[must_use]
pub fn extract_room_type(message: &str, room_types: &[String]) -> Option<String> {
    let haystack = message.to_lowercase();
    room_types
        .iter()
        .find(|label| haystack.contains(&label.to_lowercase()))
        .cloned()
}

/// Pulls a `YYYY-MM-DD to YYYY-MM-DD` range out of the message.
///
/// Accepts `to` or `-` as the separator, case-insensitively. The dates
/// are taken verbatim: there is no calendar validation, and a
/// check-out before the check-in is accepted as given.
#[must_use]
pub fn extract_date_range(message: &str) -> Option<(String, String)> {
    DATE_RANGE_RE
        .captures(message)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

/// Pulls a guest count like `2 guests` or `3 adults` out of the message.
#[must_use]
pub fn extract_guest_count(message: &str) -> Option<u32> {
    GUEST_COUNT_RE
        .captures(message)
        .and_then(|caps| caps[1].parse().ok())
}

/// Pulls a guest name out of the message.
///
/// Triggered by a `name:` / `name-` label or by a message starting
/// with "i am " or "my name is ", case-insensitively. Whatever follows
/// is trimmed and used verbatim, original casing intact.
#[must_use]
pub fn extract_guest_name(message: &str) -> Option<String> {
    if let Some(caps) = NAME_LABEL_RE.captures(message) {
        let name = caps[1].trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    let trimmed = message.trim();
    for prefix in ["i am ", "my name is "] {
        if let Some(rest) = strip_prefix_ignore_case(trimmed, prefix) {
            let name = rest.trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }

    None
}

/// Strips an ASCII prefix case-insensitively, keeping the remainder's
/// original casing.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}
