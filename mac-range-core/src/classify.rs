use serde::Serialize;

/// Classified shape of a raw user input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Exactly 9 decimal digits after normalization.
    Serial,
    /// Exactly 12 hexadecimal characters after normalization.
    Mac,
    /// Anything else.
    Unknown,
}

/// Trim surrounding whitespace and strip `:` and `-` separators.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| *c != ':' && *c != '-')
        .collect()
}

/// Decide whether an input looks like a serial number, a MAC address,
/// or neither.
///
/// The two accepted patterns are mutually exclusive: a 9-digit string
/// is never 12 hex characters and vice versa, so check order does not
/// affect the outcome.
pub fn classify(input: &str) -> InputKind {
    let clean = normalize(input);
    if clean.len() == 12 && clean.chars().all(|c| c.is_ascii_hexdigit()) {
        InputKind::Mac
    } else if clean.len() == 9 && clean.chars().all(|c| c.is_ascii_digit()) {
        InputKind::Serial
    } else {
        InputKind::Unknown
    }
}
