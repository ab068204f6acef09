//! Input formatters for Brazilian CPF and phone numbers.
//!
//! These are mask-as-you-type helpers: they accept partial input, strip
//! everything that is not a digit and re-insert separators as digits
//! accumulate. They never fail and never reject input; anything past the
//! maximum length is truncated.

/// Remove every non-digit character.
pub fn strip_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a CPF progressively toward `XXX.XXX.XXX-XX`.
///
/// Partial input keeps the separators already earned: `"1234"` becomes
/// `"123.4"`, `"1234567"` becomes `"123.456.7"`. Digits past the 11th are
/// dropped.
pub fn format_cpf(value: &str) -> String {
    let digits = strip_digits(value);
    let d = digits.as_str();
    match d.len() {
        0..=3 => d.to_string(),
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        n => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..n.min(11)]),
    }
}

/// Format a phone number progressively toward `(DD) XXXXX-XXXX`.
///
/// The area code opens after the first digit, the hyphen appears once the
/// subscriber part is longer than five digits. Digits past the 11th are
/// dropped. Empty input stays empty.
pub fn format_phone(value: &str) -> String {
    let digits = strip_digits(value);
    let d = digits.as_str();
    match d.len() {
        0 => String::new(),
        1..=2 => format!("({d}"),
        3..=7 => format!("({}) {}", &d[..2], &d[2..]),
        n => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..n.min(11)]),
    }
}

/// A CPF is considered valid when it carries exactly 11 digits.
/// No checksum verification is performed.
pub fn is_valid_cpf(value: &str) -> bool {
    strip_digits(value).len() == 11
}

/// A phone is considered valid with 10 (landline) or 11 (mobile) digits.
pub fn is_valid_phone(value: &str) -> bool {
    matches!(strip_digits(value).len(), 10 | 11)
}
