//! Field-level input hygiene for the contact form
//!
//! Pure functions applied on input/blur events: US phone masking, website
//! scheme normalization, and an advisory email shape check. The backend
//! performs the authoritative validation.

/// Format a US phone number as `(DDD) DDD-DDDD` while typing.
///
/// Non-digit characters are stripped before re-punctuating. Partial input is
/// formatted as far as it goes; anything past the tenth digit is dropped.
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(10)
        .collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Normalize a website field on blur: prepend `https://` when no scheme is
/// present. Empty input stays empty; already-schemed values pass through.
pub fn normalize_website(input: &str) -> String {
    let value = input.trim();
    if value.is_empty() || value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}

/// Advisory email shape check: `local@domain.tld` with no whitespace, a
/// single `@`, and a dot splitting the domain into non-empty segments.
pub fn is_valid_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
