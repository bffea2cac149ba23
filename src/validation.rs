use regex::Regex;
use std::sync::OnceLock;

use crate::error::Error;

/// Syntax check only (`local@domain.tld`); no DNS or mailbox verification.
pub fn validate_email(email: &str) -> Result<&str, Error> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex")
    });

    if re.is_match(email) {
        Ok(email)
    } else {
        Err(Error::validation(format!("invalid email address: {email}")))
    }
}

/// Empty (after trimming) means "no age given". Non-negativity is not
/// enforced, only integer-parseability.
pub fn parse_optional_age(raw: &str) -> Result<Option<i32>, Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| Error::validation(format!("age must be an integer, got '{trimmed}'")))
}

/// A required field is invalid if it is empty after trimming whitespace.
pub fn require(field: &str, value: &str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Post bodies are stored verbatim except for trailing newlines; interior
/// newlines and other whitespace are kept.
#[must_use]
pub fn normalize_body(body: &str) -> &str {
    body.trim_end_matches('\n')
}
