//! Server-side validation for the "notify me" contact form.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// Top-level domains accepted by the signup form. Catches obvious fakes.
const RECOGNIZED_TLDS: &[&str] = &[
    ".com", ".org", ".net", ".edu", ".gov", ".mil", ".io", ".co", ".us", ".uk", ".ca", ".au",
    ".de", ".fr", ".jp", ".br", ".in", ".ru", ".cn", ".mx", ".nl", ".se", ".no", ".dk", ".fi",
    ".it", ".es", ".pl", ".ch", ".at", ".be", ".pt", ".gr", ".cz", ".hu", ".ro", ".bg", ".hr",
    ".si", ".sk", ".lt", ".lv", ".ee", ".ie", ".lu", ".mt", ".cy",
];

/// Messages are shown to the visitor verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    MalformedEmail,

    #[error("Please enter a valid email address with a recognized domain")]
    UnrecognizedDomain,
}

/// Validates a submitted address and returns it trimmed and lowercased.
pub fn validate_email(raw: &str) -> Result<String, ContactValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ContactValidationError::MissingEmail);
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(ContactValidationError::MalformedEmail);
    }

    let normalized = trimmed.to_lowercase();
    if !RECOGNIZED_TLDS.iter().any(|tld| normalized.ends_with(tld)) {
        return Err(ContactValidationError::UnrecognizedDomain);
    }
    Ok(normalized)
}

/// Trims the plan the visitor came from; blank means no plan.
pub fn normalize_plan_interest(plan: Option<String>) -> Option<String> {
    plan.map(|p| p.trim().to_string()).filter(|p| !p.is_empty())
}
