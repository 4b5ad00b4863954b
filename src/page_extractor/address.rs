//! Address decomposition.
//!
//! Directory addresses usually read `Firm, 123 Main St, City, CA 90001-1234`.
//! Firm and city are positional and only trusted when there are at least three
//! comma-separated segments; the postal code is searched for anywhere.

use regex::Regex;
use std::sync::LazyLock;

use super::schema::AddressParts;

static POSTAL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{5})(-\d{4})?\b").expect("BUG: hardcoded postal code regex is invalid")
});

/// Minimum segments before positional firm/city are trusted
const MIN_POSITIONAL_SEGMENTS: usize = 3;

/// Split an address into firm, city and postal code
#[must_use]
pub fn decompose_address(address: &str) -> AddressParts {
    let segments: Vec<&str> = address.split(',').map(str::trim).collect();

    let (firm, city) = if segments.len() >= MIN_POSITIONAL_SEGMENTS {
        (
            segments[0].to_string(),
            segments[segments.len() - 2].to_string(),
        )
    } else {
        (String::new(), String::new())
    };

    AddressParts {
        firm,
        city,
        postal_code: extract_postal_code(address),
    }
}

/// First 5-digit (optionally +4) token in the text
#[must_use]
pub fn extract_postal_code(text: &str) -> String {
    POSTAL_CODE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
