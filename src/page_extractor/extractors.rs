//! Body-level extraction entry points.
//!
//! Thin wrappers that parse a body and delegate to `ProfilePage`, plus
//! `extract_record`, which decides whether a body is a hit.

use super::address::decompose_address;
use super::profile::ProfilePage;
use super::schema::Record;

/// `(name, id)` from a body, or `("", "")` when the pattern is absent
#[must_use]
pub fn extract_name_and_id(body: &str) -> (String, String) {
    ProfilePage::parse(body).name_and_id()
}

/// First `label: value` match in the body's text, or empty
#[must_use]
pub fn extract_label_value(body: &str, label: &str) -> String {
    ProfilePage::parse(body).label_value(label)
}

#[must_use]
pub fn extract_email(body: &str) -> String {
    ProfilePage::parse(body).email()
}

/// Assemble a `Record` from a body.
///
/// Returns `None` unless both the display name and a numeric identifier are
/// found. Secondary fields never cause a miss; they are left empty.
#[must_use]
pub fn extract_record(body: &str) -> Option<Record> {
    let page = ProfilePage::parse(body);
    record_from_page(&page)
}

/// Same as `extract_record` for an already parsed page
#[must_use]
pub fn record_from_page(page: &ProfilePage) -> Option<Record> {
    let (name, id) = page.name_and_id();
    if name.is_empty() || id.is_empty() {
        return None;
    }
    let identifier = id.parse::<u64>().ok()?;

    let address = page.address();
    let parts = decompose_address(&address);

    Some(Record {
        identifier,
        display_name: name,
        firm: parts.firm,
        city: parts.city,
        postal_code: parts.postal_code,
        address,
        phone: page.phone(),
        email: page.email(),
        status: page.status(),
        admission_date: page.admission_date(),
    })
}
