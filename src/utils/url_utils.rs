//! URL template handling.
//!
//! Probe URLs are produced from a template holding a single `{id}` placeholder.

use anyhow::{Result, anyhow};
use url::Url;

/// Placeholder replaced by the probed identifier
pub const ID_PLACEHOLDER: &str = "{id}";

/// Render the probe URL for `identifier`.
///
/// # Errors
///
/// Returns an error if the rendered string is not an absolute URL.
pub fn render_url(template: &str, identifier: u64) -> Result<Url> {
    let rendered = template.replace(ID_PLACEHOLDER, &identifier.to_string());
    Url::parse(&rendered).map_err(|e| anyhow!("Failed to parse URL '{rendered}': {e}"))
}

/// Check that a template carries the placeholder and renders to an http(s) URL.
///
/// # Errors
///
/// Returns an error describing the first problem found.
pub fn validate_url_template(template: &str) -> Result<()> {
    if !template.contains(ID_PLACEHOLDER) {
        return Err(anyhow!(
            "URL template '{template}' is missing the {ID_PLACEHOLDER} placeholder"
        ));
    }
    let url = render_url(template, 1)?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(anyhow!("URL template scheme '{other}' is not http or https")),
    }
}
