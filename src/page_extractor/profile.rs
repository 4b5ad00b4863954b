//! Parsed profile page and its field extractors
//!
//! `ProfilePage` parses a response body once and keeps two flattened
//! renderings of its visible text: one stripped text node per line (for
//! `Label: value` lookups, where a value runs to the end of its line) and the
//! same nodes joined by spaces (for token scans such as dates and emails).
//!
//! Every extractor is tolerant: missing or malformed input yields an empty
//! string, never an error.

use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::utils::clean_text;

/// Text nodes under these elements are not page text
const NON_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Header locations checked for `Name #Number`, in priority order.
///
/// Only the first match of each selector is inspected.
pub const HEADER_CANDIDATES: [&str; 7] = [
    "h1",
    "h2",
    "h3",
    ".licensee-name",
    ".profile-header",
    ".attorney-name",
    "title",
];

/// Label synonyms for the admission date, tried in order
pub const ADMISSION_DATE_LABELS: [&str; 3] =
    ["Admitted to the Bar", "Date Admitted", "Admission Date"];

pub const STATUS_LABEL: &str = "License Status";
pub const ADDRESS_LABEL: &str = "Address";
pub const PHONE_LABEL: &str = "Phone";

static HEADER_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    HEADER_CANDIDATES
        .iter()
        .map(|css| {
            Selector::parse(css)
                .unwrap_or_else(|_| panic!("BUG: hardcoded CSS selector '{css}' is invalid"))
        })
        .collect()
});

static MAILTO_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[href^="mailto:"]"#)
        .expect("BUG: hardcoded CSS selector 'a[href^=\"mailto:\"]' is invalid")
});

static PLAIN_HEADER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3").expect("BUG: hardcoded CSS selector 'h1, h2, h3' is invalid")
});

/// `Name #Number` inside a header element
static HEADER_NAME_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+?)\s*#\s*(\d{3,})\b").expect("BUG: hardcoded header name regex is invalid")
});

/// `Name #Number` anywhere in the page; the name must look like a proper name
static TEXT_NAME_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n?([A-Z][A-Za-z.\-' ]+?)\s*#\s*(\d{3,})\b")
        .expect("BUG: hardcoded full-text name regex is invalid")
});

static LABELED_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Email:\s*([^\s]+@[^\s]+)").expect("BUG: hardcoded email label regex is invalid")
});

static BARE_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}")
        .expect("BUG: hardcoded email token regex is invalid")
});

/// `label: value` patterns for the fixed field labels, compiled once
static FIELD_LABEL_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [STATUS_LABEL, ADDRESS_LABEL, PHONE_LABEL]
        .into_iter()
        .chain(ADMISSION_DATE_LABELS)
        .map(|label| {
            let re = label_regex(label)
                .unwrap_or_else(|_| panic!("BUG: hardcoded label pattern for '{label}' is invalid"));
            (label, re)
        })
        .collect()
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").expect("BUG: hardcoded date regex is invalid")
});

/// A parsed resource body
pub struct ProfilePage {
    document: Html,
    line_text: String,
    space_text: String,
}

impl ProfilePage {
    /// Parse a response body. Never fails; garbage in yields empty fields out.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let document = Html::parse_document(body);
        let pieces = visible_text_pieces(&document);
        Self {
            line_text: pieces.join("\n"),
            space_text: pieces.join(" "),
            document,
        }
    }

    /// Visible text, one stripped text node per line
    #[must_use]
    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    /// Visible text, stripped text nodes joined by single spaces
    #[must_use]
    pub fn space_text(&self) -> &str {
        &self.space_text
    }

    /// Locate `Name #Number`, returning `("", "")` when absent.
    ///
    /// Header candidates are tried first; the first one whose text matches
    /// wins. Only then is the full page text scanned.
    #[must_use]
    pub fn name_and_id(&self) -> (String, String) {
        for selector in HEADER_SELECTORS.iter() {
            let Some(element) = self.document.select(selector).next() else {
                continue;
            };
            let text = clean_text(&element_text(element, " "));
            if let Some(caps) = HEADER_NAME_ID_RE.captures(&text) {
                return (clean_text(&caps[1]), caps[2].to_string());
            }
        }

        TEXT_NAME_ID_RE
            .captures(&self.line_text)
            .map(|caps| (clean_text(&caps[1]), caps[2].to_string()))
            .unwrap_or_default()
    }

    /// Value of the first case-insensitive `label: value` in the page text
    #[must_use]
    pub fn label_value(&self, label: &str) -> String {
        if let Some((_, re)) = FIELD_LABEL_RES.iter().find(|(known, _)| *known == label) {
            return self.capture_value(re);
        }
        match label_regex(label) {
            Ok(re) => self.capture_value(&re),
            Err(_) => String::new(),
        }
    }

    fn capture_value(&self, re: &Regex) -> String {
        re.captures(&self.line_text)
            .map(|caps| clean_text(&caps[1]))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn status(&self) -> String {
        self.label_value(STATUS_LABEL)
    }

    #[must_use]
    pub fn address(&self) -> String {
        self.label_value(ADDRESS_LABEL)
    }

    /// Phone value with any trailing `| Fax: ...` dropped
    #[must_use]
    pub fn phone(&self) -> String {
        let value = self.label_value(PHONE_LABEL);
        let before_separator = value.split('|').next().unwrap_or_default();
        clean_text(before_separator)
    }

    /// Mailto link first, then a labeled email, then any email-shaped token
    #[must_use]
    pub fn email(&self) -> String {
        if let Some(link) = self.document.select(&MAILTO_SELECTOR).next() {
            let label = clean_text(&element_text(link, " "));
            if !label.is_empty() {
                return label;
            }
            let target = link
                .value()
                .attr("href")
                .unwrap_or_default()
                .trim_start_matches("mailto:");
            let address = target.split('?').next().unwrap_or_default();
            let address = clean_text(address);
            if !address.is_empty() {
                return address;
            }
        }

        if let Some(caps) = LABELED_EMAIL_RE.captures(&self.space_text) {
            return caps[1].to_string();
        }

        BARE_EMAIL_RE
            .find(&self.space_text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Labeled admission date, else the last date-shaped token on the page
    #[must_use]
    pub fn admission_date(&self) -> String {
        for label in ADMISSION_DATE_LABELS {
            let value = self.label_value(label);
            if !value.is_empty() {
                return value;
            }
        }

        DATE_RE
            .find_iter(&self.space_text)
            .last()
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Text of the first `h1`, `h2` or `h3`, for diagnostics
    #[must_use]
    pub fn first_header(&self) -> Option<String> {
        self.document
            .select(&PLAIN_HEADER_SELECTOR)
            .next()
            .map(|el| clean_text(&element_text(el, "")))
    }
}

/// Case-insensitive `label: value` pattern; the value runs to the end of its line
fn label_regex(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i){}\s*:\s*(.+)", regex::escape(label)))
}

/// Stripped, non-empty text nodes of an element joined by `separator`
fn element_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Stripped, non-empty text nodes of the document outside script-like elements
fn visible_text_pieces(document: &Html) -> Vec<String> {
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| NON_TEXT_ELEMENTS.contains(&el.name()))
            });
            if hidden {
                return None;
            }
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
