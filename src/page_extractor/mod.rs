//! Field extraction from fetched profile pages.
//!
//! Extraction is pattern-based and layout-agnostic: labels are
//! searched across the whole flattened page text and the first match wins.

// Sub-modules
pub mod address;
pub mod extractors;
pub mod profile;
pub mod schema;

// Re-exports for public API
pub use address::{decompose_address, extract_postal_code};
pub use extractors::{
    extract_email, extract_label_value, extract_name_and_id, extract_record, record_from_page,
};
pub use profile::ProfilePage;
pub use schema::{AddressParts, RECORD_COLUMNS, Record};
