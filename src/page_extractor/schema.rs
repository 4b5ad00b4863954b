use serde::{Deserialize, Serialize};

/// Column headers in output order
pub const RECORD_COLUMNS: [&str; 10] = [
    "Bar Number",
    "Attorney Name",
    "Firm Name",
    "Address",
    "City",
    "Zip Code",
    "Phone Number",
    "Email",
    "Present Status",
    "Admission Date",
];

/// One successfully extracted directory entry.
///
/// Only `identifier` and `display_name` are guaranteed; every other field is
/// an empty string when the page did not yield it. Field order matches
/// `RECORD_COLUMNS` so serde-driven writers emit the fixed column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Bar Number")]
    pub identifier: u64,
    #[serde(rename = "Attorney Name")]
    pub display_name: String,
    #[serde(rename = "Firm Name")]
    pub firm: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Zip Code")]
    pub postal_code: String,
    #[serde(rename = "Phone Number")]
    pub phone: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Present Status")]
    pub status: String,
    #[serde(rename = "Admission Date")]
    pub admission_date: String,
}

impl Record {
    /// Cell values in `RECORD_COLUMNS` order
    #[must_use]
    pub fn to_row(&self) -> [String; 10] {
        [
            self.identifier.to_string(),
            self.display_name.clone(),
            self.firm.clone(),
            self.address.clone(),
            self.city.clone(),
            self.postal_code.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.status.clone(),
            self.admission_date.clone(),
        ]
    }
}

/// Components derived from a comma-separated postal address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub firm: String,
    pub city: String,
    pub postal_code: String,
}
