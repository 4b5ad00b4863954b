pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{clean_text, safe_truncate_chars};
pub use url_utils::{ID_PLACEHOLDER, render_url, validate_url_template};
