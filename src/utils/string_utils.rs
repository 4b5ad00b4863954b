//! Text normalization helpers shared by the extractors.

/// Collapse every whitespace run to a single space and trim the ends.
///
/// # Examples
/// ```
/// # use kodegen_tools_barscan::utils::string_utils::clean_text;
/// assert_eq!(clean_text("  Jane \n\t Q.  Public "), "Jane Q. Public");
/// assert_eq!(clean_text(""), "");
/// ```
#[must_use]
pub fn clean_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Respects UTF-8 character boundaries and never panics.
///
/// ```
/// # use kodegen_tools_barscan::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_collapses_mixed_whitespace() {
        assert_eq!(clean_text("a\u{a0}b"), "a b");
        assert_eq!(clean_text("\n\nLicense   Status\n"), "License Status");
    }

    #[test]
    fn truncate_respects_multibyte() {
        assert_eq!(safe_truncate_chars("éàü", 2), "éà");
    }
}
