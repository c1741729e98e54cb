//! Masked rendering of configuration values
//!
//! Values injected into the build are printed in the run summary, but never
//! in full.

use crate::constants::{KEY_VISIBLE_CHARS, NOT_SET, URL_VISIBLE_CHARS};

/// Shows the first characters of a URL followed by an ellipsis
///
/// A URL no longer than the visible width is shown in full.
///
/// # Examples
/// ```
/// use static_inject::masking::mask_url;
///
/// assert_eq!(mask_url(""), "(not set)");
/// assert_eq!(mask_url("https://x.test"), "https://x.test...");
/// ```
pub fn mask_url(url: &str) -> String {
    if url.is_empty() {
        return NOT_SET.to_string();
    }
    let head: String = url.chars().take(URL_VISIBLE_CHARS).collect();
    format!("{head}...")
}

/// Hides a key behind asterisks, keeping only its last characters
///
/// A key of at most eight characters stays fully visible after the asterisks.
///
/// # Examples
/// ```
/// use static_inject::masking::mask_key;
///
/// assert_eq!(mask_key(""), "(not set)");
/// assert_eq!(mask_key("abc123"), "****abc123");
/// ```
pub fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return NOT_SET.to_string();
    }
    let count = key.chars().count();
    let tail: String = key
        .chars()
        .skip(count.saturating_sub(KEY_VISIBLE_CHARS))
        .collect();
    format!("****{tail}")
}
