//! Resume text normalization.
//!
//! Single preprocessing step between extraction and vectorization: strip URLs
//! and email addresses, drop everything that is not an ASCII letter or
//! whitespace, collapse whitespace runs, trim, lowercase. The output alphabet
//! (lowercase letters and single spaces) matches none of the strip patterns,
//! so the function is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").unwrap());
static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static RE_NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());
static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Reduces raw resume text to the lowercase alphabetic form the vectorizer
/// vocabulary was fitted on. Total: never fails, empty input yields empty
/// output.
pub fn normalize(text: &str) -> String {
    let text = RE_URL.replace_all(text, "");
    let text = RE_EMAIL.replace_all(&text, "");
    let text = RE_NON_ALPHA.replace_all(&text, "");
    let text = RE_WHITESPACE.replace_all(&text, " ");
    text.trim().to_lowercase()
}
