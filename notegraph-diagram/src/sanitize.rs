//! Mermaid label sanitization
//!
//! Node labels come from note titles and RDF labels, which may contain
//! Markdown links, quotes, or arbitrary bytes. The transform below is
//! order-sensitive: link stripping must precede quote escaping, or URLs
//! containing quotes would be mis-escaped before removal, and backslash
//! doubling must come before `\"` insertion.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]\(.*?\)").expect("valid regex"));

/// Sanitize a string for safe inclusion as a Mermaid node label
pub fn mermaid_safe_label(text: &str) -> String {
    // 1. Remove Markdown link syntax (brackets and URL)
    let safe = MARKDOWN_LINK.replace_all(text, "");

    // 2. Escape backslashes first, then everything else
    let safe = safe.replace('\\', "\\\\");

    // 3. Escape or replace the remaining special characters
    let safe = safe
        .replace('"', "\\\"")
        .replace('`', "'")
        .replace('\n', "<br>")
        .replace(['(', ')'], "")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('|', "/")
        .replace("//", "/");

    // 4. Drop anything outside printable ASCII
    let safe: String = safe.chars().filter(|c| (' '..='~').contains(c)).collect();

    // 5. Trim
    safe.trim().to_string()
}
