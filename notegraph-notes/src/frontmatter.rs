//! YAML front matter for Markdown notes
//!
//! Notes carry an optional `---` delimited YAML block at the top of the
//! file. The block is kept as an ordered [`serde_yaml::Mapping`] so key
//! order survives a read/rewrite cycle. A note whose block fails to parse
//! is treated as having no front matter at all; the malformed block stays
//! in the body untouched.

use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

static FRONTMATTER_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n?(.*)\z").expect("valid regex")
});

static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n\n+").expect("valid regex"));

/// Ordered YAML front matter of a single note
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter(Mapping);

impl Frontmatter {
    pub fn new() -> Self {
        Self(Mapping::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(Value::String(key.to_string()))
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.0.insert(Value::String(key.to_string()), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(Value::String(key.to_string()))
    }

    /// The note's `title` field, when present and a string
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    /// Traversal depth override for this note's diagram
    ///
    /// Missing, non-integer, and non-positive values all coerce to 1.
    pub fn diagram_layers(&self) -> usize {
        self.get("diagram_layers")
            .and_then(Value::as_i64)
            .filter(|n| *n >= 1)
            .map(|n| n as usize)
            .unwrap_or(1)
    }

    /// Serialize back to YAML, without a trailing newline
    pub fn to_yaml(&self) -> Result<String> {
        let text = serde_yaml::to_string(&self.0)?;
        Ok(text.trim_end().to_string())
    }
}

impl From<Mapping> for Frontmatter {
    fn from(mapping: Mapping) -> Self {
        // YAML allows non-string keys (an unquoted `no:` parses as a
        // boolean); they carry no meaning here and are dropped.
        let cleaned = mapping
            .into_iter()
            .filter(|(k, _)| k.is_string())
            .collect();
        Self(cleaned)
    }
}

/// Split note content into front matter and body
///
/// Content without a leading `---` block, or with a block that is not
/// valid YAML, yields empty front matter and the full content as body.
pub fn split_note(content: &str) -> (Frontmatter, String) {
    let Some(caps) = FRONTMATTER_BLOCK.captures(content) else {
        return (Frontmatter::new(), content.to_string());
    };
    let yaml = &caps[1];
    let body = caps[2].to_string();
    match serde_yaml::from_str::<Mapping>(yaml) {
        Ok(mapping) => (Frontmatter::from(mapping), body),
        Err(e) => {
            tracing::warn!("ignoring malformed front matter: {e}");
            (Frontmatter::new(), content.to_string())
        }
    }
}

/// Read a note file and split off its front matter
pub fn read_note(path: &Path) -> Result<(Frontmatter, String)> {
    let content = fs::read_to_string(path)?;
    Ok(split_note(&content))
}

/// Assemble a note from front matter and body
///
/// Runs of three or more newlines collapse to one blank line and the
/// note always ends with a single trailing newline.
pub fn render_note(frontmatter: &Frontmatter, body: &str) -> Result<String> {
    let assembled = if frontmatter.is_empty() {
        body.to_string()
    } else {
        format!("---\n{}\n---\n\n{}", frontmatter.to_yaml()?, body)
    };
    let collapsed = BLANK_RUNS.replace_all(&assembled, "\n\n");
    Ok(format!("{}\n", collapsed.trim_end()))
}

/// Write a note file from front matter and body
pub fn write_note(path: &Path, frontmatter: &Frontmatter, body: &str) -> Result<()> {
    fs::write(path, render_note(frontmatter, body)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_note_with_frontmatter() {
        let (fm, body) = split_note("---\ntitle: Ada\ndraft: false\n---\n\n# Ada\n");
        assert_eq!(fm.title(), Some("Ada"));
        assert_eq!(fm.get("draft"), Some(&Value::Bool(false)));
        // the greedy whitespace match after the closing delimiter eats
        // the separating blank line
        assert_eq!(body, "# Ada\n");
    }

    #[test]
    fn test_split_note_without_frontmatter() {
        let (fm, body) = split_note("# Just a heading\n");
        assert!(fm.is_empty());
        assert_eq!(body, "# Just a heading\n");
    }

    #[test]
    fn test_malformed_yaml_keeps_full_content() {
        let content = "---\ntitle: [unclosed\n---\nbody\n";
        let (fm, body) = split_note(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_non_string_keys_are_dropped() {
        let (fm, _) = split_note("---\ntitle: Ada\nno: dropped\n---\nbody");
        assert_eq!(fm.title(), Some("Ada"));
        assert!(fm.get("no").is_none());
    }

    #[test]
    fn test_diagram_layers_coercion() {
        let (fm, _) = split_note("---\ndiagram_layers: 3\n---\nx");
        assert_eq!(fm.diagram_layers(), 3);

        let (fm, _) = split_note("---\ndiagram_layers: 0\n---\nx");
        assert_eq!(fm.diagram_layers(), 1);

        let (fm, _) = split_note("---\ndiagram_layers: deep\n---\nx");
        assert_eq!(fm.diagram_layers(), 1);

        let (fm, _) = split_note("---\ntitle: x\n---\nx");
        assert_eq!(fm.diagram_layers(), 1);
    }

    #[test]
    fn test_key_order_survives_round_trip() {
        let (fm, body) = split_note("---\nzeta: 1\nalpha: 2\nmid: 3\n---\nbody");
        let rendered = render_note(&fm, &body).unwrap();
        let zeta = rendered.find("zeta").unwrap();
        let alpha = rendered.find("alpha").unwrap();
        let mid = rendered.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_render_collapses_blank_runs() {
        let mut fm = Frontmatter::new();
        fm.set("title", Value::String("t".into()));
        let rendered = render_note(&fm, "a\n\n\n\nb").unwrap();
        assert_eq!(rendered, "---\ntitle: t\n---\n\na\n\nb\n");
    }

    #[test]
    fn test_render_without_frontmatter_is_body_only() {
        let fm = Frontmatter::new();
        assert_eq!(render_note(&fm, "plain body").unwrap(), "plain body\n");
    }

    #[test]
    fn test_read_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        let mut fm = Frontmatter::new();
        fm.set("title", Value::String("Ada".into()));
        fm.set("draft", Value::Bool(true));
        write_note(&path, &fm, "# Ada\n\nBody.").unwrap();

        let (read_fm, body) = read_note(&path).unwrap();
        assert_eq!(read_fm.title(), Some("Ada"));
        assert_eq!(read_fm.get("draft"), Some(&Value::Bool(true)));
        assert_eq!(body.trim(), "# Ada\n\nBody.");
    }
}
