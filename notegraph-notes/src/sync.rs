//! Source-vault front matter sync
//!
//! After the destination vault is processed, each source note's front
//! matter gets a `related` wikilink list derived from the `entities`
//! recorded in the corresponding destination note. The source body is
//! preserved byte for byte; only the YAML block is rewritten.

use crate::error::Result;
use crate::frontmatter::Frontmatter;
use notegraph_graph::iri::local_name;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

static FRONTMATTER_AND_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n(.*)\z").expect("valid regex")
});

/// Recursively collect `.md` files under `dir`, sorted for determinism
pub fn collect_md_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.is_dir() {
        return Ok(files);
    }
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in fs::read_dir(&current)? {
            let path = entry?.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().is_some_and(|ext| ext == "md") {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

fn basename_lower(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_lowercase)
}

/// Entity local names per destination note, keyed by vault-relative path
///
/// Only entities whose IRI local name matches a destination note
/// basename survive the filter; everything else is graph-only detail.
fn extract_entities(
    dest_dir: &Path,
    valid_basenames: &BTreeSet<String>,
) -> Result<BTreeMap<PathBuf, Vec<String>>> {
    let mut extracted = BTreeMap::new();
    for path in collect_md_files(dest_dir)? {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping unreadable note: {e}");
                continue;
            }
        };
        let (frontmatter, _) = crate::frontmatter::split_note(&content);
        let Some(Value::Sequence(entities)) = frontmatter.get("entities") else {
            continue;
        };

        let names: Vec<String> = entities
            .iter()
            .filter_map(Value::as_str)
            .map(|uri| local_name(uri).to_string())
            .filter(|name| valid_basenames.contains(&name.to_lowercase()))
            .collect();
        if !names.is_empty() {
            let relative = path
                .strip_prefix(dest_dir)
                .unwrap_or(&path)
                .to_path_buf();
            extracted.insert(relative, names);
        }
    }
    Ok(extracted)
}

/// Write `related` wikilinks into source notes from destination entities
///
/// Returns the number of source notes updated. Notes without front
/// matter, and notes with no matching source file, are logged and
/// skipped; the pass never fails on a single bad note.
pub fn sync_sources(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    let mut dest_basenames = BTreeSet::new();
    for path in collect_md_files(dest_dir)? {
        if let Some(name) = basename_lower(&path) {
            dest_basenames.insert(name);
        }
    }

    let extracted = extract_entities(dest_dir, &dest_basenames)?;
    tracing::info!(
        notes = extracted.len(),
        "collected entity lists from destination vault"
    );

    let mut updated = 0;
    for (relative, names) in &extracted {
        let source_path = source_dir.join(relative);
        if !source_path.exists() {
            tracing::warn!(path = %relative.display(), "no source note for destination note");
            continue;
        }
        match sync_one(&source_path, names) {
            Ok(true) => updated += 1,
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(path = %source_path.display(), "sync failed: {e}");
            }
        }
    }

    tracing::info!(updated, "source front matter sync finished");
    Ok(updated)
}

fn sync_one(source_path: &Path, names: &[String]) -> Result<bool> {
    let content = fs::read_to_string(source_path)?;
    let Some(caps) = FRONTMATTER_AND_BODY.captures(&content) else {
        tracing::warn!(path = %source_path.display(), "source note has no front matter");
        return Ok(false);
    };
    let yaml = &caps[1];
    let body = &caps[2];

    let mapping: Mapping = match serde_yaml::from_str(yaml) {
        Ok(mapping) => mapping,
        Err(e) => {
            tracing::warn!(path = %source_path.display(), "malformed front matter: {e}");
            return Ok(false);
        }
    };
    let mut frontmatter = Frontmatter::from(mapping);

    let self_name = basename_lower(source_path).unwrap_or_default();
    let mut links: BTreeMap<String, String> = BTreeMap::new();
    for name in names {
        let lower = name.to_lowercase();
        if lower != self_name {
            links.entry(lower).or_insert_with(|| format!("[[{name}]]"));
        }
    }
    let mut related: Vec<String> = links.into_values().collect();
    related.sort();

    frontmatter.set(
        "related",
        Value::Sequence(related.into_iter().map(Value::String).collect()),
    );

    // Only the YAML block changes; the body keeps its exact bytes.
    fs::write(
        source_path,
        format!("---\n{}\n---\n{}", frontmatter.to_yaml()?, body),
    )?;
    Ok(true)
}
