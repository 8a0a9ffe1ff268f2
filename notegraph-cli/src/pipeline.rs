//! The full vault processing run
//!
//! Loads every `.ttl` file into one store, classifies the predicate
//! vocabulary once, copies the source vault into the destination vault,
//! rewrites each destination note with a fresh diagram and front matter,
//! then syncs `related` wikilinks back into the source notes. Per-note
//! failures are logged and skipped; a run only aborts on setup errors.

use crate::config::Config;
use crate::error::{CliError, CliResult};
use notegraph_diagram::{render_mermaid, resolve_entity, traverse, PredicateSets};
use notegraph_graph::hierarchy::suppress_inverse_for;
use notegraph_graph::TripleStore;
use notegraph_notes::{
    clean_body, collect_md_files, generate_body_content, read_note, sync_sources,
    update_frontmatter, write_note,
};
use notegraph_turtle::load_dir;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Execute the pipeline described by `config`.
pub fn run(config: &Config) -> CliResult<()> {
    fs::create_dir_all(&config.dest_dir)?;

    let store = load_dir(&config.ttl_dir)?;
    tracing::info!(triples = store.len(), "loaded triple store");
    let sets = PredicateSets::classify(&store);

    let source_files = collect_md_files(&config.source_dir)?;
    let source_basenames: BTreeSet<String> = source_files
        .iter()
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()))
        .map(str::to_lowercase)
        .collect();

    for src in &source_files {
        let Ok(relative) = src.strip_prefix(&config.source_dir) else {
            continue;
        };
        let dest = config.dest_dir.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, &dest)?;
    }

    let mut processed = 0usize;
    for path in collect_md_files(&config.dest_dir)? {
        match process_note(&path, &store, &sets, &source_basenames, config) {
            Ok(()) => processed += 1,
            Err(e) => {
                tracing::warn!(path = %path.display(), "note skipped: {e}");
            }
        }
    }
    tracing::info!(processed, "destination vault processed");

    let updated = sync_sources(&config.source_dir, &config.dest_dir)
        .map_err(|e| CliError::Input(e.to_string()))?;
    tracing::info!(updated, "source notes synced");
    Ok(())
}

/// Rewrite one destination note in place.
fn process_note(
    path: &Path,
    store: &TripleStore,
    sets: &PredicateSets,
    source_basenames: &BTreeSet<String>,
    config: &Config,
) -> CliResult<()> {
    let filename = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CliError::Input(format!("non-UTF8 note name: {}", path.display())))?;

    let (mut frontmatter, raw_body) = read_note(path)?;
    let title = frontmatter.title().unwrap_or(filename).to_string();

    let page_uri = resolve_entity(filename, store, &config.base_iri);
    let suppress_inverse = suppress_inverse_for(store, &page_uri);
    let layers = frontmatter.diagram_layers();

    let cleaned = clean_body(&raw_body, &title);
    let outcome = traverse(store, sets, &page_uri, &title, suppress_inverse, layers);
    let mermaid = render_mermaid(&outcome);
    let node_names = outcome.node_local_names();

    let appended = generate_body_content(&mermaid, &node_names, source_basenames);
    update_frontmatter(
        &mut frontmatter,
        store,
        &node_names,
        &page_uri,
        config.draft,
        &config.base_iri,
    );

    write_note(path, &frontmatter, &format!("{cleaned}{appended}"))?;
    Ok(())
}
