//! Generated-section handling for destination notes
//!
//! Each processed note carries two generated sections, a `## Related
//! Links` wikilink list and a `## Semantic Connections` Mermaid block.
//! [`clean_body`] strips any previous run's output so the pipeline is
//! idempotent, and [`generate_body_content`] appends a fresh rendering.

use crate::frontmatter::Frontmatter;
use notegraph_diagram::resolve_entity;
use notegraph_graph::{Term, TripleStore};
use notegraph_vocab::{rdf, rdfs};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;
use std::collections::BTreeSet;

static MERMAID_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)(?:\s*^##\s*Semantic\s*Connections\s*$\s*)?^\s*```mermaid\s*$\n.*?\n^\s*```\s*$")
        .expect("valid regex")
});

static RELATED_LINKS_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?mi)(?:^\s*##\s*Related\s*Links\s*$\n?(?:^\s*-\s*\[\[.*?\]\]\s*$\n?)*)|(?:^\s*-\s*\[\[.*?\]\]\s*$\n?)+",
    )
    .expect("valid regex")
});

static FOOTNOTES_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^\s*#+\s*Footnotes\s*$").expect("valid regex"));

static LOOSE_BLANKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Strip generated sections and the title heading from a note body
///
/// Removes the first `# <title>` heading, any previous Mermaid block
/// (with its `## Semantic Connections` heading), any wikilink bullet
/// list (with its `## Related Links` heading), and a bare `Footnotes`
/// heading. Running this over already-clean content is a no-op modulo
/// whitespace, which is what makes repeated pipeline runs converge.
pub fn clean_body(body: &str, title: &str) -> String {
    let mut body = body.to_string();

    if !title.is_empty() {
        let pattern = format!(r"(?mi)^\s*#\s*{}\s*$", regex::escape(title));
        if let Ok(heading) = Regex::new(&pattern) {
            body = heading.replace(&body, "").trim().to_string();
        }
    }

    body = MERMAID_BLOCK.replace_all(&body, "").trim().to_string();
    body = RELATED_LINKS_BLOCK.replace_all(&body, "").trim().to_string();
    body = FOOTNOTES_HEADER.replace_all(&body, "").trim().to_string();
    LOOSE_BLANKS.replace_all(&body, "\n\n").trim().to_string()
}

/// Build the generated sections appended to a cleaned note body
///
/// Node names that match a source note basename (case-insensitive)
/// become sorted `- [[Name]]` wikilinks; a non-empty diagram becomes a
/// fenced Mermaid block. Either section is omitted when empty.
pub fn generate_body_content(
    mermaid: &str,
    node_names: &BTreeSet<String>,
    source_basenames: &BTreeSet<String>,
) -> String {
    let mut appended = String::new();

    let links: BTreeSet<String> = node_names
        .iter()
        .filter(|name| source_basenames.contains(&name.to_lowercase()))
        .map(|name| format!("- [[{name}]]"))
        .collect();
    if !links.is_empty() {
        let list = links.into_iter().collect::<Vec<_>>().join("\n");
        appended.push_str(&format!("\n\n## Related Links\n\n{list}\n"));
    }

    if !mermaid.is_empty() {
        appended.push_str(&format!(
            "\n\n## Semantic Connections\n\n```mermaid\n{mermaid}\n```"
        ));
    }

    appended
}

/// Refresh a note's front matter after traversal
///
/// Sets `entities` to the sorted URIs resolved from the diagram's node
/// names. When the page itself is a declared `rdfs:Class`, its parent
/// classes join the list. Sets `draft` and drops the legacy `related`
/// and `semantic_links` keys. All other keys keep their order.
pub fn update_frontmatter(
    frontmatter: &mut Frontmatter,
    store: &TripleStore,
    node_names: &BTreeSet<String>,
    page_uri: &Term,
    draft: bool,
    base_iri: &str,
) {
    let mut entities: BTreeSet<String> = node_names
        .iter()
        .filter_map(|name| {
            resolve_entity(name, store, base_iri)
                .as_iri()
                .map(str::to_string)
        })
        .collect();

    let rdf_type = Term::iri(rdf::TYPE);
    let rdfs_class = Term::iri(rdfs::CLASS);
    if store.contains(page_uri, &rdf_type, &rdfs_class) {
        let sub_class_of = Term::iri(rdfs::SUB_CLASS_OF);
        for t in store.matches(Some(page_uri), Some(&sub_class_of), None) {
            if &t.o != page_uri {
                if let Some(iri) = t.o.as_iri() {
                    entities.insert(iri.to_string());
                }
            }
        }
    }

    frontmatter.set(
        "entities",
        Value::Sequence(entities.into_iter().map(Value::String).collect()),
    );
    frontmatter.set("draft", Value::Bool(draft));
    frontmatter.remove("related");
    frontmatter.remove("semantic_links");
}
