//! Mermaid syntax generation from a traversal outcome
//!
//! Emits a `graph TD` block: the start node first (carrying the
//! `current-page-node` class), remaining nodes sorted by diagram id, then
//! sorted edge lines. Sorting is a correctness requirement: the emitted
//! text must be byte-identical across runs for identical inputs.

use crate::traverse::TraversalOutcome;

/// Render a traversal outcome as Mermaid `graph TD` syntax
pub fn render_mermaid(outcome: &TraversalOutcome) -> String {
    let mut lines = vec!["graph TD".to_string()];

    let mut node_lines: Vec<String> = Vec::new();
    for (key, node) in &outcome.nodes {
        if *key == outcome.start_key {
            continue;
        }
        node_lines.push(format!("  {}[\"{}{}\"]", node.id, node.label, node.props));
    }
    node_lines.sort();

    if let Some(start) = outcome.nodes.get(&outcome.start_key) {
        lines.push(format!(
            "  {}[\"{}{}\"]:::current-page-node",
            start.id, start.label, start.props
        ));
    }
    lines.extend(node_lines);

    for (source, predicate, target) in &outcome.edges {
        lines.push(format!("  {source}-->|\" {predicate} \"|{target}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::PredicateSets;
    use crate::traverse::traverse;
    use notegraph_graph::Term;
    use notegraph_turtle::parse_str;

    #[test]
    fn test_render_shape() {
        let store = parse_str(
            r#"
            @prefix ex: <https://example.org/kb/> .
            ex:ada ex:influencedBy ex:babbage .
            ex:ada ex:description "mathematician" .
            "#,
        )
        .unwrap();
        let sets = PredicateSets::classify(&store);
        let start = Term::iri("https://example.org/kb/ada");
        let outcome = traverse(&store, &sets, &start, "Ada Lovelace", true, 1);
        let text = render_mermaid(&outcome);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "graph TD");
        assert_eq!(
            lines[1],
            "  Ada_Lovelace[\"Ada Lovelace<br>+ description: mathematician\"]:::current-page-node"
        );
        assert_eq!(lines[2], "  babbage[\"babbage\"]");
        assert_eq!(
            lines[3],
            "  Ada_Lovelace-->|\" influencedBy \"|babbage"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_render_is_deterministic() {
        let store = parse_str(
            r#"
            @prefix ex: <https://example.org/kb/> .
            ex:a ex:drives ex:c .
            ex:a ex:drives ex:b .
            ex:b ex:delivers ex:c .
            "#,
        )
        .unwrap();
        let sets = PredicateSets::classify(&store);
        let start = Term::iri("https://example.org/kb/a");

        let first = render_mermaid(&traverse(&store, &sets, &start, "a", false, 2));
        let second = render_mermaid(&traverse(&store, &sets, &start, "a", false, 2));
        assert_eq!(first, second);
    }

    #[test]
    fn test_start_only_diagram() {
        let store = parse_str(
            r#"
            @prefix ex: <https://example.org/kb/> .
            ex:lonely a ex:Thing .
            "#,
        )
        .unwrap();
        let sets = PredicateSets::classify(&store);
        let start = Term::iri("https://example.org/kb/lonely");
        let outcome = traverse(&store, &sets, &start, "lonely", true, 1);
        let text = render_mermaid(&outcome);
        assert_eq!(
            text,
            "graph TD\n  lonely[\"lonely\"]:::current-page-node"
        );
    }
}
