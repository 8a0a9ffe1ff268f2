//! Turtle parser emitting into a [`TripleStore`]
//!
//! Recursive-descent over the token stream. Supports `@prefix`/`@base`
//! (and SPARQL-style `PREFIX`/`BASE`), the `a` keyword, predicate-object
//! lists with `;` and `,`, and literals with language tags or datatypes.

use std::collections::HashMap;

use notegraph_graph::{Datatype, Term, TripleStore};
use notegraph_vocab::rdf;

use crate::error::{Result, TurtleError};
use crate::lex::{tokenize, Token, TokenKind};

/// Parse a Turtle document into an existing store
pub fn parse(input: &str, store: &mut TripleStore) -> Result<()> {
    Parser::new(input, store)?.parse()
}

/// Parse a Turtle document into a fresh store
pub fn parse_str(input: &str) -> Result<TripleStore> {
    let mut store = TripleStore::new();
    parse(input, &mut store)?;
    Ok(store)
}

/// Turtle parser state
struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    store: &'a mut TripleStore,
    /// Prefix mappings (prefix -> namespace IRI)
    prefixes: HashMap<String, String>,
    /// Base IRI for relative IRI resolution
    base: Option<String>,
}

impl<'a> Parser<'a> {
    fn new(input: &str, store: &'a mut TripleStore) -> Result<Self> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            store,
            prefixes: HashMap::new(),
            base: None,
        })
    }

    fn parse(mut self) -> Result<()> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> &Token {
        let token = &self.tokens[self.pos];
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<&Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(TurtleError::parse(
                self.current().start,
                format!("expected {:?}, found {:?}", kind, self.current().kind),
            ))
        }
    }

    fn parse_statement(&mut self) -> Result<()> {
        match &self.current().kind {
            TokenKind::KwPrefix | TokenKind::KwSparqlPrefix => self.parse_prefix_directive(),
            TokenKind::KwBase | TokenKind::KwSparqlBase => self.parse_base_directive(),
            TokenKind::Eof => Ok(()),
            _ => self.parse_triples(),
        }
    }

    fn parse_prefix_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlPrefix);
        self.advance(); // consume @prefix or PREFIX

        let prefix = match &self.current().kind {
            TokenKind::PrefixedName { prefix, local } if local.is_empty() => prefix.clone(),
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected prefix namespace",
                ))
            }
        };
        self.advance();

        let namespace = match &self.current().kind {
            TokenKind::Iri(iri) => self.resolve_iri(iri),
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected IRI for prefix namespace",
                ))
            }
        };
        self.advance();

        self.prefixes.insert(prefix, namespace);

        // Trailing dot is required for @prefix, absent for PREFIX
        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    fn parse_base_directive(&mut self) -> Result<()> {
        let is_sparql_style = matches!(self.current().kind, TokenKind::KwSparqlBase);
        self.advance(); // consume @base or BASE

        let base_iri = match &self.current().kind {
            TokenKind::Iri(iri) => iri.clone(),
            _ => {
                return Err(TurtleError::parse(
                    self.current().start,
                    "expected IRI for base",
                ))
            }
        };
        self.advance();
        self.base = Some(base_iri);

        if !is_sparql_style {
            self.expect(&TokenKind::Dot)?;
        }
        Ok(())
    }

    fn parse_triples(&mut self) -> Result<()> {
        let subject = self.parse_subject()?;
        self.parse_predicate_object_list(&subject)?;
        self.expect(&TokenKind::Dot)?;
        Ok(())
    }

    fn parse_subject(&mut self) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(&iri);
                self.advance();
                Ok(Term::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(&prefix, &local)?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(Term::blank(label))
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected subject, found {:?}", self.current().kind),
            )),
        }
    }

    fn parse_predicate_object_list(&mut self, subject: &Term) -> Result<()> {
        loop {
            let predicate = self.parse_predicate()?;
            self.parse_object_list(subject, &predicate)?;

            if self.check(&TokenKind::Semicolon) {
                self.advance();
                // Turtle tolerates a trailing semicolon before the dot
                if self.check(&TokenKind::Dot) {
                    return Ok(());
                }
                continue;
            }
            return Ok(());
        }
    }

    fn parse_predicate(&mut self) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::KwA => {
                self.advance();
                Ok(Term::iri(rdf::TYPE))
            }
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(&iri);
                self.advance();
                Ok(Term::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(&prefix, &local)?;
                self.advance();
                Ok(Term::iri(iri))
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected predicate, found {:?}", self.current().kind),
            )),
        }
    }

    fn parse_object_list(&mut self, subject: &Term, predicate: &Term) -> Result<()> {
        loop {
            let object = self.parse_object()?;
            self.store
                .add(subject.clone(), predicate.clone(), object);

            if self.check(&TokenKind::Comma) {
                self.advance();
                continue;
            }
            return Ok(());
        }
    }

    fn parse_object(&mut self) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::Iri(iri) => {
                let resolved = self.resolve_iri(&iri);
                self.advance();
                Ok(Term::iri(resolved))
            }
            TokenKind::PrefixedName { prefix, local } => {
                let iri = self.expand_prefixed_name(&prefix, &local)?;
                self.advance();
                Ok(Term::iri(iri))
            }
            TokenKind::BlankNodeLabel(label) => {
                self.advance();
                Ok(Term::blank(label))
            }
            TokenKind::StringLiteral(value) => {
                self.advance();
                self.parse_literal_suffix(value)
            }
            TokenKind::Integer(i) => {
                self.advance();
                Ok(Term::integer(i))
            }
            TokenKind::Double(d) => {
                self.advance();
                Ok(Term::double(d))
            }
            TokenKind::Boolean(b) => {
                self.advance();
                Ok(Term::boolean(b))
            }
            _ => Err(TurtleError::parse(
                self.current().start,
                format!("expected object, found {:?}", self.current().kind),
            )),
        }
    }

    /// Handle the optional `@lang` or `^^datatype` after a string literal
    fn parse_literal_suffix(&mut self, value: String) -> Result<Term> {
        match self.current().kind.clone() {
            TokenKind::LangTag(lang) => {
                self.advance();
                Ok(Term::lang_string(value, lang))
            }
            TokenKind::DatatypeMarker => {
                self.advance();
                let datatype_iri = match self.current().kind.clone() {
                    TokenKind::Iri(iri) => self.resolve_iri(&iri),
                    TokenKind::PrefixedName { prefix, local } => {
                        self.expand_prefixed_name(&prefix, &local)?
                    }
                    _ => {
                        return Err(TurtleError::parse(
                            self.current().start,
                            "expected datatype IRI after '^^'",
                        ))
                    }
                };
                self.advance();
                Ok(Term::typed(value, Datatype::from_iri(datatype_iri)))
            }
            _ => Ok(Term::string(value)),
        }
    }

    /// Resolve a possibly-relative IRI against the current base
    fn resolve_iri(&self, iri: &str) -> String {
        if iri.contains("://") || self.base.is_none() {
            return iri.to_string();
        }
        let base = self.base.as_deref().unwrap_or("");
        if let Some(rest) = iri.strip_prefix('#') {
            format!("{}#{}", base.trim_end_matches('#'), rest)
        } else {
            format!("{}{}", base, iri)
        }
    }

    fn expand_prefixed_name(&self, prefix: &str, local: &str) -> Result<String> {
        let namespace = self
            .prefixes
            .get(prefix)
            .ok_or_else(|| TurtleError::UndefinedPrefix(prefix.to_string()))?;
        Ok(format!("{namespace}{local}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notegraph_graph::Triple;

    #[test]
    fn test_parse_simple() {
        let store = parse_str(
            r#"
            @prefix ex: <http://example.org/> .
            ex:alice ex:name "Alice" .
            "#,
        )
        .unwrap();
        assert_eq!(store.len(), 1);
        let t = store.iter().next().unwrap();
        assert_eq!(t.s.as_iri(), Some("http://example.org/alice"));
        assert_eq!(t.p.as_iri(), Some("http://example.org/name"));
    }

    #[test]
    fn test_parse_predicate_object_lists() {
        let store = parse_str(
            r#"
            @prefix ex: <http://example.org/> .
            @prefix foaf: <http://xmlns.com/foaf/0.1/> .

            ex:alice a foaf:Person ;
                     foaf:name "Alice" ;
                     foaf:knows ex:bob , ex:carol .
            "#,
        )
        .unwrap();
        assert_eq!(store.len(), 4);
        assert!(store.contains(
            &Term::iri("http://example.org/alice"),
            &Term::iri(rdf::TYPE),
            &Term::iri("http://xmlns.com/foaf/0.1/Person"),
        ));
        assert!(store.contains(
            &Term::iri("http://example.org/alice"),
            &Term::iri("http://xmlns.com/foaf/0.1/knows"),
            &Term::iri("http://example.org/carol"),
        ));
    }

    #[test]
    fn test_parse_typed_and_tagged_literals() {
        let store = parse_str(
            r#"
            @prefix ex: <http://example.org/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            ex:ada ex:birthDate "1815-12-10"^^xsd:date ;
                   ex:motto "poesie"@fr ;
                   ex:age 36 ;
                   ex:famous true .
            "#,
        )
        .unwrap();
        assert_eq!(store.len(), 4);
        assert!(store.contains(
            &Term::iri("http://example.org/ada"),
            &Term::iri("http://example.org/birthDate"),
            &Term::typed(
                "1815-12-10",
                Datatype::from_iri("http://www.w3.org/2001/XMLSchema#date")
            ),
        ));
        assert!(store.contains(
            &Term::iri("http://example.org/ada"),
            &Term::iri("http://example.org/motto"),
            &Term::lang_string("poesie", "fr"),
        ));
        assert!(store.contains(
            &Term::iri("http://example.org/ada"),
            &Term::iri("http://example.org/age"),
            &Term::integer(36),
        ));
    }

    #[test]
    fn test_parse_base_resolution() {
        let store = parse_str(
            r#"
            @base <http://example.org/kb/> .
            @prefix ex: <http://example.org/> .
            <alice> ex:knows <bob> .
            "#,
        )
        .unwrap();
        let t = store.iter().next().unwrap();
        assert_eq!(t.s.as_iri(), Some("http://example.org/kb/alice"));
        assert_eq!(t.o.as_iri(), Some("http://example.org/kb/bob"));
    }

    #[test]
    fn test_parse_blank_nodes() {
        let store = parse_str(
            r#"
            @prefix ex: <http://example.org/> .
            _:b0 ex:name "Anonymous" .
            ex:alice ex:knows _:b0 .
            "#,
        )
        .unwrap();
        assert_eq!(store.len(), 2);
        let triples: Vec<&Triple> = store.iter().collect();
        assert!(triples[0].s.is_blank());
    }

    #[test]
    fn test_duplicate_triples_collapse() {
        let store = parse_str(
            r#"
            @prefix ex: <http://example.org/> .
            ex:a ex:p ex:b .
            ex:a ex:p ex:b .
            "#,
        )
        .unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_undefined_prefix_errors() {
        let err = parse_str("ex:a ex:p ex:b .").unwrap_err();
        assert!(matches!(err, TurtleError::UndefinedPrefix(p) if p == "ex"));
    }

    #[test]
    fn test_missing_dot_errors() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:a ex:p ex:b
        "#;
        assert!(matches!(
            parse_str(input).unwrap_err(),
            TurtleError::Parse { .. }
        ));
    }

    #[test]
    fn test_sparql_style_prefix() {
        let store = parse_str(
            r#"
            PREFIX ex: <http://example.org/>
            ex:a ex:p ex:b .
            "#,
        )
        .unwrap();
        assert_eq!(store.len(), 1);
    }
}
