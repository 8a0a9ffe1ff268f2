//! Tokenizer for the Turtle subset the pipeline consumes
//!
//! Handles directives, IRIs, prefixed names, blank node labels, string
//! literals (short and long form) with language tags and datatypes,
//! numbers, booleans, punctuation, and `#` comments.

use crate::error::{Result, TurtleError};

/// Token kinds produced by the lexer
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `<...>` IRI reference (unresolved, may be relative)
    Iri(String),
    /// Prefixed name `prefix:local` (either part may be empty)
    PrefixedName { prefix: String, local: String },
    /// Blank node label (without the `_:` prefix)
    BlankNodeLabel(String),
    /// String literal with escapes already applied
    StringLiteral(String),
    /// `@lang` tag (without the `@`)
    LangTag(String),
    /// `^^` datatype marker
    DatatypeMarker,
    /// Integer literal
    Integer(i64),
    /// Double / decimal literal
    Double(f64),
    /// Boolean literal
    Boolean(bool),
    /// `a` keyword (rdf:type shorthand)
    KwA,
    /// `@prefix` directive
    KwPrefix,
    /// `@base` directive
    KwBase,
    /// SPARQL-style `PREFIX`
    KwSparqlPrefix,
    /// SPARQL-style `BASE`
    KwSparqlBase,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// End of input
    Eof,
}

/// A token with its byte position in the input
#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
}

/// Tokenize a Turtle document
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token { kind, start });
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while let Some(c) = self.peek() {
            let start = self.pos;
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.bump();
                }
                '#' => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                '<' => self.lex_iri(start)?,
                '"' => self.lex_string(start)?,
                '@' => self.lex_at_word(start)?,
                '^' => {
                    if self.peek_at(1) == Some('^') {
                        self.pos += 2;
                        self.push(TokenKind::DatatypeMarker, start);
                    } else {
                        return Err(TurtleError::lexer(start, "expected '^^'"));
                    }
                }
                '.' => {
                    // A dot followed by a digit starts a decimal number
                    if self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
                        self.lex_number(start)?;
                    } else {
                        self.bump();
                        self.push(TokenKind::Dot, start);
                    }
                }
                ';' => {
                    self.bump();
                    self.push(TokenKind::Semicolon, start);
                }
                ',' => {
                    self.bump();
                    self.push(TokenKind::Comma, start);
                }
                '_' if self.peek_at(1) == Some(':') => self.lex_blank_node(start)?,
                c if c.is_ascii_digit() || c == '+' || c == '-' => self.lex_number(start)?,
                _ => self.lex_word(start)?,
            }
        }
        let end = self.pos;
        self.push(TokenKind::Eof, end);
        Ok(self.tokens)
    }

    fn lex_iri(&mut self, start: usize) -> Result<()> {
        self.bump(); // consume '<'
        let mut iri = String::new();
        loop {
            match self.bump() {
                Some('>') => break,
                Some('\n') | None => {
                    return Err(TurtleError::lexer(start, "unterminated IRI"));
                }
                Some(c) => iri.push(c),
            }
        }
        self.push(TokenKind::Iri(iri), start);
        Ok(())
    }

    fn lex_string(&mut self, start: usize) -> Result<()> {
        let long = self.peek_at(1) == Some('"') && self.peek_at(2) == Some('"');
        if long {
            self.pos += 3;
        } else {
            self.bump();
        }

        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(TurtleError::lexer(start, "unterminated string literal")),
                Some('"') => {
                    if !long {
                        break;
                    }
                    if self.peek() == Some('"') && self.peek_at(1) == Some('"') {
                        self.pos += 2;
                        break;
                    }
                    value.push('"');
                }
                Some('\\') => value.push(self.lex_escape(start)?),
                Some('\n') if !long => {
                    return Err(TurtleError::lexer(start, "newline in string literal"));
                }
                Some(c) => value.push(c),
            }
        }
        self.push(TokenKind::StringLiteral(value), start);
        Ok(())
    }

    fn lex_escape(&mut self, start: usize) -> Result<char> {
        match self.bump() {
            Some('t') => Ok('\t'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('"') => Ok('"'),
            Some('\'') => Ok('\''),
            Some('\\') => Ok('\\'),
            Some('u') => self.lex_unicode_escape(4),
            Some('U') => self.lex_unicode_escape(8),
            Some(c) => Err(TurtleError::InvalidEscape(format!("\\{c}"))),
            None => Err(TurtleError::lexer(start, "dangling escape at end of input")),
        }
    }

    fn lex_unicode_escape(&mut self, len: usize) -> Result<char> {
        let mut hex = String::with_capacity(len);
        for _ in 0..len {
            match self.bump() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                _ => return Err(TurtleError::InvalidEscape(format!("\\u{hex}"))),
            }
        }
        let code = u32::from_str_radix(&hex, 16)
            .map_err(|_| TurtleError::InvalidEscape(hex.clone()))?;
        char::from_u32(code).ok_or(TurtleError::InvalidEscape(hex))
    }

    fn lex_at_word(&mut self, start: usize) -> Result<()> {
        self.bump(); // consume '@'
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '-' {
                word.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match word.as_str() {
            "prefix" => self.push(TokenKind::KwPrefix, start),
            "base" => self.push(TokenKind::KwBase, start),
            "" => return Err(TurtleError::lexer(start, "bare '@'")),
            _ => self.push(TokenKind::LangTag(word), start),
        }
        Ok(())
    }

    fn lex_blank_node(&mut self, start: usize) -> Result<()> {
        self.pos += 2; // consume '_:'
        let mut label = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                label.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if label.is_empty() {
            return Err(TurtleError::lexer(start, "empty blank node label"));
        }
        self.push(TokenKind::BlankNodeLabel(label), start);
        Ok(())
    }

    fn lex_number(&mut self, start: usize) -> Result<()> {
        let mut text = String::new();
        if matches!(self.peek(), Some('+') | Some('-')) {
            text.push(self.bump().unwrap());
        }
        let mut is_double = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {
                    text.push(c);
                    self.bump();
                }
                // A '.' is part of the number only when a digit follows;
                // otherwise it is the statement terminator.
                '.' if self.peek_at(1).is_some_and(|n| n.is_ascii_digit()) => {
                    is_double = true;
                    text.push(c);
                    self.bump();
                }
                'e' | 'E' => {
                    is_double = true;
                    text.push(c);
                    self.bump();
                    if matches!(self.peek(), Some('+') | Some('-')) {
                        text.push(self.bump().unwrap());
                    }
                }
                _ => break,
            }
        }
        if is_double {
            let value: f64 = text
                .parse()
                .map_err(|_| TurtleError::lexer(start, format!("invalid double: {text}")))?;
            self.push(TokenKind::Double(value), start);
        } else {
            let value: i64 = text
                .parse()
                .map_err(|_| TurtleError::lexer(start, format!("invalid integer: {text}")))?;
            self.push(TokenKind::Integer(value), start);
        }
        Ok(())
    }

    fn lex_word(&mut self, start: usize) -> Result<()> {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, ';' | ',' | '"' | '<' | '>' | '#' | '^') {
                break;
            }
            // A '.' ends the word unless it is internal to a local name
            if c == '.' {
                let next = self.peek_at(1);
                let internal = next.is_some_and(|n| n.is_ascii_alphanumeric() || n == '_');
                if !internal {
                    break;
                }
            }
            word.push(c);
            self.bump();
        }

        match word.as_str() {
            "" => Err(TurtleError::lexer(start, format!("unexpected character: {:?}", self.peek()))),
            "a" => {
                self.push(TokenKind::KwA, start);
                Ok(())
            }
            "true" => {
                self.push(TokenKind::Boolean(true), start);
                Ok(())
            }
            "false" => {
                self.push(TokenKind::Boolean(false), start);
                Ok(())
            }
            "PREFIX" => {
                self.push(TokenKind::KwSparqlPrefix, start);
                Ok(())
            }
            "BASE" => {
                self.push(TokenKind::KwSparqlBase, start);
                Ok(())
            }
            _ => match word.split_once(':') {
                Some((prefix, local)) => {
                    self.push(
                        TokenKind::PrefixedName {
                            prefix: prefix.to_string(),
                            local: local.to_string(),
                        },
                        start,
                    );
                    Ok(())
                }
                None => Err(TurtleError::lexer(
                    start,
                    format!("expected prefixed name, found: {word}"),
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_iri_and_punctuation() {
        let toks = kinds("<http://example.org/a> <http://example.org/p> <http://example.org/b> .");
        assert_eq!(toks.len(), 5);
        assert_eq!(toks[0], TokenKind::Iri("http://example.org/a".into()));
        assert_eq!(toks[3], TokenKind::Dot);
        assert_eq!(toks[4], TokenKind::Eof);
    }

    #[test]
    fn test_prefixed_names_and_a() {
        let toks = kinds("ex:alice a ex:Person .");
        assert_eq!(
            toks[0],
            TokenKind::PrefixedName {
                prefix: "ex".into(),
                local: "alice".into()
            }
        );
        assert_eq!(toks[1], TokenKind::KwA);
    }

    #[test]
    fn test_prefix_directive() {
        let toks = kinds("@prefix ex: <http://example.org/> .");
        assert_eq!(toks[0], TokenKind::KwPrefix);
        assert_eq!(
            toks[1],
            TokenKind::PrefixedName {
                prefix: "ex".into(),
                local: "".into()
            }
        );
    }

    #[test]
    fn test_string_with_lang_and_datatype() {
        let toks = kinds("ex:a ex:label \"Ada\"@en ; ex:born \"1815\"^^xsd:gYear .");
        assert!(toks.contains(&TokenKind::StringLiteral("Ada".into())));
        assert!(toks.contains(&TokenKind::LangTag("en".into())));
        assert!(toks.contains(&TokenKind::DatatypeMarker));
    }

    #[test]
    fn test_string_escapes() {
        let toks = kinds(r#"ex:a ex:p "line\nbreak \"quoted\"" ."#);
        assert!(toks.contains(&TokenKind::StringLiteral("line\nbreak \"quoted\"".into())));
    }

    #[test]
    fn test_long_string() {
        let toks = kinds("ex:a ex:p \"\"\"multi\nline \"quoted\" text\"\"\" .");
        assert!(toks.contains(&TokenKind::StringLiteral("multi\nline \"quoted\" text".into())));
    }

    #[test]
    fn test_numbers() {
        let toks = kinds("ex:a ex:n 42 ; ex:d 3.14 ; ex:e 1e3 .");
        assert!(toks.contains(&TokenKind::Integer(42)));
        assert!(toks.contains(&TokenKind::Double(3.14)));
        assert!(toks.contains(&TokenKind::Double(1000.0)));
    }

    #[test]
    fn test_trailing_dot_after_prefixed_name() {
        let toks = kinds("ex:a ex:p ex:b.c .");
        // "b.c" keeps its internal dot; the standalone dot terminates
        assert!(toks.contains(&TokenKind::PrefixedName {
            prefix: "ex".into(),
            local: "b.c".into()
        }));
        assert_eq!(toks.iter().filter(|t| **t == TokenKind::Dot).count(), 1);
    }

    #[test]
    fn test_comments_ignored() {
        let toks = kinds("# header comment\nex:a ex:p ex:b . # trailing\n");
        assert_eq!(toks.iter().filter(|t| **t == TokenKind::Dot).count(), 1);
    }

    #[test]
    fn test_blank_node_label() {
        let toks = kinds("_:b0 ex:p ex:b .");
        assert_eq!(toks[0], TokenKind::BlankNodeLabel("b0".into()));
    }

    #[test]
    fn test_unterminated_string_errors() {
        assert!(tokenize("ex:a ex:p \"oops").is_err());
    }
}
