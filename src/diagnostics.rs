//! Diagnostic reporting with source locations
//!
//! Front-end errors (lexing, parsing, elaboration and query evaluation) carry
//! the query text and a labelled span, rendered by miette.

use crate::common::Span;
use crate::traits::LayeringError;
use crate::types::IllFormed;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

/// Source text for error reporting
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub content: Arc<str>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Arc::from(content.into()),
        }
    }

    pub fn to_named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.name.clone(), self.content.to_string())
    }
}

/// Convert our Span to miette's SourceSpan
impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Query and notation diagnostic
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum QueryError {
    // === Lexing and parsing ===
    #[error("Invalid token")]
    #[diagnostic(code(parse::invalid_token))]
    InvalidToken {
        #[label("not part of the type notation")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected token: expected {expected}, found {found}")]
    #[diagnostic(code(parse::unexpected_token))]
    UnexpectedToken {
        expected: String,
        found: String,
        #[label("unexpected token here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Unexpected end of input: expected {expected}")]
    #[diagnostic(code(parse::unexpected_eof))]
    UnexpectedEof {
        expected: String,
        #[label("input ends here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Invalid type specifier `{words}`")]
    #[diagnostic(
        code(parse::invalid_specifier),
        help("combine at most one base type with `signed`, `unsigned`, `short` or `long`")
    )]
    InvalidSpecifier {
        words: String,
        #[label("cannot be combined")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    // === Elaboration ===
    #[error("Unknown type `{name}`")]
    #[diagnostic(
        code(elaborate::unknown_type),
        help("declare it in the universe manifest or write `class {name}`")
    )]
    UnknownName {
        name: String,
        #[label("not declared")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Ill-formed type: {reason}")]
    #[diagnostic(code(elaborate::ill_formed))]
    IllFormedType {
        reason: IllFormed,
        #[label("cannot be formed")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    // === Evaluation ===
    #[error("Unknown operation `{name}`")]
    #[diagnostic(
        code(query::unknown_operation),
        help("run `tyq predicates` for the predicate names")
    )]
    UnknownOperation {
        name: String,
        #[label("no such predicate or transformation")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("`{op}` expects {expected} arguments, found {found}")]
    #[diagnostic(code(query::arity))]
    ArityMismatch {
        op: String,
        expected: String,
        found: usize,
        #[label("wrong number of arguments")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Expected a type, found {found}")]
    #[diagnostic(code(query::expected_type))]
    ExpectedType {
        found: String,
        #[label("a type is required here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Expected a condition, found type `{found}`")]
    #[diagnostic(code(query::expected_condition))]
    ExpectedCondition {
        found: String,
        #[label("a boolean or size is required here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("Expected a size, found {found}")]
    #[diagnostic(code(query::expected_size))]
    ExpectedSize {
        found: String,
        #[label("a dimension index is required here")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },

    #[error(transparent)]
    #[diagnostic(code(query::catalog))]
    Catalog(#[from] LayeringError),

    #[error("Constraint not satisfied")]
    #[diagnostic(
        code(query::disabled),
        help("the gate has no type when its condition is false")
    )]
    Disabled {
        #[label("condition is false")]
        span: SourceSpan,
        #[source_code]
        src: NamedSource<String>,
    },
}
