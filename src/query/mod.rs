//! Query front end
//!
//! Lexes, parses and evaluates queries such as `is_object<int[3]>` or
//! `remove_cv<const volatile int>` against a [`Universe`].

pub mod elaborate;
pub mod eval;

pub use elaborate::Elaborator;
pub use eval::{Evaluator, Value};

use crate::diagnostics::{QueryError, SourceFile};
use crate::lexer::lex;
use crate::parser;
use crate::traits::Catalog;
use crate::types::Type;
use crate::universe::Universe;

/// Parse and form a type written in declarator notation
pub fn parse_type(text: &str, universe: &Universe) -> Result<Type, QueryError> {
    let source = SourceFile::new("<type>", text);
    let tokens = lex(&source)?;
    let expr = parser::parse_type(&tokens, &source)?;
    Elaborator::new(universe, &source).elaborate(&expr)
}

/// Evaluate one query with the standard predicate catalog
pub fn evaluate(text: &str, universe: &Universe) -> Result<Value, QueryError> {
    Session::new(universe)?.evaluate(text)
}

/// A universe paired with a validated predicate catalog
#[derive(Debug, Clone)]
pub struct Session<'u> {
    universe: &'u Universe,
    catalog: Catalog,
}

impl<'u> Session<'u> {
    pub fn new(universe: &'u Universe) -> Result<Self, QueryError> {
        Ok(Self {
            universe,
            catalog: Catalog::standard()?,
        })
    }

    pub fn universe(&self) -> &Universe {
        self.universe
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn parse_type(&self, text: &str) -> Result<Type, QueryError> {
        parse_type(text, self.universe)
    }

    pub fn evaluate(&self, text: &str) -> Result<Value, QueryError> {
        let source = SourceFile::new("<query>", text);
        let tokens = lex(&source)?;
        let query = parser::parse_query(&tokens, &source)?;
        tracing::debug!(query = text, "evaluating");
        Evaluator::new(self.universe, &self.catalog, &source).eval(&query)
    }
}
