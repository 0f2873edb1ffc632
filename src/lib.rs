//! tyq: structural type classification and transformation
//!
//! A type-trait engine for a C++-like type system:
//! - Canonical, immutable type descriptors with structural equality
//! - Primitive and strictly layered composite predicates
//! - Total transformations backed by a validity probe
//! - Short-circuiting, value-carrying logical combinators
//! - A constraint gate for predicate-driven selection
//!
//! # Architecture
//!
//! ```text
//! Query → Lexer → Parser → Elaboration → Type ─┬→ Predicates
//!                                              └→ Transformations
//! ```
//!
//! # Example
//!
//! ```
//! use tyq::{evaluate, Universe, Value};
//!
//! let universe = Universe::empty();
//! let value = evaluate("remove_cv<const volatile int>", &universe).unwrap();
//! assert_eq!(value.to_string(), "int");
//! ```

pub mod ast;
pub mod common;
pub mod diagnostics;
pub mod gate;
pub mod lexer;
pub mod logic;
pub mod parser;
pub mod probe;
pub mod query;
pub mod report;
pub mod traits;
pub mod transform;
pub mod types;
pub mod universe;

// Re-export diagnostics for convenience
pub use diagnostics::{QueryError, SourceFile};

// Re-exports for convenience
pub use query::{evaluate, parse_type, Session, Value};
pub use types::{IllFormed, Qualifiers, ScalarKind, Type, TypeKind};
pub use universe::{Universe, UniverseBuilder, UniverseError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
