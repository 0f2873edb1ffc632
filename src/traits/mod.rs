//! Predicate surface
//!
//! A flat namespace of pure boolean queries over descriptors, layered as:
//! - Primary type categories (decided from the descriptor kind)
//! - Composite type categories (formulas over primary categories)
//! - Type properties and relations
//!
//! The catalog records the layering and looks predicates up by name.

pub mod catalog;
pub mod composite;
pub mod primary;
pub mod properties;

pub use catalog::{Catalog, Category, LayeringError, Predicate, PredicateDef};
pub use composite::*;
pub use primary::*;
pub use properties::*;
