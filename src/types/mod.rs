//! Type descriptor model
//!
//! This module holds the canonical structural representation every predicate
//! and transformation works on:
//! - Core descriptors (kinds, scalar kinds, cv-qualifiers)
//! - Formation rules of the host type system
//! - Declarator notation rendering

pub mod core;
pub mod display;
pub mod form;

pub use self::core::*;
pub use form::IllFormed;
