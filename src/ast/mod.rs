//! Syntax trees for type notation and queries
//!
//! These mirror the text as written. Nothing here is checked for formation:
//! elaboration turns a [`TypeExpr`] into a canonical descriptor later, and only
//! when a query actually needs it.

use crate::common::Span;
use crate::types::{Qualifiers, ScalarKind};

/// A complete type: specifiers plus an abstract declarator
#[derive(Debug, Clone, PartialEq)]
pub struct TypeExpr {
    pub spec: DeclSpec,
    pub declarator: Declarator,
    pub span: Span,
}

/// Declaration specifiers, e.g. `const unsigned long`
#[derive(Debug, Clone, PartialEq)]
pub struct DeclSpec {
    pub base: BaseSpec,
    pub quals: Qualifiers,
    pub span: Span,
}

/// Base type named by the specifiers
#[derive(Debug, Clone, PartialEq)]
pub enum BaseSpec {
    Void,
    NullPointer,
    Scalar(ScalarKind),
    /// Plain identifier, resolved in the universe
    Named(String),
    Class(String),
    Union(String),
    Enum {
        name: String,
        scoped: bool,
        underlying: Option<ScalarKind>,
    },
}

/// Abstract declarator: `ptr-op* [( declarator )] suffix*`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Declarator {
    pub ops: Vec<PtrOp>,
    pub nested: Option<Box<Declarator>>,
    pub suffixes: Vec<Suffix>,
}

impl Declarator {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.nested.is_none() && self.suffixes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PtrOp {
    pub kind: PtrOpKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PtrOpKind {
    Pointer(Qualifiers),
    LvalueRef,
    RvalueRef,
    /// `C::*` with the qualifiers that follow it
    Member { class: String, quals: Qualifiers },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suffix {
    pub kind: SuffixKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuffixKind {
    Array(Option<usize>),
    Function { params: Vec<TypeExpr>, variadic: bool },
}

/// Query expression
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpr {
    Bool {
        value: bool,
        span: Span,
    },
    Size {
        value: usize,
        span: Span,
    },
    Type(TypeExpr),
    /// `op<args...>`
    Call {
        op: String,
        op_span: Span,
        args: Vec<QueryExpr>,
        span: Span,
    },
}

impl QueryExpr {
    pub fn span(&self) -> Span {
        match self {
            QueryExpr::Bool { span, .. }
            | QueryExpr::Size { span, .. }
            | QueryExpr::Call { span, .. } => *span,
            QueryExpr::Type(ty) => ty.span,
        }
    }

    /// Short description used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            QueryExpr::Bool { .. } => "a boolean",
            QueryExpr::Size { .. } => "a size",
            QueryExpr::Type(_) => "a type",
            QueryExpr::Call { .. } => "a query",
        }
    }
}
