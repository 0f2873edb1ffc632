//! Query evaluation
//!
//! Arguments are evaluated on demand. In particular the operands of
//! `conjunction`, `disjunction` and the branches of `conditional` are only
//! elaborated when they run, so an operand after the deciding one may name a
//! type that cannot be formed.

use super::elaborate::Elaborator;
use crate::ast::QueryExpr;
use crate::common::Span;
use crate::diagnostics::{QueryError, SourceFile};
use crate::logic::{try_conjunction, try_disjunction, Decision, Truth};
use crate::traits::{is_any_of, is_same, Catalog};
use crate::transform;
use crate::types::{IllFormed, Type};
use crate::universe::Universe;
use std::fmt;

type Result<T> = std::result::Result<T, QueryError>;

/// Result of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Size(usize),
    Type(Type),
}

impl Value {
    fn describe(&self) -> String {
        match self {
            Value::Bool(b) => format!("boolean `{b}`"),
            Value::Size(n) => format!("size `{n}`"),
            Value::Type(ty) => format!("type `{ty}`"),
        }
    }
}

impl Truth for Value {
    /// Sizes count as true when non-zero
    fn truth(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Size(n) => *n != 0,
            Value::Type(_) => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Size(n) => write!(f, "{n}"),
            Value::Type(ty) => write!(f, "{ty}"),
        }
    }
}

pub struct Evaluator<'a> {
    catalog: &'a Catalog,
    source: &'a SourceFile,
    elaborator: Elaborator<'a>,
}

impl<'a> Evaluator<'a> {
    pub fn new(universe: &'a Universe, catalog: &'a Catalog, source: &'a SourceFile) -> Self {
        Self {
            catalog,
            source,
            elaborator: Elaborator::new(universe, source),
        }
    }

    pub fn eval(&self, expr: &QueryExpr) -> Result<Value> {
        match expr {
            QueryExpr::Bool { value, .. } => Ok(Value::Bool(*value)),
            QueryExpr::Size { value, .. } => Ok(Value::Size(*value)),
            QueryExpr::Type(ty) => Ok(Value::Type(self.elaborator.elaborate(ty)?)),
            QueryExpr::Call {
                op,
                op_span,
                args,
                span,
            } => {
                let value = self.call(op, *op_span, args, *span)?;
                tracing::trace!(op = op.as_str(), %value, "evaluated");
                Ok(value)
            }
        }
    }

    fn call(&self, op: &str, op_span: Span, args: &[QueryExpr], span: Span) -> Result<Value> {
        // `remove_cv_t` and `is_void_v` name the same operations
        let name = op
            .strip_suffix("_t")
            .or_else(|| op.strip_suffix("_v"))
            .unwrap_or(op);

        match name {
            "conjunction" | "disjunction" => {
                let operands = args.iter().map(|arg| move || self.condition(arg));
                let decision = if name == "conjunction" {
                    try_conjunction(operands)?
                } else {
                    try_disjunction(operands)?
                };
                if let Some(index) = decision.index() {
                    tracing::debug!(op = name, index, "decided by operand");
                }
                Ok(match decision {
                    Decision::Operand { value, .. } => value,
                    Decision::Vacuous(b) => Value::Bool(b),
                })
            }
            "negation" => {
                let [operand] = self.arity::<1>(name, args, span)?;
                Ok(Value::Bool(!self.condition(operand)?.truth()))
            }
            "conditional" => {
                let [condition, if_true, if_false] = self.arity::<3>(name, args, span)?;
                let chosen = transform::conditional(
                    self.condition(condition)?.truth(),
                    if_true,
                    if_false,
                );
                Ok(Value::Type(self.ty(chosen)?))
            }
            "enable_if" => {
                let (condition, payload) = match args {
                    [condition] => (condition, None),
                    [condition, payload] => (condition, Some(payload)),
                    _ => return Err(self.arity_mismatch(name, "1 or 2", args.len(), span)),
                };
                let enabled = self.condition(condition)?.truth();
                let payload = match payload {
                    Some(payload) if enabled => self.ty(payload)?,
                    _ => Type::void(),
                };
                crate::gate::enable_if(enabled, payload)
                    .map(Value::Type)
                    .map_err(|_: IllFormed| QueryError::Disabled {
                        span: condition.span().into(),
                        src: self.source.to_named_source(),
                    })
            }
            "is_same" => {
                let [a, b] = self.arity::<2>(name, args, span)?;
                Ok(Value::Bool(is_same(&self.ty(a)?, &self.ty(b)?)))
            }
            "is_any_of" => {
                let Some((subject, candidates)) = args.split_first() else {
                    return Err(self.arity_mismatch(name, "at least 1", 0, span));
                };
                let subject = self.ty(subject)?;
                let candidates = candidates
                    .iter()
                    .map(|c| self.ty(c))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Bool(is_any_of(&subject, &candidates)))
            }
            "rank" => {
                let [ty] = self.arity::<1>(name, args, span)?;
                Ok(Value::Size(transform::rank(&self.ty(ty)?)))
            }
            "extent" => {
                let (ty, index) = match args {
                    [ty] => (self.ty(ty)?, 0),
                    [ty, index] => (self.ty(ty)?, self.size(index)?),
                    _ => return Err(self.arity_mismatch(name, "1 or 2", args.len(), span)),
                };
                Ok(Value::Size(transform::extent(&ty, index)))
            }
            _ => {
                if let Some(predicate) = self.catalog.get(name) {
                    let [ty] = self.arity::<1>(name, args, span)?;
                    return Ok(Value::Bool(predicate.evaluate(&self.ty(ty)?)));
                }
                if let Some(rewrite) = transform::lookup(name) {
                    let [ty] = self.arity::<1>(name, args, span)?;
                    return Ok(Value::Type(rewrite(&self.ty(ty)?)));
                }
                Err(QueryError::UnknownOperation {
                    name: op.to_string(),
                    span: op_span.into(),
                    src: self.source.to_named_source(),
                })
            }
        }
    }

    fn arity<'q, const N: usize>(
        &self,
        op: &str,
        args: &'q [QueryExpr],
        span: Span,
    ) -> Result<&'q [QueryExpr; N]> {
        args.try_into()
            .map_err(|_| self.arity_mismatch(op, &N.to_string(), args.len(), span))
    }

    fn arity_mismatch(&self, op: &str, expected: &str, found: usize, span: Span) -> QueryError {
        QueryError::ArityMismatch {
            op: op.to_string(),
            expected: expected.to_string(),
            found,
            span: span.into(),
            src: self.source.to_named_source(),
        }
    }

    fn ty(&self, arg: &QueryExpr) -> Result<Type> {
        match self.eval(arg)? {
            Value::Type(ty) => Ok(ty),
            other => Err(QueryError::ExpectedType {
                found: other.describe(),
                span: arg.span().into(),
                src: self.source.to_named_source(),
            }),
        }
    }

    fn condition(&self, arg: &QueryExpr) -> Result<Value> {
        match self.eval(arg)? {
            Value::Type(ty) => Err(QueryError::ExpectedCondition {
                found: ty.to_string(),
                span: arg.span().into(),
                src: self.source.to_named_source(),
            }),
            value => Ok(value),
        }
    }

    fn size(&self, arg: &QueryExpr) -> Result<usize> {
        match self.eval(arg)? {
            Value::Size(n) => Ok(n),
            other => Err(QueryError::ExpectedSize {
                found: other.describe(),
                span: arg.span().into(),
                src: self.source.to_named_source(),
            }),
        }
    }
}
