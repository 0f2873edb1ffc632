//! Elaboration of type notation into canonical descriptors
//!
//! Declarators bind inside out: pointer operators apply to the specifier type
//! left to right, suffixes apply right to left on top of that, and the result
//! becomes the base of the parenthesized inner declarator. Every formation
//! step goes through the fallible constructors, so an ill-formed type is
//! reported at the operator that could not be applied.

use crate::ast::{BaseSpec, Declarator, PtrOpKind, SuffixKind, TypeExpr};
use crate::common::Span;
use crate::diagnostics::{QueryError, SourceFile};
use crate::types::{IllFormed, ScalarKind, Type, TypeKind};
use crate::universe::Universe;

type Result<T> = std::result::Result<T, QueryError>;

pub struct Elaborator<'a> {
    universe: &'a Universe,
    source: &'a SourceFile,
}

impl<'a> Elaborator<'a> {
    pub fn new(universe: &'a Universe, source: &'a SourceFile) -> Self {
        Self { universe, source }
    }

    pub fn elaborate(&self, expr: &TypeExpr) -> Result<Type> {
        let base = self.base(&expr.spec.base, expr.spec.span)?;
        let base = base.qualified(expr.spec.quals);
        self.apply(&expr.declarator, base)
    }

    fn base(&self, spec: &BaseSpec, span: Span) -> Result<Type> {
        Ok(match spec {
            BaseSpec::Void => Type::void(),
            BaseSpec::NullPointer => Type::null_pointer(),
            BaseSpec::Scalar(kind) => Type::scalar(*kind),
            BaseSpec::Named(name) => self
                .universe
                .lookup(name)
                .cloned()
                .ok_or_else(|| self.unknown(name, span))?,
            // elaborated specifiers name a declared type of that kind, or
            // introduce one on the spot
            BaseSpec::Class(name) => self.declared_or(name, span, |k| matches!(k, TypeKind::Class(_)), || {
                Type::class(name.as_str())
            })?,
            BaseSpec::Union(name) => self.declared_or(name, span, |k| matches!(k, TypeKind::Union(_)), || {
                Type::union(name.as_str())
            })?,
            BaseSpec::Enum {
                name,
                scoped,
                underlying,
            } => {
                if let Some(declared) = self.universe.lookup(name) {
                    match declared.kind() {
                        TypeKind::Enum(decl)
                            if decl.scoped == *scoped
                                && underlying.is_none_or(|u| u == decl.underlying) =>
                        {
                            declared.clone()
                        }
                        _ => return Err(self.ill_formed(IllFormed::NotAnEnum(declared.clone()), span)),
                    }
                } else {
                    let underlying = underlying.unwrap_or(ScalarKind::Int);
                    if !underlying.is_integral() {
                        return Err(self.ill_formed(IllFormed::NotIntegral(Type::scalar(underlying)), span));
                    }
                    Type::enumeration(name.as_str(), *scoped, underlying)
                }
            }
        })
    }

    fn declared_or(
        &self,
        name: &str,
        span: Span,
        kind_matches: impl Fn(&TypeKind) -> bool,
        introduce: impl FnOnce() -> Type,
    ) -> Result<Type> {
        match self.universe.lookup(name) {
            Some(declared) if kind_matches(declared.kind()) => Ok(declared.clone()),
            Some(declared) => Err(self.ill_formed(IllFormed::NotAClass(declared.clone()), span)),
            None => Ok(introduce()),
        }
    }

    fn apply(&self, declarator: &Declarator, base: Type) -> Result<Type> {
        let mut ty = base;

        for op in &declarator.ops {
            let formed = match &op.kind {
                PtrOpKind::Pointer(quals) => ty.pointer_to().map(|p| p.qualified(*quals)),
                PtrOpKind::LvalueRef => ty.lvalue_ref_to(),
                PtrOpKind::RvalueRef => ty.rvalue_ref_to(),
                PtrOpKind::Member { class, quals } => {
                    let class_ty = self
                        .universe
                        .lookup(class)
                        .ok_or_else(|| self.unknown(class, op.span))?;
                    Type::member_pointer(class_ty, &ty).map(|p| p.qualified(*quals))
                }
            };
            ty = formed.map_err(|reason| self.ill_formed(reason, op.span))?;
        }

        for suffix in declarator.suffixes.iter().rev() {
            let formed = match &suffix.kind {
                SuffixKind::Array(bound) => ty.array_of(*bound),
                SuffixKind::Function { params, variadic } => {
                    let params = params
                        .iter()
                        .map(|p| self.elaborate(p))
                        .collect::<Result<Vec<_>>>()?;
                    Type::function(ty, params, *variadic)
                }
            };
            ty = formed.map_err(|reason| self.ill_formed(reason, suffix.span))?;
        }

        match &declarator.nested {
            Some(inner) => self.apply(inner, ty),
            None => Ok(ty),
        }
    }

    fn unknown(&self, name: &str, span: Span) -> QueryError {
        QueryError::UnknownName {
            name: name.to_string(),
            span: span.into(),
            src: self.source.to_named_source(),
        }
    }

    fn ill_formed(&self, reason: IllFormed, span: Span) -> QueryError {
        tracing::debug!(%reason, "ill-formed type in notation");
        QueryError::IllFormedType {
            reason,
            span: span.into(),
            src: self.source.to_named_source(),
        }
    }
}
