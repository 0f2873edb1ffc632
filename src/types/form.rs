//! Formation rules of the host type system
//!
//! Every compound descriptor is built here. A shape the host type system
//! cannot express is reported as [`IllFormed`] instead of a descriptor; the
//! probe in [`crate::probe`] turns such failures into fallbacks.

use super::core::{FunctionSig, Qualifiers, Type, TypeKind};
use thiserror::Error;

/// Reason a requested type (or gated payload) cannot be formed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllFormed {
    #[error("cannot form a reference to `{0}`")]
    ReferenceTo(Type),

    #[error("cannot form a pointer to reference type `{0}`")]
    PointerToReference(Type),

    #[error("cannot form an array of `{0}`")]
    ArrayOf(Type),

    #[error("array bound must be greater than zero")]
    ZeroBound,

    #[error("function cannot return `{0}`")]
    FunctionReturning(Type),

    #[error("parameter cannot have type `{0}`")]
    InvalidParameter(Type),

    #[error("`{0}` is not a class type")]
    NotAClass(Type),

    #[error("cannot form a pointer to member of type `{0}`")]
    MemberPointerTo(Type),

    #[error("`{0}` is not an integral or enumeration type")]
    NotIntegral(Type),

    #[error("`{0}` is not an enumeration type")]
    NotAnEnum(Type),

    #[error("condition is not satisfied")]
    Disabled,
}

impl Type {
    /// `T*`
    pub fn pointer_to(&self) -> Result<Type, IllFormed> {
        match self.kind() {
            TypeKind::LvalueRef(_) | TypeKind::RvalueRef(_) => {
                Err(IllFormed::PointerToReference(self.clone()))
            }
            _ => Ok(Type::from_parts(
                TypeKind::Pointer(Box::new(self.clone())),
                Qualifiers::NONE,
            )),
        }
    }

    /// `T&`, collapsing a reference operand to an lvalue reference
    pub fn lvalue_ref_to(&self) -> Result<Type, IllFormed> {
        match self.kind() {
            TypeKind::Void => Err(IllFormed::ReferenceTo(self.clone())),
            TypeKind::LvalueRef(_) => Ok(self.clone()),
            TypeKind::RvalueRef(referent) => Ok(Type::from_parts(
                TypeKind::LvalueRef(referent.clone()),
                Qualifiers::NONE,
            )),
            _ => Ok(Type::from_parts(
                TypeKind::LvalueRef(Box::new(self.clone())),
                Qualifiers::NONE,
            )),
        }
    }

    /// `T&&`; a reference operand keeps its own category
    pub fn rvalue_ref_to(&self) -> Result<Type, IllFormed> {
        match self.kind() {
            TypeKind::Void => Err(IllFormed::ReferenceTo(self.clone())),
            TypeKind::LvalueRef(_) | TypeKind::RvalueRef(_) => Ok(self.clone()),
            _ => Ok(Type::from_parts(
                TypeKind::RvalueRef(Box::new(self.clone())),
                Qualifiers::NONE,
            )),
        }
    }

    /// `T[N]` or `T[]`. Qualifiers of the element move to the array level.
    pub fn array_of(&self, bound: Option<usize>) -> Result<Type, IllFormed> {
        match self.kind() {
            TypeKind::Void
            | TypeKind::Function(_)
            | TypeKind::LvalueRef(_)
            | TypeKind::RvalueRef(_)
            | TypeKind::Array { bound: None, .. } => return Err(IllFormed::ArrayOf(self.clone())),
            _ => {}
        }
        if bound == Some(0) {
            return Err(IllFormed::ZeroBound);
        }
        Ok(Type::from_parts(
            TypeKind::Array {
                element: Box::new(self.unqualified()),
                bound,
            },
            self.qualifiers(),
        ))
    }

    /// `R(P...)` with parameter adjustment applied
    pub fn function(ret: Type, params: Vec<Type>, variadic: bool) -> Result<Type, IllFormed> {
        if matches!(ret.kind(), TypeKind::Array { .. } | TypeKind::Function(_)) {
            return Err(IllFormed::FunctionReturning(ret));
        }
        let params = params
            .into_iter()
            .map(adjust_parameter)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Type::from_parts(
            TypeKind::Function(FunctionSig {
                ret: Box::new(ret),
                params,
                variadic,
            }),
            Qualifiers::NONE,
        ))
    }

    /// `T C::*`
    pub fn member_pointer(class: &Type, pointee: &Type) -> Result<Type, IllFormed> {
        if !matches!(class.kind(), TypeKind::Class(_) | TypeKind::Union(_)) {
            return Err(IllFormed::NotAClass(class.clone()));
        }
        if matches!(
            pointee.kind(),
            TypeKind::Void | TypeKind::LvalueRef(_) | TypeKind::RvalueRef(_)
        ) {
            return Err(IllFormed::MemberPointerTo(pointee.clone()));
        }
        Ok(Type::from_parts(
            TypeKind::MemberPointer {
                class: Box::new(class.unqualified()),
                pointee: Box::new(pointee.clone()),
            },
            Qualifiers::NONE,
        ))
    }
}

fn adjust_parameter(param: Type) -> Result<Type, IllFormed> {
    if let Some(element) = param.array_element() {
        return element.pointer_to();
    }
    match param.kind() {
        TypeKind::Void => {}
        TypeKind::Function(_) => return param.pointer_to(),
        _ => return Ok(param.unqualified()),
    }
    Err(IllFormed::InvalidParameter(param))
}
