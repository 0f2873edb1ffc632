//! Composite type categories
//!
//! Formulas over primary categories. A formula may only call predicates of a
//! strictly lower layer; the catalog in [`super::catalog`] records the
//! dependencies and rejects violations when it is built.

use super::primary::*;
use crate::types::Type;

/// checks if a type is either an lvalue reference or an rvalue reference
pub fn is_reference(ty: &Type) -> bool {
    is_lvalue_reference(ty) || is_rvalue_reference(ty)
}

/// checks if a type is an arithmetic type
pub fn is_arithmetic(ty: &Type) -> bool {
    is_integral(ty) || is_floating_point(ty)
}

/// checks if a type is a fundamental type
pub fn is_fundamental(ty: &Type) -> bool {
    is_arithmetic(ty) || is_void(ty) || is_null_pointer(ty)
}

/// checks if a type is a scalar type
pub fn is_scalar(ty: &Type) -> bool {
    is_arithmetic(ty)
        || is_enum(ty)
        || is_pointer(ty)
        || is_member_pointer(ty)
        || is_null_pointer(ty)
}

/// checks if a type is an object type
pub fn is_object(ty: &Type) -> bool {
    is_scalar(ty) || is_array(ty) || is_union(ty) || is_class(ty)
}

/// checks if a type is a compound type
pub fn is_compound(ty: &Type) -> bool {
    !is_fundamental(ty)
}
