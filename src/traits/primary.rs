//! Primary type categories
//!
//! Each predicate is decided directly from the descriptor's kind. Qualifiers
//! at the matched level are ignored.

use crate::transform::add_const;
use crate::types::{Type, TypeKind};

/// checks if a type is void
pub fn is_void(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::Void)
}

/// checks if a type is `decltype(nullptr)`
pub fn is_null_pointer(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::NullPointer)
}

/// checks if a type is an integral type
pub fn is_integral(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::Scalar(kind) if kind.is_integral())
}

/// checks if a type is a floating-point type
pub fn is_floating_point(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::Scalar(kind) if kind.is_floating_point())
}

/// checks if a type is an array type, bounded or not
pub fn is_array(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::Array { .. })
}

/// checks if a type is an object or function pointer (not a member pointer)
pub fn is_pointer(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::Pointer(_))
}

pub fn is_lvalue_reference(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::LvalueRef(_))
}

pub fn is_rvalue_reference(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::RvalueRef(_))
}

pub fn is_enum(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::Enum(_))
}

pub fn is_union(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::Union(_))
}

/// checks if a type is a non-union class type
pub fn is_class(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::Class(_))
}

/// checks if a type is a function type
///
/// Decided structurally rather than from the kind tag: only functions and
/// references stay unqualified after `add_const`, and references are excluded.
pub fn is_function(ty: &Type) -> bool {
    !add_const(ty).qualifiers().is_const() && !is_lvalue_reference(ty) && !is_rvalue_reference(ty)
}

/// checks if a type is a pointer to a non-static member
pub fn is_member_pointer(ty: &Type) -> bool {
    matches!(ty.kind(), TypeKind::MemberPointer { .. })
}

/// checks if a type is a pointer to a non-static member function
pub fn is_member_function_pointer(ty: &Type) -> bool {
    match ty.kind() {
        TypeKind::MemberPointer { pointee, .. } => is_function(pointee),
        _ => false,
    }
}

/// checks if a type is a pointer to a non-static member object
pub fn is_member_object_pointer(ty: &Type) -> bool {
    is_member_pointer(ty) && !is_member_function_pointer(ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Qualifiers, ScalarKind};

    fn function() -> Type {
        Type::function(Type::void(), vec![Type::int()], false).unwrap()
    }

    #[test]
    fn test_qualifiers_are_ignored() {
        assert!(is_void(&Type::void().qualified(Qualifiers::CV)));
        assert!(is_integral(&Type::int().qualified(Qualifiers::VOLATILE)));
        let cp = Type::int().pointer_to().unwrap().qualified(Qualifiers::CONST);
        assert!(is_pointer(&cp));
    }

    #[test]
    fn test_scalar_membership() {
        for kind in ScalarKind::ALL {
            let ty = Type::scalar(kind);
            assert_ne!(is_integral(&ty), is_floating_point(&ty), "{kind}");
        }
        assert!(!is_integral(&Type::enumeration("e", false, ScalarKind::Int)));
    }

    #[test]
    fn test_is_function_only_for_bare_functions() {
        let f = function();
        assert!(is_function(&f));
        assert!(!is_function(&f.pointer_to().unwrap()));
        assert!(!is_function(&f.lvalue_ref_to().unwrap()));
        assert!(!is_function(&f.rvalue_ref_to().unwrap()));
        assert!(!is_function(&Type::int()));
        assert!(!is_function(&Type::int().qualified(Qualifiers::CONST)));
        assert!(!is_function(&Type::int().lvalue_ref_to().unwrap()));
    }

    #[test]
    fn test_member_pointer_split() {
        let widget = Type::class("widget");
        let data = Type::member_pointer(&widget, &Type::int()).unwrap();
        let method = Type::member_pointer(&widget, &function()).unwrap();

        assert!(is_member_pointer(&data));
        assert!(is_member_object_pointer(&data));
        assert!(!is_member_function_pointer(&data));

        assert!(is_member_pointer(&method));
        assert!(is_member_function_pointer(&method));
        assert!(!is_member_object_pointer(&method));

        assert!(!is_member_object_pointer(&Type::int()));
    }
}
