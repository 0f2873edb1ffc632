//! Type properties and type relations

use super::composite::is_arithmetic;
use super::primary::{is_array, is_enum};
use crate::probe::probe;
use crate::types::{Type, TypeKind};

/// checks if a type is const-qualified
pub fn is_const(ty: &Type) -> bool {
    ty.qualifiers().is_const()
}

/// checks if a type is volatile-qualified
pub fn is_volatile(ty: &Type) -> bool {
    ty.qualifiers().is_volatile()
}

/// checks if a type is an arithmetic type with `T(-1) < T(0)`
pub fn is_signed(ty: &Type) -> bool {
    is_arithmetic(ty) && matches!(ty.kind(), TypeKind::Scalar(kind) if kind.is_signed())
}

/// checks if a type is an arithmetic type with `T(0) < T(-1)`
pub fn is_unsigned(ty: &Type) -> bool {
    is_arithmetic(ty) && !is_signed(ty)
}

/// checks if a type is an array type of known bound
pub fn is_bounded_array(ty: &Type) -> bool {
    is_array(ty) && matches!(ty.kind(), TypeKind::Array { bound: Some(_), .. })
}

/// checks if a type is an array type of unknown bound
pub fn is_unbounded_array(ty: &Type) -> bool {
    is_array(ty) && matches!(ty.kind(), TypeKind::Array { bound: None, .. })
}

/// checks if a type is a scoped enumeration
pub fn is_scoped_enum(ty: &Type) -> bool {
    is_enum(ty) && matches!(ty.kind(), TypeKind::Enum(decl) if decl.scoped)
}

/// checks if a reference to the type can be formed
pub fn is_referenceable(ty: &Type) -> bool {
    probe(|| ty.lvalue_ref_to()).is_viable()
}

/// checks if two types are the same
pub fn is_same(a: &Type, b: &Type) -> bool {
    a == b
}

/// checks if a type is one of the candidates
pub fn is_any_of<'a>(ty: &Type, candidates: impl IntoIterator<Item = &'a Type>) -> bool {
    candidates.into_iter().any(|c| is_same(ty, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Qualifiers, ScalarKind};

    #[test]
    fn test_cv_properties() {
        let cv_int = Type::int().qualified(Qualifiers::CV);
        assert!(is_const(&cv_int));
        assert!(is_volatile(&cv_int));
        // const applies to the pointee, not the pointer
        let p = Type::int().qualified(Qualifiers::CONST).pointer_to().unwrap();
        assert!(!is_const(&p));
        // arrays report the qualifiers of their elements
        let arr = Type::int()
            .qualified(Qualifiers::CONST)
            .array_of(Some(2))
            .unwrap();
        assert!(is_const(&arr));
        // references are never qualified
        let r = Type::int()
            .qualified(Qualifiers::CONST)
            .lvalue_ref_to()
            .unwrap();
        assert!(!is_const(&r));
    }

    #[test]
    fn test_signedness() {
        assert!(is_signed(&Type::int()));
        assert!(is_signed(&Type::float()));
        assert!(is_unsigned(&Type::bool()));
        assert!(is_unsigned(&Type::scalar(ScalarKind::Char8)));
        let e = Type::enumeration("e", false, ScalarKind::Int);
        assert!(!is_signed(&e));
        assert!(!is_unsigned(&e));
    }

    #[test]
    fn test_array_bounds() {
        let bounded = Type::int().array_of(Some(3)).unwrap();
        let unbounded = bounded.array_of(None).unwrap();
        assert!(is_bounded_array(&bounded));
        assert!(!is_unbounded_array(&bounded));
        assert!(is_unbounded_array(&unbounded));
        assert!(!is_bounded_array(&Type::int()));
    }

    #[test]
    fn test_scoped_enum() {
        assert!(is_scoped_enum(&Type::enumeration("c", true, ScalarKind::Int)));
        assert!(!is_scoped_enum(&Type::enumeration("c", false, ScalarKind::Int)));
        assert!(!is_scoped_enum(&Type::class("c")));
    }

    #[test]
    fn test_referenceable() {
        assert!(is_referenceable(&Type::int()));
        assert!(!is_referenceable(&Type::void()));
    }

    #[test]
    fn test_same_and_any_of() {
        assert!(is_same(&Type::int(), &Type::int()));
        assert!(!is_same(&Type::int(), &Type::double()));
        let candidates = [Type::float(), Type::double()];
        assert!(is_any_of(&Type::double(), &candidates));
        assert!(!is_any_of(&Type::int(), &candidates));
        assert!(!is_any_of(&Type::int(), &[]));
    }
}
