//! const-volatile modifications
//!
//! Removal strips exactly the named qualifiers at the outermost level and
//! never looks into pointees or elements. Addition is total: on function and
//! reference descriptors it is the identity.

use crate::types::{Qualifiers, Type};

fn strip(ty: &Type, quals: Qualifiers) -> Type {
    ty.with_qualifiers(ty.qualifiers().without(quals))
}

pub fn remove_const(ty: &Type) -> Type {
    strip(ty, Qualifiers::CONST)
}

pub fn remove_volatile(ty: &Type) -> Type {
    strip(ty, Qualifiers::VOLATILE)
}

pub fn remove_cv(ty: &Type) -> Type {
    strip(ty, Qualifiers::CV)
}

pub fn add_const(ty: &Type) -> Type {
    ty.qualified(Qualifiers::CONST)
}

pub fn add_volatile(ty: &Type) -> Type {
    ty.qualified(Qualifiers::VOLATILE)
}

pub fn add_cv(ty: &Type) -> Type {
    ty.qualified(Qualifiers::CV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_outermost_only() {
        let cv_int = Type::int().qualified(Qualifiers::CV);
        assert_eq!(remove_cv(&cv_int), Type::int());
        assert_eq!(remove_const(&cv_int), Type::int().qualified(Qualifiers::VOLATILE));
        assert_eq!(remove_volatile(&cv_int), Type::int().qualified(Qualifiers::CONST));

        // const int* keeps its pointee qualifiers
        let p = cv_int.pointer_to().unwrap();
        assert_eq!(remove_cv(&p), p);

        // int* const volatile loses them
        let cvp = Type::int().pointer_to().unwrap().qualified(Qualifiers::CV);
        assert_eq!(remove_cv(&cvp), Type::int().pointer_to().unwrap());
    }

    #[test]
    fn test_add_is_total() {
        let f = Type::function(Type::int(), vec![], false).unwrap();
        assert_eq!(add_const(&f), f);
        assert_eq!(add_cv(&f), f);

        let r = Type::int().lvalue_ref_to().unwrap();
        assert_eq!(add_volatile(&r), r);

        assert_eq!(add_cv(&Type::int()), Type::int().qualified(Qualifiers::CV));
    }

    #[test]
    fn test_array_qualifiers() {
        let arr = Type::int().array_of(Some(2)).unwrap();
        let const_arr = add_const(&arr);
        assert_eq!(
            const_arr,
            Type::int().qualified(Qualifiers::CONST).array_of(Some(2)).unwrap()
        );
        assert_eq!(remove_const(&const_arr), arr);
    }
}
