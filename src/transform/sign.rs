//! sign modifications and enumeration queries

use crate::probe::probe;
use crate::types::{IllFormed, ScalarKind, Type, TypeKind};

/// Signed counterpart of an integral or enumeration type, qualifiers kept
pub fn try_make_signed(ty: &Type) -> Result<Type, IllFormed> {
    let kind = match ty.kind() {
        TypeKind::Scalar(kind) => kind.to_signed(),
        TypeKind::Enum(decl) => ScalarKind::signed_of_size(decl.underlying.size()),
        _ => None,
    }
    .ok_or_else(|| IllFormed::NotIntegral(ty.clone()))?;
    Ok(Type::scalar(kind).qualified(ty.qualifiers()))
}

/// Unsigned counterpart of an integral or enumeration type, qualifiers kept
pub fn try_make_unsigned(ty: &Type) -> Result<Type, IllFormed> {
    let kind = match ty.kind() {
        TypeKind::Scalar(kind) => kind.to_unsigned(),
        TypeKind::Enum(decl) => {
            ScalarKind::signed_of_size(decl.underlying.size()).and_then(ScalarKind::to_unsigned)
        }
        _ => None,
    }
    .ok_or_else(|| IllFormed::NotIntegral(ty.clone()))?;
    Ok(Type::scalar(kind).qualified(ty.qualifiers()))
}

/// Underlying integral type of an enumeration
pub fn try_underlying_type(ty: &Type) -> Result<Type, IllFormed> {
    match ty.kind() {
        TypeKind::Enum(decl) => Ok(Type::scalar(decl.underlying)),
        _ => Err(IllFormed::NotAnEnum(ty.clone())),
    }
}

pub fn make_signed(ty: &Type) -> Type {
    probe(|| try_make_signed(ty)).or_identity(ty)
}

pub fn make_unsigned(ty: &Type) -> Type {
    probe(|| try_make_unsigned(ty)).or_identity(ty)
}

pub fn underlying_type(ty: &Type) -> Type {
    probe(|| try_underlying_type(ty)).or_identity(ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Qualifiers;

    #[test]
    fn test_make_signed_keeps_qualifiers() {
        let cu = Type::scalar(ScalarKind::UnsignedLong).qualified(Qualifiers::CONST);
        assert_eq!(
            try_make_signed(&cu).unwrap(),
            Type::scalar(ScalarKind::Long).qualified(Qualifiers::CONST)
        );
        assert_eq!(
            make_unsigned(&Type::int()),
            Type::scalar(ScalarKind::UnsignedInt)
        );
    }

    #[test]
    fn test_enums_map_by_size() {
        let color = Type::enumeration("color", true, ScalarKind::UnsignedChar);
        assert_eq!(make_signed(&color), Type::scalar(ScalarKind::SignedChar));
        assert_eq!(make_unsigned(&color), Type::scalar(ScalarKind::UnsignedChar));
        assert_eq!(underlying_type(&color), Type::scalar(ScalarKind::UnsignedChar));
    }

    #[test]
    fn test_out_of_domain() {
        assert!(matches!(
            try_make_signed(&Type::bool()),
            Err(IllFormed::NotIntegral(_))
        ));
        assert!(try_make_unsigned(&Type::double()).is_err());
        assert_eq!(make_signed(&Type::float()), Type::float());
        assert!(matches!(
            try_underlying_type(&Type::int()),
            Err(IllFormed::NotAnEnum(_))
        ));
        assert_eq!(underlying_type(&Type::int()), Type::int());
    }
}
