//! reference modifications

use crate::probe::probe;
use crate::types::{Type, TypeKind};

/// Strip one reference level
pub fn remove_reference(ty: &Type) -> Type {
    match ty.kind() {
        TypeKind::LvalueRef(referent) | TypeKind::RvalueRef(referent) => (**referent).clone(),
        _ => ty.clone(),
    }
}

/// `T&`, or `T` unchanged when no reference to `T` can be formed
pub fn add_lvalue_reference(ty: &Type) -> Type {
    probe(|| ty.lvalue_ref_to()).or_identity(ty)
}

/// `T&&`, or `T` unchanged when no reference to `T` can be formed
pub fn add_rvalue_reference(ty: &Type) -> Type {
    probe(|| ty.rvalue_ref_to()).or_identity(ty)
}
