//! pointer modifications

use super::reference::remove_reference;
use crate::probe::probe;
use crate::types::{Type, TypeKind};

/// Strip one pointer level, whatever the pointer's own qualifiers
pub fn remove_pointer(ty: &Type) -> Type {
    match ty.kind() {
        TypeKind::Pointer(pointee) => (**pointee).clone(),
        _ => ty.clone(),
    }
}

/// Pointer to `T` with any reference stripped first, or `T` unchanged when
/// the pointer cannot be formed
pub fn add_pointer(ty: &Type) -> Type {
    probe(|| remove_reference(ty).pointer_to()).or_identity(ty)
}
