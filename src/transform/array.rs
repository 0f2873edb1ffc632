//! array modifications and array property queries

use crate::types::{Type, TypeKind};

/// Strip the outermost array dimension; the element keeps the array's qualifiers
pub fn remove_extent(ty: &Type) -> Type {
    ty.array_element().unwrap_or_else(|| ty.clone())
}

/// Strip every array dimension
pub fn remove_all_extents(ty: &Type) -> Type {
    let mut current = ty.clone();
    while let Some(element) = current.array_element() {
        current = element;
    }
    current
}

/// Number of nested array dimensions
pub fn rank(ty: &Type) -> usize {
    match ty.kind() {
        TypeKind::Array { element, .. } => 1 + rank(element),
        _ => 0,
    }
}

/// Bound of dimension `index` (outermost is 0).
///
/// 0 when that dimension is unbounded or does not exist.
pub fn extent(ty: &Type, index: usize) -> usize {
    let mut current = ty;
    let mut remaining = index;
    loop {
        match current.kind() {
            TypeKind::Array { element, bound } => {
                if remaining == 0 {
                    return bound.unwrap_or(0);
                }
                remaining -= 1;
                current = element.as_ref();
            }
            _ => return 0,
        }
    }
}
