//! other transformations

use super::array::remove_extent;
use super::cv::remove_cv;
use super::pointer::add_pointer;
use super::reference::remove_reference;
use crate::traits::{is_array, is_function};
use crate::types::Type;

/// returns the type argument unchanged
pub fn type_identity(ty: &Type) -> Type {
    ty.clone()
}

/// combines remove_cv and remove_reference
///
/// Qualifiers are stripped from the referent; the reference itself never
/// carries any.
pub fn remove_cvref(ty: &Type) -> Type {
    remove_cv(&remove_reference(ty))
}

/// applies the conversions of passing an argument by value
pub fn decay(ty: &Type) -> Type {
    let stripped = remove_reference(ty);
    if is_array(&stripped) {
        add_pointer(&remove_extent(&stripped))
    } else if is_function(&stripped) {
        add_pointer(&stripped)
    } else {
        remove_cv(&stripped)
    }
}

/// chooses one value or another based on a condition
pub fn conditional<T>(condition: bool, if_true: T, if_false: T) -> T {
    if condition { if_true } else { if_false }
}
