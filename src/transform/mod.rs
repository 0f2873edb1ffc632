//! Transformation engine
//!
//! Pure rewrites from one descriptor to another. Every transformation is total:
//! where the host cannot form the requested type, the validity probe falls
//! back to the unchanged input.

pub mod array;
pub mod cv;
pub mod decay;
pub mod pointer;
pub mod reference;
pub mod sign;

pub use array::{extent, rank, remove_all_extents, remove_extent};
pub use cv::{add_const, add_cv, add_volatile, remove_const, remove_cv, remove_volatile};
pub use decay::{conditional, decay, remove_cvref, type_identity};
pub use pointer::{add_pointer, remove_pointer};
pub use reference::{add_lvalue_reference, add_rvalue_reference, remove_reference};
pub use sign::{
    make_signed, make_unsigned, try_make_signed, try_make_unsigned, try_underlying_type,
    underlying_type,
};

use crate::types::Type;

pub type TransformFn = fn(&Type) -> Type;

/// Unary transformations by name
pub const TRANSFORMS: &[(&str, TransformFn)] = &[
    ("remove_const", remove_const),
    ("remove_volatile", remove_volatile),
    ("remove_cv", remove_cv),
    ("add_const", add_const),
    ("add_volatile", add_volatile),
    ("add_cv", add_cv),
    ("remove_reference", remove_reference),
    ("add_lvalue_reference", add_lvalue_reference),
    ("add_rvalue_reference", add_rvalue_reference),
    ("remove_extent", remove_extent),
    ("remove_all_extents", remove_all_extents),
    ("remove_pointer", remove_pointer),
    ("add_pointer", add_pointer),
    ("remove_cvref", remove_cvref),
    ("decay", decay),
    ("type_identity", type_identity),
    ("make_signed", make_signed),
    ("make_unsigned", make_unsigned),
    ("underlying_type", underlying_type),
];

pub fn lookup(name: &str) -> Option<TransformFn> {
    TRANSFORMS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, transform)| transform)
}
