//! Property tests: algebraic laws of the transformations over arbitrary
//! well-formed descriptors.

use proptest::prelude::*;
use tyq::traits::*;
use tyq::transform::*;
use tyq::{parse_type, Qualifiers, ScalarKind, Type, Universe};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_qualifiers() -> impl Strategy<Value = Qualifiers> {
    prop_oneof![
        Just(Qualifiers::NONE),
        Just(Qualifiers::CONST),
        Just(Qualifiers::VOLATILE),
        Just(Qualifiers::CV),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Type> {
    let base = prop_oneof![
        Just(Type::void()),
        Just(Type::null_pointer()),
        proptest::sample::select(ScalarKind::ALL.to_vec()).prop_map(Type::scalar),
        Just(Type::class("widget")),
        Just(Type::enumeration("color", true, ScalarKind::UnsignedChar)),
    ];
    (base, arb_qualifiers()).prop_map(|(t, q)| t.qualified(q))
}

/// Well-formed descriptors; a formation step that the host rejects keeps the
/// inner type instead
fn arb_type() -> impl Strategy<Value = Type> {
    arb_leaf().prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), arb_qualifiers()).prop_map(|(t, q)| match t.pointer_to() {
                Ok(p) => p.qualified(q),
                Err(_) => t,
            }),
            inner.clone().prop_map(|t| t.lvalue_ref_to().unwrap_or(t)),
            inner.clone().prop_map(|t| t.rvalue_ref_to().unwrap_or(t)),
            (inner.clone(), prop::option::of(1usize..5)).prop_map(|(t, bound)| t
                .array_of(bound)
                .unwrap_or(t)),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3), any::<bool>()).prop_map(
                |(ret, params, variadic)| Type::function(ret.clone(), params, variadic)
                    .unwrap_or(ret)
            ),
            inner.prop_map(|t| Type::member_pointer(&Type::class("widget"), &t).unwrap_or(t)),
        ]
    })
}

fn universe() -> Universe {
    let mut builder = Universe::builder();
    builder.declare_class("widget").unwrap();
    builder
        .declare_enum("color", true, ScalarKind::UnsignedChar)
        .unwrap();
    builder.build()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn remove_cv_after_add_cv_leaves_no_qualifiers(t in arb_type()) {
        prop_assert!(remove_cv(&add_cv(&t)).qualifiers().is_empty());
    }

    #[test]
    fn add_cv_ignores_prior_qualifiers(t in arb_type()) {
        prop_assert_eq!(add_cv(&remove_cv(&t)), add_cv(&t));
    }

    #[test]
    fn removal_is_exact(t in arb_type()) {
        prop_assert_eq!(remove_const(&t).qualifiers(), t.qualifiers().without(Qualifiers::CONST));
        prop_assert_eq!(remove_volatile(&t).qualifiers(), t.qualifiers().without(Qualifiers::VOLATILE));
    }

    #[test]
    fn rank_is_zero_exactly_for_non_arrays(t in arb_type()) {
        prop_assert_eq!(rank(&t) == 0, !is_array(&t));
        prop_assert_eq!(extent(&t, rank(&t)), 0);
        prop_assert_eq!(rank(&remove_all_extents(&t)), 0);
    }

    #[test]
    fn decay_is_idempotent(t in arb_type()) {
        let once = decay(&t);
        prop_assert_eq!(decay(&once), once.clone());
        prop_assert!(!is_array(&once) && !is_function(&once) && !is_reference(&once));
    }

    #[test]
    fn pointer_round_trip(t in arb_type()) {
        prop_assert_eq!(remove_pointer(&add_pointer(&t)), remove_reference(&t));
    }

    #[test]
    fn reference_round_trip(t in arb_type()) {
        prop_assume!(!is_reference(&t));
        prop_assert_eq!(remove_reference(&add_lvalue_reference(&t)), t.clone());
        prop_assert_eq!(remove_reference(&add_rvalue_reference(&t)), t);
    }

    #[test]
    fn exactly_one_primary_category(t in arb_type()) {
        let categories = [
            is_void(&t),
            is_null_pointer(&t),
            is_integral(&t),
            is_floating_point(&t),
            is_array(&t),
            is_pointer(&t),
            is_lvalue_reference(&t),
            is_rvalue_reference(&t),
            is_member_object_pointer(&t),
            is_member_function_pointer(&t),
            is_enum(&t),
            is_union(&t),
            is_class(&t),
            is_function(&t),
        ];
        prop_assert_eq!(categories.iter().filter(|c| **c).count(), 1);
        prop_assert_eq!(is_compound(&t), !is_fundamental(&t));
    }

    #[test]
    fn notation_round_trips(t in arb_type()) {
        let rendered = t.to_string();
        let reparsed = parse_type(&rendered, &universe());
        prop_assert!(reparsed.is_ok(), "{} failed to parse", rendered);
        prop_assert_eq!(reparsed.ok(), Some(t));
    }
}
