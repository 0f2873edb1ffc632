//! Transformation tests

use pretty_assertions::assert_eq;
use tyq::traits::{is_function, is_pointer};
use tyq::transform::*;
use tyq::{parse_type, Type, Universe};

fn ty(text: &str) -> Type {
    let mut builder = Universe::builder();
    builder.declare_class("widget").unwrap();
    builder
        .declare_enum("level", false, tyq::ScalarKind::Short)
        .unwrap();
    parse_type(text, &builder.build()).unwrap()
}

#[test]
fn test_cv_removal_is_shallow() {
    assert_eq!(remove_const(&ty("const volatile int")), ty("volatile int"));
    assert_eq!(remove_volatile(&ty("const volatile int")), ty("const int"));
    assert_eq!(remove_cv(&ty("const int* const")), ty("const int*"));
    assert_eq!(remove_cv(&ty("const int&")), ty("const int&"));
    assert_eq!(remove_cv(&ty("const volatile int[2]")), ty("int[2]"));
}

#[test]
fn test_cv_addition_is_total() {
    assert_eq!(add_const(&ty("int*")), ty("int* const"));
    assert_eq!(add_cv(&ty("const int")), ty("const volatile int"));
    // functions and references cannot carry qualifiers
    assert_eq!(add_const(&ty("int(int)")), ty("int(int)"));
    assert_eq!(add_volatile(&ty("int&")), ty("int&"));
    assert_eq!(add_const(&ty("int[3]")), ty("const int[3]"));
}

#[test]
fn test_references() {
    assert_eq!(remove_reference(&ty("int&")), ty("int"));
    assert_eq!(remove_reference(&ty("const int&&")), ty("const int"));
    assert_eq!(remove_reference(&ty("int*")), ty("int*"));
    assert_eq!(add_lvalue_reference(&ty("int")), ty("int&"));
    assert_eq!(add_lvalue_reference(&ty("int&&")), ty("int&"));
    assert_eq!(add_rvalue_reference(&ty("int&")), ty("int&"));
    assert_eq!(add_rvalue_reference(&ty("int(int)")), ty("int(&&)(int)"));
    // identity fallback
    assert_eq!(add_lvalue_reference(&ty("void")), ty("void"));
    assert_eq!(add_rvalue_reference(&ty("const void")), ty("const void"));
}

#[test]
fn test_pointers() {
    assert_eq!(add_pointer(&ty("int&")), ty("int*"));
    assert_eq!(add_pointer(&ty("int(int)")), ty("int(*)(int)"));
    assert_eq!(add_pointer(&ty("void")), ty("void*"));
    assert_eq!(remove_pointer(&ty("int* const*")), ty("int* const"));
    assert_eq!(remove_pointer(&ty("int* const")), ty("int"));
    assert_eq!(remove_pointer(&ty("int widget::*")), ty("int widget::*"));
}

#[test]
fn test_extents() {
    let matrix = ty("int[3][4]");
    assert_eq!(rank(&matrix), 2);
    assert_eq!(rank(&ty("int")), 0);
    assert_eq!(extent(&matrix, 0), 3);
    assert_eq!(extent(&matrix, 1), 4);
    assert_eq!(extent(&matrix, 2), 0);
    assert_eq!(extent(&ty("int[]"), 0), 0);
    assert_eq!(extent(&ty("int[][2]"), 1), 2);
    assert_eq!(remove_extent(&matrix), ty("int[4]"));
    assert_eq!(remove_extent(&ty("const int[][2]")), ty("const int[2]"));
    assert_eq!(remove_all_extents(&ty("const int[1][2][3]")), ty("const int"));
    assert_eq!(remove_all_extents(&ty("int*")), ty("int*"));
}

#[test]
fn test_decay() {
    assert_eq!(decay(&ty("int[2]")), ty("int*"));
    assert_eq!(decay(&ty("const int(&)[2]")), ty("const int*"));
    assert_eq!(decay(&ty("int[2][3]")), ty("int(*)[3]"));

    let f = decay(&ty("int(int)"));
    assert!(is_pointer(&f));
    assert!(is_function(&remove_pointer(&f)));
    assert_eq!(f, ty("int(*)(int)"));

    assert_eq!(decay(&ty("const int&")), ty("int"));
    assert_eq!(decay(&ty("volatile widget&&")), ty("widget"));
    assert_eq!(decay(&ty("int* const")), ty("int*"));
}

#[test]
fn test_remove_cvref_and_identity() {
    assert_eq!(remove_cvref(&ty("const volatile int&")), ty("int"));
    assert_eq!(remove_cvref(&ty("const int* const&")), ty("const int*"));
    assert_eq!(type_identity(&ty("int[3]")), ty("int[3]"));
    assert_eq!(conditional(true, ty("int"), ty("long")), ty("int"));
    assert_eq!(conditional(false, ty("int"), ty("long")), ty("long"));
}

#[test]
fn test_sign_and_underlying() {
    assert_eq!(make_signed(&ty("const unsigned int")), ty("const int"));
    assert_eq!(make_unsigned(&ty("volatile long long")), ty("volatile unsigned long long"));
    assert_eq!(make_unsigned(&ty("char")), ty("unsigned char"));
    assert_eq!(underlying_type(&ty("level")), ty("short"));
    assert!(try_make_signed(&ty("bool")).is_err());
    assert!(try_make_unsigned(&ty("double")).is_err());
    assert!(try_underlying_type(&ty("int")).is_err());
    // outside the domain the probe keeps the input
    assert_eq!(make_signed(&ty("double")), ty("double"));
}

#[test]
fn test_lookup_by_name() {
    let rewrite = lookup("remove_all_extents").unwrap();
    assert_eq!(rewrite(&ty("int[1][2]")), ty("int"));
    assert!(lookup("remove_everything").is_none());
    assert_eq!(TRANSFORMS.len(), 19);
}
