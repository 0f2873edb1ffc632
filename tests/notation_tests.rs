//! Type notation tests: parsing, elaboration and rendering

use tyq::{parse_type, QueryError, Type, Universe};

fn universe() -> Universe {
    Universe::from_manifest(
        r#"
        [[class]]
        name = "widget"

        [[enum]]
        name = "color"
        scoped = true
        underlying = "unsigned char"

        [[alias]]
        name = "handler"
        type = "void(*)(const widget&)"
        "#,
    )
    .unwrap()
}

fn render(text: &str) -> String {
    parse_type(text, &universe()).unwrap().to_string()
}

#[test]
fn test_render_canonical_spellings() {
    insta::assert_snapshot!(render("int const"), @"const int");
    insta::assert_snapshot!(render("long unsigned int"), @"unsigned long");
    insta::assert_snapshot!(render("signed"), @"int");
    insta::assert_snapshot!(render("decltype(nullptr)"), @"nullptr_t");
    insta::assert_snapshot!(render("volatile const char"), @"const volatile char");
}

#[test]
fn test_render_declarators() {
    insta::assert_snapshot!(render("int * const *"), @"int* const*");
    insta::assert_snapshot!(render("int (*)[3][4]"), @"int(*)[3][4]");
    insta::assert_snapshot!(render("int *[3]"), @"int*[3]");
    insta::assert_snapshot!(render("const int (&)[2]"), @"const int(&)[2]");
    insta::assert_snapshot!(render("int (*(*)(int))[4]"), @"int(*(*)(int))[4]");
    insta::assert_snapshot!(render("void (void)"), @"void()");
    insta::assert_snapshot!(render("int (char, ...)"), @"int(char, ...)");
}

#[test]
fn test_render_member_pointers_and_names() {
    insta::assert_snapshot!(render("int widget::*"), @"int widget::*");
    insta::assert_snapshot!(render("void (widget::*)(int)"), @"void(widget::*)(int)");
    insta::assert_snapshot!(render("const color*"), @"const color*");
    insta::assert_snapshot!(render("handler"), @"void(*)(const widget&)");
}

#[test]
fn test_parameters_are_adjusted() {
    insta::assert_snapshot!(render("void (int[3], int(int), const int)"), @"void(int*, int(*)(int), int)");
    assert_eq!(
        parse_type("void(const int)", &universe()).unwrap(),
        parse_type("void(int)", &universe()).unwrap()
    );
}

#[test]
fn test_rendering_round_trips() {
    let shapes = [
        "const volatile unsigned long long",
        "int* const volatile*",
        "int(&)(int)",
        "int(&&)[2]",
        "const int[][3]",
        "void(*(*)(int, ...))(double)",
        "int widget::* const",
        "void(widget::*)()",
        "color(*)[2]",
    ];
    for shape in shapes {
        let ty: Type = parse_type(shape, &universe()).unwrap();
        let rendered = ty.to_string();
        let reparsed = parse_type(&rendered, &universe()).unwrap();
        assert_eq!(ty, reparsed, "{shape} -> {rendered}");
    }
}

#[test]
fn test_reference_collapsing() {
    let u = universe();
    let lref = parse_type("int&", &u).unwrap();
    for collapsing in ["int& &", "int& &&", "int&& &"] {
        assert_eq!(parse_type(collapsing, &u).unwrap(), lref, "{collapsing}");
    }
    assert_eq!(
        parse_type("int&& &&", &u).unwrap(),
        parse_type("int&&", &u).unwrap()
    );
}

#[test]
fn test_ill_formed_notation() {
    let u = universe();
    for text in [
        "void&",
        "int&*",
        "int&[2]",
        "void[2]",
        "int[0]",
        "int(int)[2]",
        "int[2](int)",
        "int(void, int)",
        "void widget::*",
        "int[][]",
    ] {
        let err = parse_type(text, &u).unwrap_err();
        assert!(
            matches!(err, QueryError::IllFormedType { .. }),
            "{text}: {err}"
        );
    }
}

#[test]
fn test_diagnostic_points_at_operator() {
    let err = parse_type("const int* &*", &universe()).unwrap_err();
    let QueryError::IllFormedType { span, .. } = err else {
        panic!("expected an ill-formed type");
    };
    assert_eq!(span.offset(), 12);
    assert_eq!(span.len(), 1);
}
