//! Rendering of descriptors in declarator notation
//!
//! Output is accepted back by [`crate::parser`] when the named types are
//! declared in the universe used for parsing.

use super::core::{Type, TypeKind};
use std::fmt;

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, String::new()))
    }
}

/// Render `ty` wrapped around the partially built declarator `decl`
fn render(ty: &Type, decl: String) -> String {
    let quals = ty.qualifiers();
    match ty.kind() {
        TypeKind::Void => leaf("void", ty, decl),
        TypeKind::NullPointer => leaf("nullptr_t", ty, decl),
        TypeKind::Scalar(kind) => leaf(kind.name(), ty, decl),
        TypeKind::Class(name) | TypeKind::Union(name) => leaf(name, ty, decl),
        TypeKind::Enum(e) => leaf(&e.name, ty, decl),
        TypeKind::Pointer(pointee) => {
            let op = if quals.is_empty() {
                "*".to_string()
            } else {
                format!("* {quals}")
            };
            let decl = attach(op, decl);
            render(pointee, group_if_needed(pointee, decl))
        }
        TypeKind::LvalueRef(referent) => {
            let decl = attach("&".to_string(), decl);
            render(referent, group_if_needed(referent, decl))
        }
        TypeKind::RvalueRef(referent) => {
            let decl = attach("&&".to_string(), decl);
            render(referent, group_if_needed(referent, decl))
        }
        TypeKind::MemberPointer { class, pointee } => {
            let op = if quals.is_empty() {
                format!("{}::*", class)
            } else {
                format!("{}::* {quals}", class)
            };
            let decl = attach(op, decl);
            render(pointee, group_if_needed(pointee, decl))
        }
        TypeKind::Array { element, bound } => {
            let decl = match bound {
                Some(n) => format!("{decl}[{n}]"),
                None => format!("{decl}[]"),
            };
            render(&element.qualified(quals), decl)
        }
        TypeKind::Function(sig) => {
            let mut params: Vec<String> = sig.params.iter().map(ToString::to_string).collect();
            if sig.variadic {
                params.push("...".to_string());
            }
            let decl = format!("{decl}({})", params.join(", "));
            render(&sig.ret, decl)
        }
    }
}

fn leaf(name: &str, ty: &Type, decl: String) -> String {
    let quals = ty.qualifiers();
    let base = if quals.is_empty() {
        name.to_string()
    } else {
        format!("{quals} {name}")
    };
    if starts_with_word(&decl) {
        format!("{base} {decl}")
    } else {
        format!("{base}{decl}")
    }
}

/// Prefix a declarator operator onto the declarator built so far
fn attach(op: String, decl: String) -> String {
    if op.ends_with(|c: char| c.is_alphanumeric()) && starts_with_word(&decl) {
        format!("{op} {decl}")
    } else {
        format!("{op}{decl}")
    }
}

/// Arrays and functions bind tighter than pointer operators
fn group_if_needed(inner: &Type, decl: String) -> String {
    match inner.kind() {
        TypeKind::Array { .. } | TypeKind::Function(_) => format!("({decl})"),
        _ => decl,
    }
}

fn starts_with_word(decl: &str) -> bool {
    decl.starts_with(|c: char| c.is_alphanumeric() || c == '_')
}
