//! Host type universe
//!
//! The registry of user-declared types that notation identifiers resolve to:
//! classes, unions, enumerations and aliases. A universe is populated once
//! through [`UniverseBuilder`] (or a TOML manifest) and is read-only
//! afterwards, so it can be shared across threads without locking.

use crate::lexer::{lex, TokenKind};
use crate::diagnostics::SourceFile;
use crate::types::{ScalarKind, Type, TypeKind};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while populating a universe
#[derive(Error, Debug)]
pub enum UniverseError {
    #[error("failed to read universe manifest {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid universe manifest: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("`{0}` is declared more than once")]
    Duplicate(String),

    #[error("`{0}` is not a valid type name")]
    InvalidName(String),

    #[error("enum `{name}` has invalid underlying type `{underlying}`")]
    InvalidUnderlying { name: String, underlying: String },

    #[error("alias `{name}` does not name a valid type: {reason}")]
    InvalidAlias { name: String, reason: String },
}

/// Immutable set of named types
#[derive(Debug, Clone, Default)]
pub struct Universe {
    entries: IndexMap<String, Type>,
}

impl Universe {
    /// Universe with no declared types
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> UniverseBuilder {
        UniverseBuilder::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Declarations in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.entries.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a universe from manifest text
    pub fn from_manifest(text: &str) -> Result<Self, UniverseError> {
        let manifest: Manifest = toml::from_str(text)?;
        let mut builder = Self::builder();

        for entry in &manifest.classes {
            builder.declare_class(&entry.name)?;
        }
        for entry in &manifest.unions {
            builder.declare_union(&entry.name)?;
        }
        for entry in &manifest.enums {
            let underlying = match &entry.underlying {
                Some(text) => parse_underlying(&entry.name, text)?,
                None => ScalarKind::Int,
            };
            builder.declare_enum(&entry.name, entry.scoped, underlying)?;
        }
        for entry in &manifest.aliases {
            builder.declare_alias(&entry.name, &entry.ty)?;
        }

        Ok(builder.build())
    }

    /// Read and build a universe from a manifest file
    pub fn load(path: &Path) -> Result<Self, UniverseError> {
        let text = std::fs::read_to_string(path).map_err(|source| UniverseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let universe = Self::from_manifest(&text)?;
        tracing::debug!(path = %path.display(), types = universe.len(), "universe loaded");
        Ok(universe)
    }
}

/// Mutable phase of a [`Universe`]
#[derive(Debug, Default)]
pub struct UniverseBuilder {
    universe: Universe,
}

impl UniverseBuilder {
    pub fn declare_class(&mut self, name: &str) -> Result<&mut Self, UniverseError> {
        self.insert(name, Type::class(name))
    }

    pub fn declare_union(&mut self, name: &str) -> Result<&mut Self, UniverseError> {
        self.insert(name, Type::union(name))
    }

    pub fn declare_enum(
        &mut self,
        name: &str,
        scoped: bool,
        underlying: ScalarKind,
    ) -> Result<&mut Self, UniverseError> {
        if !underlying.is_integral() {
            return Err(UniverseError::InvalidUnderlying {
                name: name.to_string(),
                underlying: underlying.name().to_string(),
            });
        }
        self.insert(name, Type::enumeration(name, scoped, underlying))
    }

    /// Declare `name` as another spelling of `notation`, which may refer to
    /// anything declared before it
    pub fn declare_alias(&mut self, name: &str, notation: &str) -> Result<&mut Self, UniverseError> {
        let ty = crate::query::parse_type(notation, &self.universe).map_err(|err| {
            UniverseError::InvalidAlias {
                name: name.to_string(),
                reason: err.to_string(),
            }
        })?;
        self.insert(name, ty)
    }

    pub fn build(self) -> Universe {
        self.universe
    }

    fn insert(&mut self, name: &str, ty: Type) -> Result<&mut Self, UniverseError> {
        if !is_identifier(name) {
            return Err(UniverseError::InvalidName(name.to_string()));
        }
        if self.universe.contains(name) {
            return Err(UniverseError::Duplicate(name.to_string()));
        }
        tracing::debug!(name, ty = %ty, "declared");
        self.universe.entries.insert(name.to_string(), ty);
        Ok(self)
    }
}

/// A name must lex as a single identifier, so keywords are rejected
fn is_identifier(name: &str) -> bool {
    match lex(&SourceFile::new("<name>", name)) {
        Ok(tokens) => matches!(
            tokens.as_slice(),
            [first, eof] if first.kind == TokenKind::Ident && eof.kind == TokenKind::Eof
        ),
        Err(_) => false,
    }
}

fn parse_underlying(name: &str, text: &str) -> Result<ScalarKind, UniverseError> {
    let invalid = || UniverseError::InvalidUnderlying {
        name: name.to_string(),
        underlying: text.to_string(),
    };
    let ty = crate::query::parse_type(text, &Universe::empty()).map_err(|_| invalid())?;
    match ty.kind() {
        TypeKind::Scalar(kind) if kind.is_integral() && ty.qualifiers().is_empty() => Ok(*kind),
        _ => Err(invalid()),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default, rename = "class")]
    classes: Vec<NamedEntry>,
    #[serde(default, rename = "union")]
    unions: Vec<NamedEntry>,
    #[serde(default, rename = "enum")]
    enums: Vec<EnumEntry>,
    #[serde(default, rename = "alias")]
    aliases: Vec<AliasEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NamedEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EnumEntry {
    name: String,
    #[serde(default)]
    scoped: bool,
    underlying: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AliasEntry {
    name: String,
    #[serde(rename = "type")]
    ty: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{is_class, is_enum, is_scoped_enum};
    use std::sync::Arc;

    const MANIFEST: &str = r#"
        [[class]]
        name = "widget"

        [[union]]
        name = "payload"

        [[enum]]
        name = "color"
        scoped = true
        underlying = "unsigned char"

        [[enum]]
        name = "flag"

        [[alias]]
        name = "callback"
        type = "void (*)(widget&, int)"
    "#;

    #[test]
    fn test_manifest_declarations() {
        let universe = Universe::from_manifest(MANIFEST).unwrap();
        assert_eq!(universe.len(), 5);
        let names: Vec<&str> = universe.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["widget", "payload", "color", "flag", "callback"]);

        assert!(is_class(universe.lookup("widget").unwrap()));
        let color = universe.lookup("color").unwrap();
        assert!(is_scoped_enum(color));
        assert_eq!(
            color.kind(),
            &TypeKind::Enum(crate::types::EnumDecl {
                name: "color".into(),
                scoped: true,
                underlying: ScalarKind::UnsignedChar,
            })
        );
        assert!(is_enum(universe.lookup("flag").unwrap()));
        assert_eq!(
            universe.lookup("callback").unwrap().to_string(),
            "void(*)(widget&, int)"
        );
    }

    #[test]
    fn test_rejections() {
        let mut builder = Universe::builder();
        builder.declare_class("widget").unwrap();
        assert!(matches!(
            builder.declare_union("widget"),
            Err(UniverseError::Duplicate(_))
        ));
        assert!(matches!(
            builder.declare_class("int"),
            Err(UniverseError::InvalidName(_))
        ));
        assert!(matches!(
            builder.declare_class("two words"),
            Err(UniverseError::InvalidName(_))
        ));
        assert!(matches!(
            builder.declare_enum("e", false, ScalarKind::Double),
            Err(UniverseError::InvalidUnderlying { .. })
        ));
        assert!(matches!(
            builder.declare_alias("bad", "void&"),
            Err(UniverseError::InvalidAlias { .. })
        ));
        assert!(matches!(
            builder.declare_alias("later", "gadget*"),
            Err(UniverseError::InvalidAlias { .. })
        ));
    }

    #[test]
    fn test_manifest_errors() {
        assert!(matches!(
            Universe::from_manifest("[[class]]\nnam = \"x\""),
            Err(UniverseError::Manifest(_))
        ));
        assert!(matches!(
            Universe::from_manifest("[[enum]]\nname = \"e\"\nunderlying = \"float\""),
            Err(UniverseError::InvalidUnderlying { .. })
        ));
    }

    #[test]
    fn test_concurrent_lookups_agree() {
        let universe = Arc::new(Universe::from_manifest(MANIFEST).unwrap());
        let results: Vec<Option<Type>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let universe = Arc::clone(&universe);
                    scope.spawn(move || universe.lookup("callback").cloned())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.iter().all(|r| r == &results[0] && r.is_some()));
    }
}
