//! Core type descriptor definitions
//!
//! A [`Type`] is an immutable tree: a [`TypeKind`] tag with its children plus
//! the cv-qualifiers attached at that level. Descriptors are kept in canonical
//! form by construction, so structural equality is type identity:
//!
//! - function and reference levels never carry qualifiers
//! - qualifiers of an array live on the outermost array level, never on the
//!   element (`const int[2]` and "array of 2 `const int`" are one descriptor)
//! - function parameters are stored adjusted (arrays and functions decay to
//!   pointers, top-level qualifiers are dropped)
//!
//! Only the fallible constructors in [`super::form`] can build compound
//! descriptors, which is where the canonical form is established.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// cv-qualifier bitset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Qualifiers(u8);

impl Qualifiers {
    pub const NONE: Qualifiers = Qualifiers(0);
    pub const CONST: Qualifiers = Qualifiers(0b01);
    pub const VOLATILE: Qualifiers = Qualifiers(0b10);
    pub const CV: Qualifiers = Qualifiers(0b11);

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_const(self) -> bool {
        self.0 & Self::CONST.0 != 0
    }

    pub const fn is_volatile(self) -> bool {
        self.0 & Self::VOLATILE.0 != 0
    }

    pub const fn contains(self, other: Qualifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Qualifiers) -> Qualifiers {
        Qualifiers(self.0 | other.0)
    }

    pub const fn without(self, other: Qualifiers) -> Qualifiers {
        Qualifiers(self.0 & !other.0)
    }
}

impl BitOr for Qualifiers {
    type Output = Qualifiers;

    fn bitor(self, rhs: Qualifiers) -> Qualifiers {
        self.union(rhs)
    }
}

impl BitOrAssign for Qualifiers {
    fn bitor_assign(&mut self, rhs: Qualifiers) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_const(), self.is_volatile()) {
            (true, true) => write!(f, "const volatile"),
            (true, false) => write!(f, "const"),
            (false, true) => write!(f, "volatile"),
            (false, false) => Ok(()),
        }
    }
}

/// Built-in arithmetic types of the host
///
/// Sizes and signedness follow an LP64 target: `long` is 8 bytes, `wchar_t`
/// is a signed 4-byte type and plain `char` is signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    WChar,
    Char8,
    Char16,
    Char32,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 19] = [
        ScalarKind::Bool,
        ScalarKind::Char,
        ScalarKind::SignedChar,
        ScalarKind::UnsignedChar,
        ScalarKind::WChar,
        ScalarKind::Char8,
        ScalarKind::Char16,
        ScalarKind::Char32,
        ScalarKind::Short,
        ScalarKind::UnsignedShort,
        ScalarKind::Int,
        ScalarKind::UnsignedInt,
        ScalarKind::Long,
        ScalarKind::UnsignedLong,
        ScalarKind::LongLong,
        ScalarKind::UnsignedLongLong,
        ScalarKind::Float,
        ScalarKind::Double,
        ScalarKind::LongDouble,
    ];

    /// Canonical spelling
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Char => "char",
            ScalarKind::SignedChar => "signed char",
            ScalarKind::UnsignedChar => "unsigned char",
            ScalarKind::WChar => "wchar_t",
            ScalarKind::Char8 => "char8_t",
            ScalarKind::Char16 => "char16_t",
            ScalarKind::Char32 => "char32_t",
            ScalarKind::Short => "short",
            ScalarKind::UnsignedShort => "unsigned short",
            ScalarKind::Int => "int",
            ScalarKind::UnsignedInt => "unsigned int",
            ScalarKind::Long => "long",
            ScalarKind::UnsignedLong => "unsigned long",
            ScalarKind::LongLong => "long long",
            ScalarKind::UnsignedLongLong => "unsigned long long",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
            ScalarKind::LongDouble => "long double",
        }
    }

    pub fn is_integral(self) -> bool {
        !self.is_floating_point()
    }

    /// Check if this kind is a floating point type
    pub fn is_floating_point(self) -> bool {
        matches!(
            self,
            ScalarKind::Float | ScalarKind::Double | ScalarKind::LongDouble
        )
    }

    /// Check if `T(-1) < T(0)` holds for this kind
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            ScalarKind::Char
                | ScalarKind::SignedChar
                | ScalarKind::WChar
                | ScalarKind::Short
                | ScalarKind::Int
                | ScalarKind::Long
                | ScalarKind::LongLong
                | ScalarKind::Float
                | ScalarKind::Double
                | ScalarKind::LongDouble
        )
    }

    /// Object size in bytes
    pub fn size(self) -> usize {
        match self {
            ScalarKind::Bool
            | ScalarKind::Char
            | ScalarKind::SignedChar
            | ScalarKind::UnsignedChar
            | ScalarKind::Char8 => 1,
            ScalarKind::Char16 | ScalarKind::Short | ScalarKind::UnsignedShort => 2,
            ScalarKind::WChar
            | ScalarKind::Char32
            | ScalarKind::Int
            | ScalarKind::UnsignedInt
            | ScalarKind::Float => 4,
            ScalarKind::Long
            | ScalarKind::UnsignedLong
            | ScalarKind::LongLong
            | ScalarKind::UnsignedLongLong
            | ScalarKind::Double => 8,
            ScalarKind::LongDouble => 16,
        }
    }

    /// Signed integer kind of the same rank, `None` for `bool` and floating kinds
    pub fn to_signed(self) -> Option<ScalarKind> {
        match self {
            ScalarKind::Bool | ScalarKind::Float | ScalarKind::Double | ScalarKind::LongDouble => {
                None
            }
            ScalarKind::Char | ScalarKind::SignedChar | ScalarKind::UnsignedChar => {
                Some(ScalarKind::SignedChar)
            }
            ScalarKind::Short | ScalarKind::UnsignedShort => Some(ScalarKind::Short),
            ScalarKind::Int | ScalarKind::UnsignedInt => Some(ScalarKind::Int),
            ScalarKind::Long | ScalarKind::UnsignedLong => Some(ScalarKind::Long),
            ScalarKind::LongLong | ScalarKind::UnsignedLongLong => Some(ScalarKind::LongLong),
            ScalarKind::WChar | ScalarKind::Char8 | ScalarKind::Char16 | ScalarKind::Char32 => {
                Self::signed_of_size(self.size())
            }
        }
    }

    /// Unsigned integer kind of the same rank, `None` for `bool` and floating kinds
    pub fn to_unsigned(self) -> Option<ScalarKind> {
        let signed = self.to_signed()?;
        Some(match signed {
            ScalarKind::SignedChar => ScalarKind::UnsignedChar,
            ScalarKind::Short => ScalarKind::UnsignedShort,
            ScalarKind::Int => ScalarKind::UnsignedInt,
            ScalarKind::Long => ScalarKind::UnsignedLong,
            _ => ScalarKind::UnsignedLongLong,
        })
    }

    /// Smallest standard signed integer kind with the given size
    pub(crate) fn signed_of_size(size: usize) -> Option<ScalarKind> {
        [
            ScalarKind::SignedChar,
            ScalarKind::Short,
            ScalarKind::Int,
            ScalarKind::Long,
        ]
        .into_iter()
        .find(|k| k.size() == size)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enumeration declaration carried by an enum descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumDecl {
    pub name: String,
    /// `enum class` / `enum struct`
    pub scoped: bool,
    pub underlying: ScalarKind,
}

/// Function signature: return type and adjusted parameter types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSig {
    pub ret: Box<Type>,
    pub params: Vec<Type>,
    /// Trailing `...`
    pub variadic: bool,
}

/// Kind tag of one descriptor level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Void,
    /// `decltype(nullptr)`
    NullPointer,
    Scalar(ScalarKind),
    Pointer(Box<Type>),
    LvalueRef(Box<Type>),
    RvalueRef(Box<Type>),
    /// `T[N]` or `T[]`; the element is stored unqualified
    Array {
        element: Box<Type>,
        bound: Option<usize>,
    },
    Function(FunctionSig),
    /// `T C::*`
    MemberPointer {
        class: Box<Type>,
        pointee: Box<Type>,
    },
    Class(String),
    Union(String),
    Enum(EnumDecl),
}

/// Canonical type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    kind: TypeKind,
    quals: Qualifiers,
}

impl Type {
    /// Assemble a descriptor without formation checks.
    ///
    /// Callers must already hold a canonical `kind`; qualifiers are still
    /// normalised for kinds that cannot carry them.
    pub(crate) fn from_parts(kind: TypeKind, quals: Qualifiers) -> Type {
        let quals = if Self::kind_accepts_qualifiers(&kind) {
            quals
        } else {
            Qualifiers::NONE
        };
        Type { kind, quals }
    }

    fn kind_accepts_qualifiers(kind: &TypeKind) -> bool {
        !matches!(
            kind,
            TypeKind::Function(_) | TypeKind::LvalueRef(_) | TypeKind::RvalueRef(_)
        )
    }

    pub fn void() -> Type {
        Type::from_parts(TypeKind::Void, Qualifiers::NONE)
    }

    pub fn null_pointer() -> Type {
        Type::from_parts(TypeKind::NullPointer, Qualifiers::NONE)
    }

    pub fn scalar(kind: ScalarKind) -> Type {
        Type::from_parts(TypeKind::Scalar(kind), Qualifiers::NONE)
    }

    pub fn bool() -> Type {
        Type::scalar(ScalarKind::Bool)
    }

    pub fn int() -> Type {
        Type::scalar(ScalarKind::Int)
    }

    pub fn float() -> Type {
        Type::scalar(ScalarKind::Float)
    }

    pub fn double() -> Type {
        Type::scalar(ScalarKind::Double)
    }

    pub fn class(name: impl Into<String>) -> Type {
        Type::from_parts(TypeKind::Class(name.into()), Qualifiers::NONE)
    }

    pub fn union(name: impl Into<String>) -> Type {
        Type::from_parts(TypeKind::Union(name.into()), Qualifiers::NONE)
    }

    pub fn enumeration(name: impl Into<String>, scoped: bool, underlying: ScalarKind) -> Type {
        Type::from_parts(
            TypeKind::Enum(EnumDecl {
                name: name.into(),
                scoped,
                underlying,
            }),
            Qualifiers::NONE,
        )
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Qualifiers attached at the outermost level
    pub fn qualifiers(&self) -> Qualifiers {
        self.quals
    }

    /// Add qualifiers at the outermost level.
    ///
    /// Total: function and reference levels absorb the request unchanged.
    pub fn qualified(&self, quals: Qualifiers) -> Type {
        Type::from_parts(self.kind.clone(), self.quals | quals)
    }

    /// Replace the outermost qualifiers
    pub fn with_qualifiers(&self, quals: Qualifiers) -> Type {
        Type::from_parts(self.kind.clone(), quals)
    }

    /// Same descriptor with no outermost qualifiers
    pub fn unqualified(&self) -> Type {
        self.with_qualifiers(Qualifiers::NONE)
    }

    /// Element of an array level, carrying the array's qualifiers
    pub fn array_element(&self) -> Option<Type> {
        match &self.kind {
            TypeKind::Array { element, .. } => Some(element.qualified(self.quals)),
            _ => None,
        }
    }
}
