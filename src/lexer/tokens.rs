//! Token definitions for the type notation lexer

use crate::common::Span;
use logos::Logos;

/// A token with its kind, span, and text
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

/// Token kinds recognized by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // Qualifiers
    #[token("const")]
    Const,
    #[token("volatile")]
    Volatile,

    // Fundamental type keywords
    #[token("void")]
    Void,
    #[token("nullptr_t")]
    NullptrT,
    #[token("decltype")]
    Decltype,
    #[token("nullptr")]
    Nullptr,
    #[token("bool")]
    Bool,
    #[token("char")]
    Char,
    #[token("wchar_t")]
    WChar,
    #[token("char8_t")]
    Char8,
    #[token("char16_t")]
    Char16,
    #[token("char32_t")]
    Char32,
    #[token("short")]
    Short,
    #[token("int")]
    Int,
    #[token("long")]
    Long,
    #[token("float")]
    Float,
    #[token("double")]
    Double,
    #[token("signed")]
    Signed,
    #[token("unsigned")]
    Unsigned,

    // Elaborated type specifiers
    #[token("class")]
    Class,
    #[token("struct")]
    Struct,
    #[token("union")]
    Union,
    #[token("enum")]
    Enum,

    // Query literals
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[regex(r"[0-9]+")]
    IntLit,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // Punctuation
    #[token("*")]
    Star,
    #[token("&")]
    Amp,
    #[token("&&")]
    AmpAmp,
    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token("...")]
    Ellipsis,

    // End of input, appended by `lex`
    Eof,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Const => "const",
            TokenKind::Volatile => "volatile",
            TokenKind::Void => "void",
            TokenKind::NullptrT => "nullptr_t",
            TokenKind::Decltype => "decltype",
            TokenKind::Nullptr => "nullptr",
            TokenKind::Bool => "bool",
            TokenKind::Char => "char",
            TokenKind::WChar => "wchar_t",
            TokenKind::Char8 => "char8_t",
            TokenKind::Char16 => "char16_t",
            TokenKind::Char32 => "char32_t",
            TokenKind::Short => "short",
            TokenKind::Int => "int",
            TokenKind::Long => "long",
            TokenKind::Float => "float",
            TokenKind::Double => "double",
            TokenKind::Signed => "signed",
            TokenKind::Unsigned => "unsigned",
            TokenKind::Class => "class",
            TokenKind::Struct => "struct",
            TokenKind::Union => "union",
            TokenKind::Enum => "enum",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::IntLit => "<int>",
            TokenKind::Ident => "<ident>",
            TokenKind::Star => "*",
            TokenKind::Amp => "&",
            TokenKind::AmpAmp => "&&",
            TokenKind::ColonColon => "::",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Ellipsis => "...",
            TokenKind::Eof => "<eof>",
        }
    }

    /// Keywords that spell (part of) a built-in arithmetic type
    pub fn is_scalar_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Bool
                | TokenKind::Char
                | TokenKind::WChar
                | TokenKind::Char8
                | TokenKind::Char16
                | TokenKind::Char32
                | TokenKind::Short
                | TokenKind::Int
                | TokenKind::Long
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::Signed
                | TokenKind::Unsigned
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
