//! Lexer for type notation and queries

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::common::Span;
use crate::diagnostics::{QueryError, SourceFile};
use logos::Logos;

/// Tokenize `source`, appending an `Eof` token
pub fn lex(source: &SourceFile) -> Result<Vec<Token>, QueryError> {
    let text: &str = &source.content;
    let mut lexer = TokenKind::lexer(text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                span,
                text: lexer.slice().to_string(),
            }),
            Err(()) => {
                return Err(QueryError::InvalidToken {
                    span: span.into(),
                    src: source.to_named_source(),
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span::new(text.len(), text.len()),
        text: String::new(),
    });
    Ok(tokens)
}
