//! Parser for type notation and queries
//!
//! A recursive descent parser over the token stream. Abstract declarators are
//! parsed into [`Declarator`] trees exactly as written; binding order
//! (pointer operators, then suffixes, then the parenthesized inner declarator)
//! is applied during elaboration.

use crate::ast::*;
use crate::common::Span;
use crate::diagnostics::{QueryError, SourceFile};
use crate::lexer::{Token, TokenKind};
use crate::types::{Qualifiers, ScalarKind};

type Result<T> = std::result::Result<T, QueryError>;

/// Parse a token stream holding exactly one type
pub fn parse_type(tokens: &[Token], source: &SourceFile) -> Result<TypeExpr> {
    let mut parser = Parser::new(tokens, source);
    let ty = parser.parse_type_expr()?;
    parser.expect(TokenKind::Eof, "end of input")?;
    Ok(ty)
}

/// Parse a token stream holding exactly one query
pub fn parse_query(tokens: &[Token], source: &SourceFile) -> Result<QueryExpr> {
    let mut parser = Parser::new(tokens, source);
    let query = parser.parse_query()?;
    parser.expect(TokenKind::Eof, "end of input")?;
    Ok(query)
}

/// Parser state
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    source: &'a SourceFile,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], source: &'a SourceFile) -> Self {
        Self {
            tokens,
            pos: 0,
            source,
        }
    }

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).or_else(|| self.tokens.last())
    }

    fn peek(&self) -> TokenKind {
        self.current().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    fn peek_n(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    fn span(&self) -> Span {
        self.current().map(|t| t.span).unwrap_or_default()
    }

    /// End of the last consumed token
    fn prev_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|p| self.tokens.get(p))
            .map(|t| t.span.end)
            .unwrap_or(0)
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.prev_end().max(start))
    }

    fn text(&self) -> &'a str {
        self.current().map(|t| t.text.as_str()).unwrap_or("")
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.tokens.get(self.pos);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token> {
        if self.at(kind) {
            self.advance().ok_or_else(|| self.unexpected(expected))
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_ident(&mut self) -> Result<String> {
        let tok = self.expect(TokenKind::Ident, "an identifier")?;
        Ok(tok.text.clone())
    }

    fn unexpected(&self, expected: &str) -> QueryError {
        if self.at(TokenKind::Eof) {
            QueryError::UnexpectedEof {
                expected: expected.to_string(),
                span: self.span().into(),
                src: self.source.to_named_source(),
            }
        } else {
            QueryError::UnexpectedToken {
                expected: expected.to_string(),
                found: format!("`{}`", self.text()),
                span: self.span().into(),
                src: self.source.to_named_source(),
            }
        }
    }

    // ==================== QUERIES ====================

    fn parse_query(&mut self) -> Result<QueryExpr> {
        let start = self.span();
        match self.peek() {
            TokenKind::True | TokenKind::False => {
                let value = self.at(TokenKind::True);
                self.advance();
                Ok(QueryExpr::Bool { value, span: start })
            }
            TokenKind::IntLit => {
                let text = self.text();
                let value = text.parse::<usize>().map_err(|_| QueryError::InvalidToken {
                    span: start.into(),
                    src: self.source.to_named_source(),
                })?;
                self.advance();
                Ok(QueryExpr::Size { value, span: start })
            }
            TokenKind::Ident if self.peek_n(1) == TokenKind::Lt => self.parse_call(),
            _ => Ok(QueryExpr::Type(self.parse_type_expr()?)),
        }
    }

    fn parse_call(&mut self) -> Result<QueryExpr> {
        let op_span = self.span();
        let op = self.expect_ident()?;
        self.expect(TokenKind::Lt, "`<`")?;

        let mut args = Vec::new();
        if !self.at(TokenKind::Gt) {
            loop {
                args.push(self.parse_query()?);
                if self.at(TokenKind::Comma) {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.expect(TokenKind::Gt, "`,` or `>`")?;

        Ok(QueryExpr::Call {
            op,
            op_span,
            args,
            span: self.span_from(op_span.start),
        })
    }

    // ==================== TYPES ====================

    fn parse_type_expr(&mut self) -> Result<TypeExpr> {
        let start = self.span().start;
        let spec = self.parse_decl_spec()?;
        let declarator = self.parse_declarator()?;
        Ok(TypeExpr {
            spec,
            declarator,
            span: self.span_from(start),
        })
    }

    fn parse_decl_spec(&mut self) -> Result<DeclSpec> {
        let start = self.span().start;
        let mut quals = Qualifiers::NONE;
        let mut words = ScalarWords::default();
        let mut base: Option<BaseSpec> = None;

        loop {
            let kind = self.peek();
            match kind {
                TokenKind::Const => {
                    self.advance();
                    quals |= Qualifiers::CONST;
                }
                TokenKind::Volatile => {
                    self.advance();
                    quals |= Qualifiers::VOLATILE;
                }
                k if k.is_scalar_word() && base.is_none() => {
                    let span = self.span();
                    self.advance();
                    if !words.add(k) {
                        return Err(self.invalid_specifier(start, span));
                    }
                }
                TokenKind::Void if base.is_none() && words.is_empty() => {
                    self.advance();
                    base = Some(BaseSpec::Void);
                }
                TokenKind::NullptrT if base.is_none() && words.is_empty() => {
                    self.advance();
                    base = Some(BaseSpec::NullPointer);
                }
                TokenKind::Decltype if base.is_none() && words.is_empty() => {
                    self.advance();
                    self.expect(TokenKind::LParen, "`(`")?;
                    self.expect(TokenKind::Nullptr, "`nullptr`")?;
                    self.expect(TokenKind::RParen, "`)`")?;
                    base = Some(BaseSpec::NullPointer);
                }
                TokenKind::Class | TokenKind::Struct if base.is_none() && words.is_empty() => {
                    self.advance();
                    base = Some(BaseSpec::Class(self.expect_ident()?));
                }
                TokenKind::Union if base.is_none() && words.is_empty() => {
                    self.advance();
                    base = Some(BaseSpec::Union(self.expect_ident()?));
                }
                TokenKind::Enum if base.is_none() && words.is_empty() => {
                    base = Some(self.parse_enum_spec()?);
                }
                // `C::*` starts a declarator, not a specifier
                TokenKind::Ident
                    if base.is_none()
                        && words.is_empty()
                        && self.peek_n(1) != TokenKind::ColonColon =>
                {
                    let name = self.text().to_string();
                    self.advance();
                    base = Some(BaseSpec::Named(name));
                }
                k if k.is_scalar_word() || is_base_start(k) => {
                    let span = self.span();
                    self.advance();
                    return Err(self.invalid_specifier(start, span));
                }
                _ => break,
            }
        }

        let span = self.span_from(start);
        let base = match base {
            Some(base) => base,
            None if words.is_empty() => return Err(self.unexpected("a type")),
            None => BaseSpec::Scalar(words.resolve().ok_or_else(|| {
                QueryError::InvalidSpecifier {
                    words: words.to_string(),
                    span: span.into(),
                    src: self.source.to_named_source(),
                }
            })?),
        };

        Ok(DeclSpec { base, quals, span })
    }

    fn parse_enum_spec(&mut self) -> Result<BaseSpec> {
        self.expect(TokenKind::Enum, "`enum`")?;
        let scoped = matches!(self.peek(), TokenKind::Class | TokenKind::Struct);
        if scoped {
            self.advance();
        }
        let name = self.expect_ident()?;

        let underlying = if self.at(TokenKind::Colon) {
            self.advance();
            let start = self.span().start;
            let mut words = ScalarWords::default();
            while self.peek().is_scalar_word() {
                let span = self.span();
                let kind = self.peek();
                self.advance();
                if !words.add(kind) {
                    return Err(self.invalid_specifier(start, span));
                }
            }
            if words.is_empty() {
                return Err(self.unexpected("an underlying integer type"));
            }
            let span = self.span_from(start);
            match words.resolve() {
                Some(kind) => Some(kind),
                None => {
                    return Err(QueryError::InvalidSpecifier {
                        words: words.to_string(),
                        span: span.into(),
                        src: self.source.to_named_source(),
                    });
                }
            }
        } else {
            None
        };

        Ok(BaseSpec::Enum {
            name,
            scoped,
            underlying,
        })
    }

    fn invalid_specifier(&self, start: usize, at: Span) -> QueryError {
        let span = Span::new(start, at.end);
        QueryError::InvalidSpecifier {
            words: self.source.content[span.start..span.end].to_string(),
            span: span.into(),
            src: self.source.to_named_source(),
        }
    }

    fn parse_declarator(&mut self) -> Result<Declarator> {
        let mut ops = Vec::new();
        loop {
            let start = self.span().start;
            let kind = match self.peek() {
                TokenKind::Star => {
                    self.advance();
                    PtrOpKind::Pointer(self.parse_cv())
                }
                TokenKind::Amp => {
                    self.advance();
                    PtrOpKind::LvalueRef
                }
                TokenKind::AmpAmp => {
                    self.advance();
                    PtrOpKind::RvalueRef
                }
                TokenKind::Ident if self.peek_n(1) == TokenKind::ColonColon => {
                    let class = self.expect_ident()?;
                    self.expect(TokenKind::ColonColon, "`::`")?;
                    self.expect(TokenKind::Star, "`*`")?;
                    PtrOpKind::Member {
                        class,
                        quals: self.parse_cv(),
                    }
                }
                _ => break,
            };
            ops.push(PtrOp {
                kind,
                span: self.span_from(start),
            });
        }

        let nested = if self.at(TokenKind::LParen) && self.starts_nested_declarator() {
            self.advance();
            let inner = self.parse_declarator()?;
            self.expect(TokenKind::RParen, "`)`")?;
            Some(Box::new(inner))
        } else {
            None
        };

        let mut suffixes = Vec::new();
        loop {
            let start = self.span().start;
            let kind = match self.peek() {
                TokenKind::LBracket => {
                    self.advance();
                    let bound = if self.at(TokenKind::IntLit) {
                        let span = self.span();
                        let value = self.text().parse::<usize>().map_err(|_| {
                            QueryError::InvalidToken {
                                span: span.into(),
                                src: self.source.to_named_source(),
                            }
                        })?;
                        self.advance();
                        Some(value)
                    } else {
                        None
                    };
                    self.expect(TokenKind::RBracket, "`]`")?;
                    SuffixKind::Array(bound)
                }
                TokenKind::LParen => self.parse_params()?,
                _ => break,
            };
            suffixes.push(Suffix {
                kind,
                span: self.span_from(start),
            });
        }

        Ok(Declarator {
            ops,
            nested,
            suffixes,
        })
    }

    /// `(` opens an inner declarator only when a pointer operator follows;
    /// otherwise it opens a parameter list.
    fn starts_nested_declarator(&self) -> bool {
        match self.peek_n(1) {
            TokenKind::Star | TokenKind::Amp | TokenKind::AmpAmp => true,
            TokenKind::Ident => self.peek_n(2) == TokenKind::ColonColon,
            _ => false,
        }
    }

    fn parse_cv(&mut self) -> Qualifiers {
        let mut quals = Qualifiers::NONE;
        loop {
            match self.peek() {
                TokenKind::Const => quals |= Qualifiers::CONST,
                TokenKind::Volatile => quals |= Qualifiers::VOLATILE,
                _ => return quals,
            }
            self.advance();
        }
    }

    fn parse_params(&mut self) -> Result<SuffixKind> {
        self.expect(TokenKind::LParen, "`(`")?;
        let mut params = Vec::new();
        let mut variadic = false;

        if self.at(TokenKind::Void) && self.peek_n(1) == TokenKind::RParen {
            self.advance();
        } else if self.at(TokenKind::Ellipsis) {
            self.advance();
            variadic = true;
        } else if !self.at(TokenKind::RParen) {
            loop {
                params.push(self.parse_type_expr()?);
                if !self.at(TokenKind::Comma) {
                    break;
                }
                self.advance();
                if self.at(TokenKind::Ellipsis) {
                    self.advance();
                    variadic = true;
                    break;
                }
            }
        }

        self.expect(TokenKind::RParen, "`)`")?;
        Ok(SuffixKind::Function { params, variadic })
    }
}

fn is_base_start(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Void
            | TokenKind::NullptrT
            | TokenKind::Decltype
            | TokenKind::Class
            | TokenKind::Struct
            | TokenKind::Union
            | TokenKind::Enum
    )
}

/// Arithmetic type keywords seen in one specifier sequence
#[derive(Debug, Clone, Copy, Default)]
struct ScalarWords {
    signed: bool,
    unsigned: bool,
    short: bool,
    long: u8,
    int: bool,
    char: bool,
    wchar: bool,
    char8: bool,
    char16: bool,
    char32: bool,
    bool: bool,
    float: bool,
    double: bool,
}

impl ScalarWords {
    /// Record a keyword; false if it repeats one already seen
    fn add(&mut self, kind: TokenKind) -> bool {
        let flag = match kind {
            TokenKind::Long => {
                self.long += 1;
                return self.long <= 2;
            }
            TokenKind::Signed => &mut self.signed,
            TokenKind::Unsigned => &mut self.unsigned,
            TokenKind::Short => &mut self.short,
            TokenKind::Int => &mut self.int,
            TokenKind::Char => &mut self.char,
            TokenKind::WChar => &mut self.wchar,
            TokenKind::Char8 => &mut self.char8,
            TokenKind::Char16 => &mut self.char16,
            TokenKind::Char32 => &mut self.char32,
            TokenKind::Bool => &mut self.bool,
            TokenKind::Float => &mut self.float,
            TokenKind::Double => &mut self.double,
            _ => return false,
        };
        !std::mem::replace(flag, true)
    }

    fn is_empty(&self) -> bool {
        self.to_string().is_empty()
    }

    fn resolve(&self) -> Option<ScalarKind> {
        let sign = self.signed || self.unsigned;
        if self.signed && self.unsigned {
            return None;
        }

        let standalone = [
            (self.bool, ScalarKind::Bool),
            (self.wchar, ScalarKind::WChar),
            (self.char8, ScalarKind::Char8),
            (self.char16, ScalarKind::Char16),
            (self.char32, ScalarKind::Char32),
            (self.float, ScalarKind::Float),
        ];
        let mut chosen = standalone.iter().filter(|(seen, _)| *seen);
        if let Some(&(_, kind)) = chosen.next() {
            let mixed = chosen.next().is_some()
                || sign
                || self.short
                || self.long > 0
                || self.int
                || self.char
                || self.double;
            return (!mixed).then_some(kind);
        }

        if self.double {
            if sign || self.short || self.int || self.char || self.long > 1 {
                return None;
            }
            return Some(if self.long == 1 {
                ScalarKind::LongDouble
            } else {
                ScalarKind::Double
            });
        }

        if self.char {
            if self.short || self.long > 0 || self.int {
                return None;
            }
            return Some(match (self.signed, self.unsigned) {
                (true, _) => ScalarKind::SignedChar,
                (_, true) => ScalarKind::UnsignedChar,
                _ => ScalarKind::Char,
            });
        }

        if self.short && self.long > 0 {
            return None;
        }
        if !(sign || self.short || self.long > 0 || self.int) {
            return None;
        }
        let signed = match (self.short, self.long) {
            (true, _) => ScalarKind::Short,
            (false, 0) => ScalarKind::Int,
            (false, 1) => ScalarKind::Long,
            _ => ScalarKind::LongLong,
        };
        if self.unsigned {
            signed.to_unsigned()
        } else {
            Some(signed)
        }
    }
}

impl std::fmt::Display for ScalarWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words: Vec<&str> = Vec::new();
        let flags = [
            (self.signed, "signed"),
            (self.unsigned, "unsigned"),
            (self.short, "short"),
            (self.long > 0, "long"),
            (self.long > 1, "long"),
            (self.int, "int"),
            (self.char, "char"),
            (self.wchar, "wchar_t"),
            (self.char8, "char8_t"),
            (self.char16, "char16_t"),
            (self.char32, "char32_t"),
            (self.bool, "bool"),
            (self.float, "float"),
            (self.double, "double"),
        ];
        words.extend(flags.iter().filter(|(seen, _)| *seen).map(|&(_, w)| w));
        write!(f, "{}", words.join(" "))
    }
}
