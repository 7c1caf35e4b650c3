use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display, str::FromStr};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{
    errors::errors::{Error, Result},
    Span,
};

use super::stream::CharStream;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("mut", TokenKind::Mut);
        map.insert("const", TokenKind::Const);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("return", TokenKind::Return);
        map.insert("struct", TokenKind::Struct);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
    static ref TAG_LOOKUP: HashMap<&'static str, TokenKind> =
        TokenKind::iter().map(|kind| (kind.tag(), kind)).collect();
}

/// Lexical categories. Each variant's tag is its snake_case name and is
/// what gets displayed and serialized.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Eof,
    Illegal,

    Ident,
    Int,
    Float,
    Str,
    Char,

    Assign, // =
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,  // !
    Eq,    // ==
    NotEq, // !=
    Lt,
    LtEq,
    Gt,
    GtEq,
    And, // &&
    Or,  // ||
    Arrow,

    Dot,
    Comma,
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Reserved
    Fn,
    Let,
    Mut,
    Const,
    If,
    Else,
    While,
    For,
    In,
    Return,
    Struct,
    True,
    False,
}

impl TokenKind {
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Reserved word spelled by `ident`, if any.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        RESERVED_LOOKUP.get(ident).copied()
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Fn
                | TokenKind::Let
                | TokenKind::Mut
                | TokenKind::Const
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::In
                | TokenKind::Return
                | TokenKind::Struct
                | TokenKind::True
                | TokenKind::False
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::Float | TokenKind::Str | TokenKind::Char
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for TokenKind {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        TAG_LOOKUP
            .get(tag)
            .copied()
            .ok_or_else(|| Error::UnknownTokenKind {
                tag: tag.to_string(),
            })
    }
}

/// One lexical unit: a kind and where it came from. Nothing else is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Token {
        Token { kind, span }
    }

    pub fn eof(span: Span) -> Token {
        Token::new(TokenKind::Eof, span)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Source text covered by this token in `stream`.
    pub fn text<'s>(&self, stream: &'s CharStream) -> Result<&'s str> {
        stream.sub(self.span.start(), self.span.end())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.span)
    }
}
