#![allow(clippy::module_inception)]

use std::fmt::Display;

use serde::Serialize;

use crate::errors::errors::{Error, Result};

pub mod diagnostics;
pub mod errors;
pub mod lexer;
pub mod macros;

/// Location produced by the character stream.
///
/// Covers the half-open range `[start, end)` of character offsets; `line`
/// and `column` are 1-based and describe `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    start: usize,
    end: usize,
    line: usize,
    column: usize,
}

impl Position {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Result<Self> {
        validate(start, end, line, column)?;
        Ok(Position::new_unchecked(start, end, line, column))
    }

    /// Callers must already hold `start <= end` and a 1-based line/column.
    pub(crate) fn new_unchecked(start: usize, end: usize, line: usize, column: usize) -> Self {
        debug_assert!(validate(start, end, line, column).is_ok());
        Position {
            start,
            end,
            line,
            column,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
            line: self.line,
            column: self.column,
        }
    }
}

impl From<Span> for Position {
    fn from(span: Span) -> Self {
        Position {
            start: span.start,
            end: span.end,
            line: span.line,
            column: span.column,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Location tag attached to tokens and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    start: usize,
    end: usize,
    line: usize,
    column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Result<Self> {
        Position::new(start, end, line, column).map(Span::from)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// Line and column are taken from whichever operand starts first, so the
    /// result still describes its own `start`.
    pub fn merge(self, other: Span) -> Span {
        let first = if other.start < self.start { other } else { self };

        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl From<Position> for Span {
    fn from(position: Position) -> Self {
        position.span()
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

fn validate(start: usize, end: usize, line: usize, column: usize) -> Result<()> {
    if end < start {
        return Err(Error::InvalidRange { start, end });
    }

    if line < 1 || column < 1 {
        return Err(Error::InvalidLineColumn { line, column });
    }

    Ok(())
}
