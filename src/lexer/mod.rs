//! Lexical foundation for the compiler.
//!
//! This module holds the pieces a scanner is built on:
//!
//! - `stream` - positioned character access with `peek`/`advance` and an
//!   end-of-input sentinel
//! - `tokens` - the closed `TokenKind` set and the `Token` value scanners emit

pub mod stream;
pub mod tokens;
