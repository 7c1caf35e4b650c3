//! Utility macros for the compiler.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a kind and a span, or from a
//!   kind and the four span fields

/// Creates a Token instance.
///
/// # Example
///
/// ```
/// use mansa::{lexer::tokens::TokenKind, Span, MK_TOKEN};
///
/// let token = MK_TOKEN!(TokenKind::Int, 10, 13, 5, 8);
/// assert_eq!(token.span(), Span::new(10, 13, 5, 8).unwrap());
/// ```
///
/// The four-field form panics on an invalid span, so keep it to tests and
/// literals known to be valid.
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr) => {
        $crate::lexer::tokens::Token::new($kind, $span)
    };
    ($kind:expr, $start:expr, $end:expr, $line:expr, $column:expr) => {
        $crate::lexer::tokens::Token::new(
            $kind,
            $crate::Span::new($start, $end, $line, $column).expect("MK_TOKEN! span is invalid"),
        )
    };
}
