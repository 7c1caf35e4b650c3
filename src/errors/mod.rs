//! Error types for the lexical layer.
//!
//! Every error here is a caller error surfaced synchronously at the call
//! site. Nothing is retried or swallowed; the caller decides whether the
//! failure is fatal for the compilation as a whole.

pub mod errors;

#[cfg(test)]
mod tests;
