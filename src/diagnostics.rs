//! Rendering of source locations for user-facing errors.
//!
//! A [`Span`]'s line and column are printed verbatim; nothing is recomputed
//! from offsets here.

use std::fmt::Write;

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::stream::CharStream,
    Span,
};

const TAB_WIDTH: usize = 4;

/// Text of the 1-based `line` of `source`, without its line terminator.
pub fn line_text(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders `message` pointing at `span`:
///
/// ```text
/// Error: message (tip)
/// -> final.lang
///    |
/// 20 | let a = #;
///    | --------^
/// ```
pub fn render(source: &str, file: &str, span: Span, message: &str, tip: &ErrorTip) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    if let ErrorTip::None = tip {
        let _ = writeln!(out, "Error: {}", message);
    } else {
        let _ = writeln!(out, "Error: {} ({})", message, tip);
    }
    let _ = writeln!(out, "-> {}", file);

    let Some(text) = line_text(source, span.line()) else {
        return out;
    };

    let line_str = span.line().to_string();
    let padding = line_str.len() + 2;

    let (expanded, caret) = expand_tabs(text, span.column());
    let (text_removed, removed_whitespace) = remove_starting_whitespace(&expanded);
    let arrows = caret.saturating_sub(removed_whitespace).max(1);

    let _ = writeln!(out, "{:>padding$}", "|");
    let _ = writeln!(out, "{} | {}", line_str, text_removed.trim_end());
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

/// Renders the diagnostic for `bytes` that failed to decode as UTF-8,
/// pointing at the first byte that is not part of valid text.
///
/// Any other error is rendered as a single line without a snippet.
pub fn invalid_source(bytes: &[u8], file: &str, err: &Error) -> String {
    let Error::InvalidSourceType { valid_up_to } = *err else {
        return format!("Error: {}\n", err);
    };

    // Decoding stopped where the valid prefix ends.
    let prefix = bytes.get(..valid_up_to).unwrap_or(bytes);
    let mut stream = CharStream::new(String::from_utf8_lossy(prefix));
    while !stream.is_eof() {
        stream.advance();
    }
    let at = stream.peek().2.span();
    debug!(valid_up_to, line = at.line(), column = at.column(), "located invalid byte");

    render(
        &String::from_utf8_lossy(bytes),
        file,
        at,
        err.get_error_name(),
        &err.get_tip(),
    )
}

/// Replaces tabs with spaces and returns the display column of `column`.
fn expand_tabs(text: &str, column: usize) -> (String, usize) {
    let width = |ch: char| if ch == '\t' { TAB_WIDTH } else { 1 };
    let before = column.saturating_sub(1);
    let length = text.chars().count();

    let caret = text.chars().take(before).map(width).sum::<usize>()
        + before.saturating_sub(length)
        + 1;

    (text.replace('\t', &" ".repeat(TAB_WIDTH)), caret)
}

fn remove_starting_whitespace(text: &str) -> (&str, usize) {
    let trimmed = text.trim_start_matches(' ');
    (trimmed, text.len() - trimmed.len())
}
