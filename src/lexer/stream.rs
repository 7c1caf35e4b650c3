use std::iter::{once, FusedIterator};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, Result},
    Position,
};

/// Character returned once the cursor has run past the last source character.
///
/// End of input is decided by the cursor, not by this value: a literal NUL in
/// the source is still an ordinary character.
pub const EOF: char = '\0';

/// `(index, character, position)` as produced by [`CharStream::peek`] and
/// [`CharStream::advance`].
pub type StreamItem = (usize, char, Position);

/// Source text with a line/column aware cursor.
///
/// Offsets are character indices. The text itself never changes after
/// construction; only [`CharStream::advance`] moves the cursor.
#[derive(Debug, Clone)]
pub struct CharStream {
    source: String,
    chars: Vec<char>,
    // byte offset of every character, followed by `source.len()`
    offsets: Vec<usize>,
    index: usize,
    line: usize,
    column: usize,
}

impl CharStream {
    pub fn new(source: impl Into<String>) -> CharStream {
        let source = source.into();
        let chars: Vec<char> = source.chars().collect();
        let offsets = source
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(once(source.len()))
            .collect();

        debug!(chars = chars.len(), bytes = source.len(), "created char stream");

        CharStream {
            source,
            chars,
            offsets,
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// Builds a stream from raw bytes, rejecting anything that is not UTF-8.
    pub fn from_utf8(bytes: Vec<u8>) -> Result<CharStream> {
        let source = String::from_utf8(bytes).map_err(|err| Error::from(err.utf8_error()))?;

        Ok(CharStream::new(source))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of characters in the source.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_eof(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Looks at the character under the cursor without moving it.
    ///
    /// At end of input this returns [`EOF`] with `index == len()` and a
    /// zero-width position, as many times as it is called.
    pub fn peek(&self) -> StreamItem {
        if self.is_eof() {
            let end = self.chars.len();
            return (
                end,
                EOF,
                Position::new_unchecked(end, end, self.line, self.column),
            );
        }

        (
            self.index,
            self.chars[self.index],
            Position::new_unchecked(self.index, self.index + 1, self.line, self.column),
        )
    }

    /// Returns what [`CharStream::peek`] would, then moves the cursor past it.
    ///
    /// At end of input the index stays put and [`EOF`] is returned again on
    /// every call; the column still counts up.
    pub fn advance(&mut self) -> StreamItem {
        let item = self.peek();

        if !self.is_eof() {
            self.index += 1;

            if self.is_eof() {
                debug!(
                    index = self.index,
                    line = self.line,
                    "char stream reached end of input"
                );
            }
        }

        if item.1 == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        item
    }

    /// Slice of the source covering characters `[start, end)`.
    pub fn sub(&self, start: usize, end: usize) -> Result<&str> {
        trace!(start, end, "char stream sub");

        if start > end || end > self.chars.len() {
            return Err(Error::OutOfBounds {
                start,
                end,
                length: self.chars.len(),
            });
        }

        Ok(&self.source[self.offsets[start]..self.offsets[end]])
    }
}

/// Shared step of both sequence forms: one triple per remaining character,
/// then a single EOF triple, then nothing.
fn next_item(stream: &mut CharStream, finished: &mut bool) -> Option<StreamItem> {
    if *finished {
        return None;
    }

    if stream.is_eof() {
        *finished = true;
    }

    Some(stream.advance())
}

fn remaining(stream: &CharStream, finished: bool) -> usize {
    if finished {
        0
    } else {
        stream.len() - stream.index() + 1
    }
}

/// Consuming sequence over a [`CharStream`]. It cannot be restarted.
#[derive(Debug)]
pub struct IntoIter {
    stream: CharStream,
    finished: bool,
}

impl Iterator for IntoIter {
    type Item = StreamItem;

    fn next(&mut self) -> Option<StreamItem> {
        next_item(&mut self.stream, &mut self.finished)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = remaining(&self.stream, self.finished);
        (n, Some(n))
    }
}

impl ExactSizeIterator for IntoIter {}

impl FusedIterator for IntoIter {}

impl IntoIterator for CharStream {
    type Item = StreamItem;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter {
            stream: self,
            finished: false,
        }
    }
}

/// Sequence that drives a borrowed stream's cursor.
///
/// Once it ends the stream is left at end of input.
#[derive(Debug)]
pub struct Iter<'a> {
    stream: &'a mut CharStream,
    finished: bool,
}

impl Iterator for Iter<'_> {
    type Item = StreamItem;

    fn next(&mut self) -> Option<StreamItem> {
        next_item(&mut *self.stream, &mut self.finished)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = remaining(&*self.stream, self.finished);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a mut CharStream {
    type Item = StreamItem;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        Iter {
            stream: self,
            finished: false,
        }
    }
}
