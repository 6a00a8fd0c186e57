//! Source locations.
//!
//! Tokens carry a byte [`Span`]; AST nodes carry the 1-based line/column
//! [`Position`] of the token that started them. [`LineIndex`] converts
//! between the two.

use std::fmt;

/// Error when creating a span from a range that exceeds `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// Span start position exceeds `u32::MAX`.
    StartTooLarge(usize),
    /// Span end position exceeds `u32::MAX`.
    EndTooLarge(usize),
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::StartTooLarge(v) => write!(f, "span start {v} exceeds u32::MAX"),
            SpanError::EndTooLarge(v) => write!(f, "span end {v} exceeds u32::MAX"),
        }
    }
}

impl std::error::Error for SpanError {}

/// Byte range in the source text, end exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Try to create a span from a byte range.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and column of a construct.
///
/// Nodes that have no source token of their own (the `Program` wrapper and
/// list containers) use [`Position::DUMMY`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

impl Position {
    /// Position for synthesized nodes.
    pub const DUMMY: Position = Position { line: 0, col: 0 };

    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Position { line, col }
    }

    #[inline]
    pub const fn is_dummy(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Pre-computed line start table for offset → line/column lookup.
///
/// Construction scans the source once; each lookup is a binary search over
/// line starts. Columns count characters, not bytes.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Byte offset of each line start. `starts[0] == 0`.
    starts: Vec<u32>,
}

impl LineIndex {
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineIndex { starts }
    }

    /// 1-based position of `offset` within `source`.
    ///
    /// `source` must be the text this index was built from.
    pub fn position(&self, source: &str, offset: u32) -> Position {
        let line_idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.starts[line_idx] as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        Position::new(
            u32::try_from(line_idx + 1).unwrap_or(u32::MAX),
            u32::try_from(col + 1).unwrap_or(u32::MAX),
        )
    }

    /// Text of the 1-based `line`, without its line terminator.
    pub fn line_text<'src>(&self, source: &'src str, line: u32) -> Option<&'src str> {
        let idx = (line as usize).checked_sub(1)?;
        let start = *self.starts.get(idx)? as usize;
        let end = self
            .starts
            .get(idx + 1)
            .map_or(source.len(), |next| *next as usize);
        source
            .get(start..end)
            .map(|text| text.trim_end_matches(['\n', '\r']))
    }
}

#[cfg(test)]
mod tests;
