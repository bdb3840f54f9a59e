//! UTF-16 position utilities for renderers.
//!
//! Type ranges are expressed as UTF-16 code unit offsets, the index space of JavaScript editor
//! hosts. Renderers usually want `(line, character)` positions instead, where `character` is a
//! UTF-16 column. This module provides that conversion, plus conversion between UTF-16 offsets
//! and UTF-8 byte offsets for Rust-side consumers.
//!
//! Design goals:
//!
//! - Keep the extractor free of any position logic; this index is built separately, once per
//!   text, and queried per range.
//! - Be performant: per-line indexes store checkpoints (every N chars) so byte conversions avoid
//!   rescanning from the line start.
//! - Be robust: offsets past the end clamp to the end, and byte/UTF-16 offsets that fall inside
//!   a multi-byte UTF-8 sequence or a surrogate pair clamp to the start of that character.

use std::cmp::Ordering;

use crate::range::OffsetRange;

/// A zero-based line and UTF-16 column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    /// Column in UTF-16 code units.
    pub character: usize,
}

impl Position {
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// An [`OffsetRange`] converted to positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionRange {
    pub start: Position,
    pub end: Position,
}

/// A precomputed line index over a text.
///
/// Notes:
///
/// - Lines end before `\n`. If the text uses CRLF, the `\r` is also excluded from the line, so
///   an offset pointing at the `\n` resolves to the end of the line. A lone `\r` is an ordinary
///   character.
/// - Offsets are UTF-16 code units unless a method says otherwise.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    s: &'a str,
    lines: Vec<LineInfo>,
    len_utf16: usize,
}

impl<'a> LineIndex<'a> {
    /// Build an index for `s`.
    pub fn new(s: &'a str) -> Self {
        let line_starts = compute_line_starts(s);
        let mut lines: Vec<LineInfo> = Vec::with_capacity(line_starts.len());
        let mut start_utf16 = 0usize;

        for (i, &start) in line_starts.iter().enumerate() {
            let next = line_starts.get(i + 1).copied();
            let mut end = match next {
                Some(next) => next - 1, // exclude '\n'
                None => s.len(),
            };
            if next.is_some() && end > start && s.as_bytes()[end - 1] == b'\r' {
                end -= 1;
            }

            let line = LineInfo::new(s, start, end, start_utf16);
            // Line terminators are ASCII, one code unit per byte.
            start_utf16 = line.end_utf16 + (next.unwrap_or(s.len()) - end);
            lines.push(line);
        }

        Self {
            s,
            lines,
            len_utf16: start_utf16,
        }
    }

    /// The text this index was built for.
    pub fn text(&self) -> &'a str {
        self.s
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total length of the text in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        self.len_utf16
    }

    /// Return the 0-based line that contains the UTF-16 `offset`.
    ///
    /// Offsets beyond the end of the text resolve to the final line.
    pub fn line_for_offset(&self, offset: usize) -> usize {
        last_at_or_before(&self.lines, |l| l.start_utf16 <= offset)
    }

    /// Return the 0-based line that contains `byte`.
    pub fn line_for_byte(&self, byte: usize) -> usize {
        last_at_or_before(&self.lines, |l| l.start <= byte)
    }

    /// Convert a UTF-16 offset into a position.
    ///
    /// Offsets past the end clamp to the end of the text. Offsets on a line terminator clamp to
    /// the end of that line.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.len_utf16);
        let line = self.line_for_offset(offset);
        let li = &self.lines[line];
        Position {
            line,
            character: offset.min(li.end_utf16) - li.start_utf16,
        }
    }

    /// Convert a position into a UTF-16 offset.
    ///
    /// Lines past the end clamp to the end of the text; columns past the end of the line clamp to
    /// the line end.
    pub fn offset_at(&self, position: Position) -> usize {
        match self.lines.get(position.line) {
            Some(li) => li.start_utf16 + position.character.min(li.utf16_len()),
            None => self.len_utf16,
        }
    }

    /// Convert a range of UTF-16 offsets into positions.
    pub fn range_at(&self, range: OffsetRange) -> PositionRange {
        PositionRange {
            start: self.position_at(range.start),
            end: self.position_at(range.end),
        }
    }

    /// Convert a UTF-16 offset into a UTF-8 byte offset.
    ///
    /// If `offset` falls inside a surrogate pair, the result clamps to the start of that code
    /// point.
    pub fn utf16_to_byte(&self, offset: usize) -> usize {
        let offset = offset.min(self.len_utf16);
        let li = &self.lines[self.line_for_offset(offset)];
        if offset >= li.end_utf16 {
            return li.end + (offset - li.end_utf16);
        }
        li.utf16_to_byte(self.s, offset)
    }

    /// Convert a UTF-8 byte offset into a UTF-16 offset.
    ///
    /// If `byte` points into the middle of a multi-byte sequence, the result clamps to the start
    /// of that character.
    pub fn byte_to_utf16(&self, byte: usize) -> usize {
        let byte = byte.min(self.s.len());
        let li = &self.lines[self.line_for_byte(byte)];
        if byte >= li.end {
            return li.end_utf16 + (byte - li.end);
        }
        li.byte_to_utf16(self.s, byte)
    }
}

/// Per-line index.
///
/// Covers the line slice `s[start..end]`, which excludes the line terminator.
#[derive(Debug, Clone)]
struct LineInfo {
    /// Absolute byte offset (inclusive) of the line start.
    start: usize,
    /// Absolute byte offset (exclusive) of the line end.
    end: usize,
    /// Absolute UTF-16 offset of the line start.
    start_utf16: usize,
    /// Absolute UTF-16 offset of the line end.
    end_utf16: usize,
    /// Sparse checkpoints pairing byte offsets with UTF-16 offsets.
    checkpoints: Vec<Checkpoint>,
}

impl LineInfo {
    /// Number of Unicode scalar values between checkpoints.
    ///
    /// Higher values reduce memory but increase worst-case scan length for a single conversion.
    const CHECKPOINT_STRIDE_CHARS: usize = 64;

    fn new(s: &str, start: usize, end: usize, start_utf16: usize) -> Self {
        let mut checkpoints = vec![Checkpoint {
            byte: start,
            utf16: start_utf16,
        }];

        let mut utf16 = start_utf16;
        for (n, (rel, ch)) in s[start..end].char_indices().enumerate() {
            utf16 += ch.len_utf16();
            if (n + 1).is_multiple_of(Self::CHECKPOINT_STRIDE_CHARS) {
                checkpoints.push(Checkpoint {
                    byte: start + rel + ch.len_utf8(),
                    utf16,
                });
            }
        }

        // Always include the line end boundary.
        if checkpoints.last().map_or(start, |c| c.byte) != end {
            checkpoints.push(Checkpoint { byte: end, utf16 });
        }

        Self {
            start,
            end,
            start_utf16,
            end_utf16: utf16,
            checkpoints,
        }
    }

    fn utf16_len(&self) -> usize {
        self.end_utf16 - self.start_utf16
    }

    /// `abs_byte` must lie in `start..end`.
    fn byte_to_utf16(&self, s: &str, abs_byte: usize) -> usize {
        let cp = self.checkpoints[last_at_or_before(&self.checkpoints, |c| c.byte <= abs_byte)];

        let mut cur_utf16 = cp.utf16;
        for (rel, ch) in s[cp.byte..self.end].char_indices() {
            if cp.byte + rel + ch.len_utf8() > abs_byte {
                break;
            }
            cur_utf16 += ch.len_utf16();
        }
        cur_utf16
    }

    /// `abs_utf16` must lie in `start_utf16..end_utf16`.
    fn utf16_to_byte(&self, s: &str, abs_utf16: usize) -> usize {
        let cp = self.checkpoints[last_at_or_before(&self.checkpoints, |c| c.utf16 <= abs_utf16)];

        let mut cur_byte = cp.byte;
        let mut cur_utf16 = cp.utf16;
        for ch in s[cp.byte..self.end].chars() {
            if cur_utf16 + ch.len_utf16() > abs_utf16 {
                // Target falls at or inside this character (e.g. mid surrogate pair).
                break;
            }
            cur_utf16 += ch.len_utf16();
            cur_byte += ch.len_utf8();
        }
        cur_byte
    }
}

/// A sparse checkpoint inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Checkpoint {
    /// Absolute byte offset into the text.
    byte: usize,
    /// Absolute UTF-16 offset at `byte`.
    utf16: usize,
}

/// Compute line start byte offsets for `s`.
fn compute_line_starts(s: &str) -> Vec<usize> {
    let mut starts = vec![0usize];
    for (i, b) in s.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

/// Index of the last element satisfying `at_or_before`, or 0 if none does.
///
/// `items` must be partitioned so that every match precedes every non-match.
fn last_at_or_before<T>(items: &[T], at_or_before: impl Fn(&T) -> bool) -> usize {
    match items.binary_search_by(|probe| {
        if at_or_before(probe) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }) {
        Ok(i) => i,
        Err(0) => 0,
        Err(i) => i - 1,
    }
}
