//! Type-annotation range extraction for TypeScript dimming.
//!
//! This crate finds the parts of a TypeScript file that are type-only syntax. It does not parse
//! TypeScript itself. Instead it compares the original source with a "blanked" copy in which an
//! external transformer replaced every type-only character with whitespace, and reports the
//! contiguous ranges that differ.
//!
//! Entry points:
//!
//! - [`diff`] contains the range extractor ([`diff::type_ranges`], [`diff::diff_ranges`]) and the
//!   blanker-driven pipeline ([`diff::type_ranges_with`]).
//!
//! Supporting modules:
//!
//! - [`blank`] defines the [`blank::Blanker`] capability and a region-based stand-in.
//! - [`range`] holds [`range::OffsetRange`] and range validation.
//! - [`utf16`] converts UTF-16 offsets into line/column positions for renderers.

pub mod blank;
pub mod diff;
pub mod range;
pub mod utf16;

pub use blank::{BlankConfig, Blanker, RegionBlanker, blank_regions};
pub use diff::{diff_ranges, type_ranges, type_ranges_with};
pub use range::{OffsetRange, validate_ranges};
pub use utf16::{LineIndex, Position, PositionRange};

/// Errors that can occur while extracting type ranges.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeskipError {
    #[error("length mismatch: original has {original} code units, transformed has {transformed}")]
    LengthMismatch { original: usize, transformed: usize },

    #[error("blanking failed: {0}")]
    Blank(String),

    #[error("invalid range [{start},{end}) for input of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("overlapping ranges: [{a_start},{a_end}) overlaps [{b_start},{b_end})")]
    OverlappingRanges {
        a_start: usize,
        a_end: usize,
        b_start: usize,
        b_end: usize,
    },
}

/// Document languages whose type syntax can be dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    TypeScriptReact,
}

impl Language {
    /// Resolve an editor language id (`typescript`, `typescriptreact`).
    pub fn from_language_id(id: &str) -> Option<Self> {
        match id {
            "typescript" => Some(Language::TypeScript),
            "typescriptreact" => Some(Language::TypeScriptReact),
            _ => None,
        }
    }

    /// Resolve a file name by its extension.
    pub fn from_path(path: &str) -> Option<Self> {
        let (_, ext) = path.rsplit_once('.')?;
        match ext {
            "ts" | "mts" | "cts" => Some(Language::TypeScript),
            "tsx" => Some(Language::TypeScriptReact),
            _ => None,
        }
    }

    /// The editor language id for this language.
    pub fn language_id(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::TypeScriptReact => "typescriptreact",
        }
    }
}
