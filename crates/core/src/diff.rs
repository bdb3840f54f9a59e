//! Diff-based type range extraction.
//!
//! Given an original text and a blanked copy of the same length, this module reports the
//! contiguous runs of positions where the two differ. The blanked copy is produced by an
//! external transformer that replaces type-only syntax with whitespace, so those runs are
//! exactly the type annotations.
//!
//! Notes:
//!
//! - Comparison is positional; no alignment or backtracking is attempted. The scan is a single
//!   O(length) pass.
//! - String inputs are compared in UTF-16 code units, the index space blank-space transformers
//!   preserve. A type literal such as `"é"` blanked to spaces keeps its UTF-16 length but not
//!   its UTF-8 length.
//! - A position the transformer "blanks" into the same character (e.g. a space inside
//!   `: number`) compares equal and is not part of any range.

use crate::{TypeskipError, blank::Blanker, range::OffsetRange};

/// Compute the ranges where `original` and `transformed` differ.
///
/// Ranges are sorted, disjoint, non-empty and maximally merged. Fails with
/// [`TypeskipError::LengthMismatch`] if the slices differ in length.
pub fn diff_ranges<T: PartialEq>(
    original: &[T],
    transformed: &[T],
) -> Result<Vec<OffsetRange>, TypeskipError> {
    if original.len() != transformed.len() {
        return Err(TypeskipError::LengthMismatch {
            original: original.len(),
            transformed: transformed.len(),
        });
    }

    Ok(collect_runs(
        original.iter().zip(transformed).map(|(a, b)| a != b),
    ))
}

/// Compute the type ranges of `original` given its `blanked` copy.
///
/// Offsets are UTF-16 code units. Fails with [`TypeskipError::LengthMismatch`] if the two
/// strings differ in UTF-16 length.
pub fn type_ranges(original: &str, blanked: &str) -> Result<Vec<OffsetRange>, TypeskipError> {
    let original_len = original.encode_utf16().count();
    let blanked_len = blanked.encode_utf16().count();
    if original_len != blanked_len {
        return Err(TypeskipError::LengthMismatch {
            original: original_len,
            transformed: blanked_len,
        });
    }

    Ok(collect_runs(
        original
            .encode_utf16()
            .zip(blanked.encode_utf16())
            .map(|(a, b)| a != b),
    ))
}

/// Blank `source` with `blanker`, then extract its type ranges.
///
/// Blanker failures are returned unchanged. A blanker that breaks the length contract yields
/// [`TypeskipError::LengthMismatch`].
pub fn type_ranges_with<B: Blanker + ?Sized>(
    blanker: &B,
    source: &str,
) -> Result<Vec<OffsetRange>, TypeskipError> {
    let blanked = blanker.blank(source)?;
    let ranges = type_ranges(source, &blanked).inspect_err(|err| {
        if let TypeskipError::LengthMismatch { .. } = err {
            log::warn!("blanker did not preserve length: {err}");
        }
    })?;

    log::debug!(
        "found {} type range(s) in {} code units",
        ranges.len(),
        blanked.encode_utf16().count()
    );
    Ok(ranges)
}

/// Turn a per-position mismatch sequence into maximal runs.
fn collect_runs<I>(mismatches: I) -> Vec<OffsetRange>
where
    I: IntoIterator<Item = bool>,
{
    let mut ranges = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut len = 0usize;

    for (i, differs) in mismatches.into_iter().enumerate() {
        match (differs, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                ranges.push(OffsetRange::new(start, i));
                run_start = None;
            }
            _ => {}
        }
        len = i + 1;
    }

    // A run reaching the end of the text is closed there.
    if let Some(start) = run_start {
        ranges.push(OffsetRange::new(start, len));
    }

    ranges
}
