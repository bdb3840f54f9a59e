//! Offset ranges and range validation.
//!
//! An [`OffsetRange`] is a half-open `[start, end)` interval over code unit positions. For string
//! inputs the code units are UTF-16 code units; for the generic extractor they are slice elements.
//!
//! Range lists produced by the extractor are always sorted by ascending `start`, pairwise
//! disjoint, non-empty and never adjacent. [`validate_ranges`] checks the weaker form of that
//! contract (sorted, disjoint, non-empty, in bounds) for ranges coming from elsewhere.

use std::fmt;

use crate::TypeskipError;

/// A half-open `[start, end)` range of code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OffsetRange {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl OffsetRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of code units covered by this range.
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns true if `offset` lies inside the range.
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl From<(usize, usize)> for OffsetRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<OffsetRange> for std::ops::Range<usize> {
    fn from(r: OffsetRange) -> Self {
        r.start..r.end
    }
}

impl fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Validate a list of ranges against an input of `len` code units.
///
/// Checks:
///
/// - `start < end` and `end <= len`
/// - ranges are in ascending `start` order and do not overlap
///
/// Adjacent ranges (`a.end == b.start`) are accepted here; only the extractor guarantees
/// maximal merging.
pub fn validate_ranges(len: usize, ranges: &[OffsetRange]) -> Result<(), TypeskipError> {
    let mut prev: Option<OffsetRange> = None;
    for r in ranges {
        if r.is_empty() || r.end > len {
            return Err(TypeskipError::InvalidRange {
                start: r.start,
                end: r.end,
                len,
            });
        }
        if let Some(p) = prev
            && r.start < p.end
        {
            return Err(TypeskipError::OverlappingRanges {
                a_start: p.start,
                a_end: p.end,
                b_start: r.start,
                b_end: r.end,
            });
        }
        prev = Some(*r);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Basic accessors on a half-open range.
    #[test]
    fn range_accessors() {
        let r = OffsetRange::new(2, 5);
        assert_eq!(r.len(), 3);
        assert!(!r.is_empty());
        assert!(r.contains(2));
        assert!(r.contains(4));
        assert!(!r.contains(5));
        assert!(!r.contains(1));
        assert_eq!(r.to_string(), "2..5");
        assert_eq!(std::ops::Range::from(r), 2..5);
        assert_eq!(OffsetRange::from((2, 5)), r);
    }

    /// Sorted, disjoint, in-bounds ranges pass, including adjacent ones.
    #[test]
    fn validate_accepts_sorted_disjoint() {
        let ranges = [
            OffsetRange::new(0, 1),
            OffsetRange::new(1, 3),
            OffsetRange::new(7, 10),
        ];
        assert_eq!(validate_ranges(10, &ranges), Ok(()));
        assert_eq!(validate_ranges(0, &[]), Ok(()));
    }

    #[test]
    fn validate_rejects_overlap() {
        let ranges = [OffsetRange::new(1, 3), OffsetRange::new(2, 4)];
        let err = validate_ranges(10, &ranges).unwrap_err();
        assert_eq!(
            err,
            TypeskipError::OverlappingRanges {
                a_start: 1,
                a_end: 3,
                b_start: 2,
                b_end: 4,
            }
        );
    }

    /// Unsorted input is reported as an overlap with the previous range.
    #[test]
    fn validate_rejects_unsorted() {
        let ranges = [OffsetRange::new(5, 6), OffsetRange::new(1, 2)];
        assert!(matches!(
            validate_ranges(10, &ranges),
            Err(TypeskipError::OverlappingRanges { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_and_out_of_bounds() {
        assert!(matches!(
            validate_ranges(10, &[OffsetRange::new(3, 3)]),
            Err(TypeskipError::InvalidRange { .. })
        ));
        assert!(matches!(
            validate_ranges(10, &[OffsetRange::new(4, 2)]),
            Err(TypeskipError::InvalidRange { .. })
        ));
        assert_eq!(
            validate_ranges(10, &[OffsetRange::new(8, 11)]),
            Err(TypeskipError::InvalidRange {
                start: 8,
                end: 11,
                len: 10,
            })
        );
    }
}
