//! The blank-space transformer capability.
//!
//! A [`Blanker`] takes TypeScript source and returns a copy in which every type-only character
//! is replaced by whitespace. The copy must have the same UTF-16 length as the input, and all
//! other characters must stay at their original offsets. Which syntax counts as type-only is
//! entirely the blanker's business; this crate only diffs the result.
//!
//! Hosts plug in a real transformer through the closure impl. [`RegionBlanker`] is a synthetic
//! stand-in that blanks a fixed set of UTF-16 regions, used by tests, fixtures and fuzzing.

use crate::{
    TypeskipError,
    range::{OffsetRange, validate_ranges},
};

/// Produces a same-length, type-blanked copy of a source text.
pub trait Blanker {
    fn blank(&self, source: &str) -> Result<String, TypeskipError>;
}

impl<F> Blanker for F
where
    F: Fn(&str) -> Result<String, TypeskipError>,
{
    fn blank(&self, source: &str) -> Result<String, TypeskipError> {
        self(source)
    }
}

/// Configuration options for region blanking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlankConfig {
    /// If true, line breaks (`\n`, `\r`) inside a region are blanked too.
    ///
    /// By default they are kept so that line numbers after blanking match the source, which is
    /// what blank-space transformers do.
    pub blank_line_breaks: bool,
}

/// A [`Blanker`] that blanks a fixed list of UTF-16 regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionBlanker {
    regions: Vec<OffsetRange>,
    config: BlankConfig,
}

impl RegionBlanker {
    pub fn new(regions: Vec<OffsetRange>) -> Self {
        Self::with_config(regions, BlankConfig::default())
    }

    pub fn with_config(regions: Vec<OffsetRange>, config: BlankConfig) -> Self {
        Self { regions, config }
    }

    pub fn regions(&self) -> &[OffsetRange] {
        &self.regions
    }
}

impl Blanker for RegionBlanker {
    fn blank(&self, source: &str) -> Result<String, TypeskipError> {
        blank_regions(source, &self.regions, &self.config)
    }
}

/// Replace every code unit of `source` inside `regions` with a space.
///
/// `regions` are UTF-16 offsets and must be sorted, non-overlapping, non-empty and in bounds.
/// A region boundary that falls inside a surrogate pair is rejected with
/// [`TypeskipError::InvalidRange`], since the pair cannot be half-blanked. A blanked character
/// becomes one space per UTF-16 code unit, so the output has the same UTF-16 length.
pub fn blank_regions(
    source: &str,
    regions: &[OffsetRange],
    config: &BlankConfig,
) -> Result<String, TypeskipError> {
    let len = source.encode_utf16().count();
    validate_ranges(len, regions)?;

    let split = |r: &OffsetRange| TypeskipError::InvalidRange {
        start: r.start,
        end: r.end,
        len,
    };

    let mut out = String::with_capacity(source.len());
    let mut pending = regions.iter().peekable();
    let mut pos = 0usize;

    for ch in source.chars() {
        let width = ch.len_utf16();
        let next = pos + width;

        while pending.next_if(|r| r.end <= pos).is_some() {}

        let mut inside = false;
        if let Some(r) = pending.peek() {
            if r.start > pos && r.start < next {
                return Err(split(*r));
            }
            if r.contains(pos) {
                if r.end < next {
                    return Err(split(*r));
                }
                inside = true;
            }
        }

        if inside && (config.blank_line_breaks || !matches!(ch, '\n' | '\r')) {
            out.extend(std::iter::repeat_n(' ', width));
        } else {
            out.push(ch);
        }
        pos = next;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{type_ranges, type_ranges_with};

    fn regions(pairs: &[(usize, usize)]) -> Vec<OffsetRange> {
        pairs.iter().copied().map(OffsetRange::from).collect()
    }

    #[test]
    fn blanks_annotation() {
        let out = blank_regions(
            "let x: number = 1;",
            &regions(&[(5, 13)]),
            &BlankConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "let x         = 1;");
    }

    /// Line breaks inside a blanked interface are kept by default.
    #[test]
    fn keeps_line_breaks_by_default() {
        let src = "interface A {\r\n  a: string;\n}\nlet b = 1;";
        let end = src.find("\nlet").unwrap();
        let out = blank_regions(src, &regions(&[(0, end)]), &BlankConfig::default()).unwrap();
        assert_eq!(out, "             \r\n            \n \nlet b = 1;");
    }

    #[test]
    fn blanks_line_breaks_when_configured() {
        let cfg = BlankConfig {
            blank_line_breaks: true,
        };
        let out = blank_regions("a\nb", &regions(&[(0, 3)]), &cfg).unwrap();
        assert_eq!(out, "   ");
    }

    /// Surrogate pairs become two spaces, keeping the UTF-16 length.
    #[test]
    fn emoji_becomes_two_spaces() {
        let src = "x: \"🙂\";";
        let out = blank_regions(src, &regions(&[(1, 7)]), &BlankConfig::default()).unwrap();
        assert_eq!(out, "x      ;");
        assert_eq!(out.encode_utf16().count(), src.encode_utf16().count());
    }

    /// A region may not start or end between the two halves of a surrogate pair.
    #[test]
    fn rejects_region_splitting_surrogate_pair() {
        let src = "a🙂b";
        assert_eq!(
            blank_regions(src, &regions(&[(2, 4)]), &BlankConfig::default()),
            Err(TypeskipError::InvalidRange {
                start: 2,
                end: 4,
                len: 4,
            })
        );
        assert!(matches!(
            blank_regions(src, &regions(&[(0, 2)]), &BlankConfig::default()),
            Err(TypeskipError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_invalid_region_lists() {
        assert!(matches!(
            blank_regions("abcdef", &regions(&[(1, 3), (2, 4)]), &BlankConfig::default()),
            Err(TypeskipError::OverlappingRanges { .. })
        ));
        assert!(matches!(
            blank_regions("abc", &regions(&[(1, 4)]), &BlankConfig::default()),
            Err(TypeskipError::InvalidRange { .. })
        ));
    }

    /// Adjacent regions blank like one region.
    #[test]
    fn adjacent_regions() {
        let out = blank_regions("abcdef", &regions(&[(1, 3), (3, 5)]), &BlankConfig::default())
            .unwrap();
        assert_eq!(out, "a    f");
    }

    /// Extracting from a region-blanked text recovers the regions, minus shared whitespace.
    #[test]
    fn region_blanker_roundtrips_through_extractor() {
        let src = "function f<T>(a: T, b: string): T[] { return [a as T]; }";
        let spans = ["<T>", ": T", ": string", ": T[]", " as T"];
        let mut rs = Vec::new();
        let mut from = 0;
        for span in spans {
            let at = from + src[from..].find(span).unwrap();
            rs.push(OffsetRange::new(at, at + span.len()));
            from = at + span.len();
        }

        let blanker = RegionBlanker::new(rs);
        let out = type_ranges_with(&blanker, src).unwrap();
        let blanked = blanker.blank(src).unwrap();
        assert_eq!(
            blanked,
            "function f   (a   , b        )      { return [a     ]; }"
        );
        assert_eq!(out, type_ranges(src, &blanked).unwrap());
        assert_eq!(
            out,
            regions(&[
                (10, 13),
                (15, 16),
                (17, 18),
                (21, 22),
                (23, 29),
                (30, 31),
                (32, 35),
                (48, 50),
                (51, 52),
            ])
        );
    }
}
