//! wasm-bindgen exports.
//!
//! This module exposes the type range extractor to a JavaScript editor host via `wasm-bindgen`.
//! The host runs its own blank-space transformer and passes both texts in; offsets on both sides
//! of the boundary are UTF-16 code units, so JS string indices can be used directly.

use wasm_bindgen::prelude::*;

use typeskip::{Language, LineIndex, type_ranges};

/// A half-open `[start, end)` range of UTF-16 code units.
#[derive(Debug, Clone, Copy, serde::Serialize, tsify::Tsify)]
pub struct OffsetRange {
    pub start: usize,
    pub end: usize,
}

impl From<typeskip::OffsetRange> for OffsetRange {
    fn from(val: typeskip::OffsetRange) -> Self {
        OffsetRange {
            start: val.start,
            end: val.end,
        }
    }
}

/// A zero-based line and UTF-16 column.
#[derive(Debug, Clone, Copy, serde::Serialize, tsify::Tsify)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

/// A range expressed as start and end positions.
#[derive(Debug, Clone, Copy, serde::Serialize, tsify::Tsify)]
pub struct PositionRange {
    pub start: Position,
    pub end: Position,
}

impl From<typeskip::PositionRange> for PositionRange {
    fn from(val: typeskip::PositionRange) -> Self {
        PositionRange {
            start: Position {
                line: val.start.line,
                character: val.start.character,
            },
            end: Position {
                line: val.end.line,
                character: val.end.character,
            },
        }
    }
}

/// Output of [`type_ranges_js`].
#[derive(Debug, Clone, serde::Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
pub struct TypeRanges {
    /// Sorted, disjoint type ranges.
    pub ranges: Vec<OffsetRange>,
}

/// Output of [`type_positions_js`].
#[derive(Debug, Clone, serde::Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
pub struct TypePositions {
    /// Type ranges converted to positions in the original text.
    pub ranges: Vec<PositionRange>,
}

/// Compute the ranges where `original` and `blanked` differ.
///
/// Throws if the two strings differ in length.
#[wasm_bindgen(js_name = typeRanges)]
pub fn type_ranges_js(original: String, blanked: String) -> Result<TypeRanges, JsValue> {
    console_error_panic_hook::set_once();

    let ranges =
        type_ranges(&original, &blanked).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(TypeRanges {
        ranges: ranges.into_iter().map(OffsetRange::from).collect(),
    })
}

/// Compute the differing ranges as line/character positions in `original`.
#[wasm_bindgen(js_name = typePositions)]
pub fn type_positions_js(
    original: String,
    blanked: String,
) -> Result<TypePositions, JsValue> {
    console_error_panic_hook::set_once();

    let ranges =
        type_ranges(&original, &blanked).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let index = LineIndex::new(&original);
    Ok(TypePositions {
        ranges: ranges
            .into_iter()
            .map(|r| index.range_at(r).into())
            .collect(),
    })
}

/// Whether documents with this editor language id get type ranges.
#[wasm_bindgen(js_name = isSupportedLanguage)]
pub fn is_supported_language(language_id: String) -> bool {
    Language::from_language_id(&language_id).is_some()
}
