//! Header-row detection.
//!
//! Registers bury their column headers under title blocks, logos, and blank
//! rows, so the first rows of a sheet are scored for header likelihood and
//! the best candidate wins. Finding nothing is a normal outcome the caller
//! resolves through manual selection.

use drc_model::{Cell, HeaderDetection, SheetGrid};
use tracing::debug;

/// Vocabulary matched (case-insensitive, substring) against header cells.
pub const HEADER_KEYWORDS: &[&str] = &[
    "drawing",
    "file",
    "name",
    "no",
    "number",
    "title",
    "sheet",
    "description",
    "document",
    "reference",
    "rev",
    "status",
];

/// Only the top rows of a sheet are scanned for a header.
pub const HEADER_SCAN_ROWS: usize = 10;

/// A row needs at least one keyword hit to qualify; the non-numeric ratio
/// alone (worth at most 0.5) is never enough.
const MIN_ROW_SCORE: f64 = 1.0;

/// Header likelihood for a single row: one point per keyword-matching cell
/// plus up to half a point for the non-numeric cell ratio. Zero for rows
/// with no non-empty cells.
pub fn score_header_row(cells: &[Cell]) -> f64 {
    let mut non_empty = 0usize;
    let mut non_numeric = 0usize;
    let mut keyword_hits = 0usize;
    for cell in cells {
        if cell.is_empty() {
            continue;
        }
        non_empty += 1;
        if !cell.is_numeric() {
            non_numeric += 1;
        }
        let text = cell.to_text().to_lowercase();
        if HEADER_KEYWORDS.iter().any(|keyword| text.contains(keyword)) {
            keyword_hits += 1;
        }
    }
    if non_empty == 0 {
        return 0.0;
    }
    keyword_hits as f64 + 0.5 * (non_numeric as f64 / non_empty as f64)
}

/// Scans the top [`HEADER_SCAN_ROWS`] rows for the most header-like row.
///
/// Earlier rows win ties: scores are weighted down slightly by row position
/// and the comparison is strict, so the lowest qualifying index is kept.
pub fn detect_header_row(sheet: &SheetGrid) -> Option<HeaderDetection> {
    let mut best: Option<(usize, f64)> = None;
    for (index, row) in sheet.rows.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let raw = score_header_row(row);
        if raw < MIN_ROW_SCORE {
            continue;
        }
        let weighted = raw / (1.0 + 0.05 * index as f64);
        if best.is_none_or(|(_, score)| weighted > score) {
            best = Some((index, weighted));
        }
    }
    let (row_index, score) = best?;
    debug!(sheet = %sheet.name, row_index, score, "detected header row");
    Some(HeaderDetection {
        row_index,
        cells: sheet.rows[row_index].iter().map(Cell::to_text).collect(),
    })
}

/// Whether any scanned row qualifies as a header candidate. Used by the
/// sheet analyzer as one scoring component.
pub(crate) fn has_header_candidate(sheet: &SheetGrid) -> bool {
    sheet
        .rows
        .iter()
        .take(HEADER_SCAN_ROWS)
        .any(|row| score_header_row(row) >= MIN_ROW_SCORE)
}
