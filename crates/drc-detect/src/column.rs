//! File-name column detection.
//!
//! Given a detected header row, every column's body is sampled and scored
//! for how file-name-like its values are. The caller decides whether the
//! reported confidence clears its auto-apply threshold; the detector only
//! reports the raw number.

use drc_model::{ColumnDetection, HeaderDetection, SheetGrid};
use tracing::debug;

use crate::filter::structured_segment_count;
use crate::normalize::has_known_extension;

/// At most this many non-empty values per column are sampled.
pub const COLUMN_SAMPLE_LIMIT: usize = 50;

/// Header keywords that suggest a column holds file or drawing names.
/// Narrower than the header-row vocabulary: "rev" or "status" mark a header
/// row but not a name column.
const COLUMN_KEYWORDS: &[&str] = &["drawing", "file", "name", "number", "no", "document", "dwg"];

/// Returns true when a cell value reads like a file name: it carries a
/// recognised extension or matches the structured naming pattern used by
/// the delivered-file filter.
pub fn looks_like_filename(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    if has_known_extension(trimmed) {
        return true;
    }
    let length = trimmed.chars().count();
    (5..=80).contains(&length) && structured_segment_count(&trimmed.to_lowercase()) >= 2
}

/// Score for one column: the file-name-like fraction of sampled values
/// (up to 70) plus a header keyword bonus (30).
pub fn score_column(header_cell: &str, samples: &[String]) -> f64 {
    let filename_ratio = if samples.is_empty() {
        0.0
    } else {
        let hits = samples
            .iter()
            .filter(|value| looks_like_filename(value))
            .count();
        hits as f64 / samples.len() as f64
    };

    let header_lower = header_cell.trim().to_lowercase();
    let keyword_bonus = if !header_lower.is_empty()
        && COLUMN_KEYWORDS
            .iter()
            .any(|keyword| header_lower.contains(keyword))
    {
        1.0
    } else {
        0.0
    };

    70.0 * filename_ratio + 30.0 * keyword_bonus
}

/// Picks the column most likely to hold file names, or `None` when every
/// column scores zero. Leftmost column wins ties.
pub fn detect_filename_column(
    header: &HeaderDetection,
    sheet: &SheetGrid,
) -> Option<ColumnDetection> {
    let width = sheet.width();
    let mut best: Option<(usize, f64)> = None;

    for column in 0..width {
        let samples: Vec<String> = sheet
            .rows
            .iter()
            .skip(header.row_index + 1)
            .filter_map(|row| {
                let cell = row.get(column)?;
                let text = cell.to_text();
                (!text.is_empty()).then_some(text)
            })
            .take(COLUMN_SAMPLE_LIMIT)
            .collect();

        let header_cell = header.cells.get(column).map(String::as_str).unwrap_or("");
        let score = score_column(header_cell, &samples);
        if score > 0.0 && best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((column, score));
        }
    }

    let (column_index, confidence) = best?;
    let column_label = header
        .cells
        .get(column_index)
        .filter(|label| !label.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| format!("Column {}", column_index + 1));
    debug!(column_index, confidence, %column_label, "detected file-name column");
    Some(ColumnDetection {
        column_index,
        confidence,
        column_label,
    })
}
