//! Results of the register-detection heuristics.

use serde::{Deserialize, Serialize};

/// Score card for one sheet in a workbook.
///
/// Sheets are ranked descending by `score`; the top sheet is the default
/// register candidate but callers may override the selection. Empty sheets
/// still get an entry so selector UIs can list every sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetAnalysis {
    pub name: String,
    pub row_count: usize,
    pub non_empty_row_count: usize,
    /// Register likelihood, 0-100.
    pub score: f64,
}

/// A detected column-header row.
///
/// Detection returning `None` is a normal outcome (the caller falls back to
/// manual selection), so absence is modelled with `Option`, not a flag field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderDetection {
    /// 0-based row offset of the header within the sheet.
    pub row_index: usize,
    /// The header row's cells coerced to strings.
    pub cells: Vec<String>,
}

/// The column most likely to hold file-name values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDetection {
    pub column_index: usize,
    /// Detector certainty, 0-100. The auto-apply threshold is caller policy.
    pub confidence: f64,
    /// Header cell text for the column, or a positional fallback label.
    pub column_label: String,
}
