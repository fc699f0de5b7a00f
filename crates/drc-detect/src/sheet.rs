//! Sheet ranking.
//!
//! Workbooks often carry cover sheets, notes, and pivot scratch pads next to
//! the actual register. Every sheet is scored so selector UIs can list them
//! all; the highest score is the default pick, never a forced one.

use std::cmp::Ordering;

use drc_model::{SheetAnalysis, SheetGrid, Workbook};

use crate::header::has_header_candidate;

/// Scores every sheet and returns them ordered descending by score.
///
/// Empty sheets score lowest but are still included. The sort is stable, so
/// equal scores keep workbook order.
pub fn analyze_workbook_sheets(workbook: &Workbook) -> Vec<SheetAnalysis> {
    let mut analyses: Vec<SheetAnalysis> = workbook.sheets.iter().map(score_sheet).collect();
    analyses.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    analyses
}

/// Register likelihood for one sheet, 0-100.
///
/// Combines non-empty cell density (40), populated row volume (30), and the
/// presence of at least one header-like row in the scan window (30).
pub fn score_sheet(sheet: &SheetGrid) -> SheetAnalysis {
    let row_count = sheet.row_count();
    let non_empty_row_count = sheet.non_empty_row_count();

    let total_cells: usize = row_count * sheet.width();
    let non_empty_cells: usize = sheet
        .rows
        .iter()
        .map(|row| row.iter().filter(|cell| !cell.is_empty()).count())
        .sum();
    let density = if total_cells == 0 {
        0.0
    } else {
        non_empty_cells as f64 / total_cells as f64
    };

    let volume = non_empty_row_count.min(100) as f64 / 100.0;
    let header_bonus = if has_header_candidate(sheet) { 1.0 } else { 0.0 };

    let score = 40.0 * density + 30.0 * volume + 30.0 * header_bonus;
    SheetAnalysis {
        name: sheet.name.clone(),
        row_count,
        non_empty_row_count,
        score,
    }
}
