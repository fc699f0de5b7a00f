//! The check pipeline with explicit stages.
//!
//! 1. **Load**: read the register workbook (or CSV) into a grid
//! 2. **Select**: pick the register sheet, by name or by heuristic ranking
//! 3. **Detect**: locate the header row and the file name column
//! 4. **Extract**: pull expected names from the chosen column
//! 5. **Scan**: walk the delivered folder
//! 6. **Reconcile**: match expected names against delivered files
//!
//! Detection stages accept explicit overrides; a low-confidence column guess
//! is refused rather than silently applied.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info};

use drc_detect::{
    analyze_workbook_sheets, detect_filename_column, detect_header_row, extract_expected_names,
};
use drc_ingest::{load_register, scan_delivered_files};
use drc_model::{
    Cell, ColumnDetection, ComparisonResult, HeaderDetection, SheetAnalysis, SheetGrid, Workbook,
};
use drc_reconcile::{ReconcileOptions, reconcile};

/// Minimum column-detection confidence for a guess to be applied without an
/// explicit `--column` override.
pub const COLUMN_CONFIDENCE_FLOOR: f64 = 75.0;

/// One fully resolved check run. Indices are zero-based.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    /// Path to the register workbook or CSV.
    pub register: PathBuf,
    /// Folder holding the delivered files.
    pub folder: PathBuf,
    /// Register sheet name; autodetected when `None`.
    pub sheet: Option<String>,
    /// Header row index; autodetected when `None`.
    pub header_row: Option<usize>,
    /// File name column index; autodetected when `None`.
    pub column: Option<usize>,
    /// Matching knobs passed straight to the engine.
    pub options: ReconcileOptions,
}

/// Everything a front end needs to report on a finished check.
#[derive(Debug)]
pub struct CheckReport {
    /// Name of the sheet that was read.
    pub sheet_name: String,
    /// Zero-based header row that was used.
    pub header_row: usize,
    /// Label of the column the expected names came from.
    pub column_label: String,
    /// Number of expected names extracted from the register.
    pub expected_count: usize,
    /// Number of files found in the delivered folder.
    pub delivered_count: usize,
    /// The reconciliation outcome.
    pub result: ComparisonResult,
}

impl CheckReport {
    /// Process exit code for this run: 1 when register entries are missing
    /// from the folder, unless the caller opted out of failing on missing.
    pub fn exit_code(&self, no_fail_on_missing: bool) -> i32 {
        if self.result.summary.has_missing() && !no_fail_on_missing {
            1
        } else {
            0
        }
    }
}

/// Runs the whole pipeline for one register/folder pair.
pub fn run_check(request: &CheckRequest) -> Result<CheckReport> {
    let workbook = load_register(&request.register)
        .with_context(|| format!("load register {}", request.register.display()))?;
    let sheet = select_sheet(&workbook, request.sheet.as_deref())?;
    let header = resolve_header(sheet, request.header_row)?;
    let column = resolve_column(sheet, &header, request.column)?;

    let expected = extract_expected_names(sheet, header.row_index, column.column_index);
    info!(
        sheet = %sheet.name,
        header_row = header.row_index,
        column = %column.column_label,
        expected_count = expected.len(),
        "register parsed"
    );

    let delivered = scan_delivered_files(&request.folder)
        .with_context(|| format!("scan delivered folder {}", request.folder.display()))?;
    let result = reconcile(&expected, &delivered, &request.options);

    Ok(CheckReport {
        sheet_name: sheet.name.clone(),
        header_row: header.row_index,
        column_label: column.column_label,
        expected_count: expected.len(),
        delivered_count: delivered.len(),
        result,
    })
}

/// Loads the register and ranks its sheets, best candidate first.
pub fn list_sheets(register: &Path) -> Result<Vec<SheetAnalysis>> {
    let workbook =
        load_register(register).with_context(|| format!("load register {}", register.display()))?;
    Ok(analyze_workbook_sheets(&workbook))
}

fn select_sheet<'a>(workbook: &'a Workbook, name: Option<&str>) -> Result<&'a SheetGrid> {
    if let Some(name) = name {
        return workbook.sheet(name).ok_or_else(|| {
            let available: Vec<&str> = workbook
                .sheets
                .iter()
                .map(|sheet| sheet.name.as_str())
                .collect();
            anyhow!(
                "sheet '{name}' not found; workbook has: {}",
                available.join(", ")
            )
        });
    }

    let best = analyze_workbook_sheets(workbook)
        .into_iter()
        .next()
        .filter(|analysis| analysis.score > 0.0)
        .ok_or_else(|| anyhow!("no sheet looks like a drawing register; pass --sheet"))?;
    debug!(sheet = %best.name, score = best.score, "selected sheet");
    workbook
        .sheet(&best.name)
        .ok_or_else(|| anyhow!("sheet '{}' not found", best.name))
}

fn resolve_header(sheet: &SheetGrid, override_row: Option<usize>) -> Result<HeaderDetection> {
    if let Some(row_index) = override_row {
        if row_index >= sheet.row_count() {
            bail!(
                "header row {} is past the end of sheet '{}' ({} rows)",
                row_index + 1,
                sheet.name,
                sheet.row_count()
            );
        }
        let cells = sheet.rows[row_index].iter().map(Cell::to_text).collect();
        return Ok(HeaderDetection { row_index, cells });
    }

    detect_header_row(sheet).ok_or_else(|| {
        anyhow!(
            "no header row found near the top of sheet '{}'; pass --header-row",
            sheet.name
        )
    })
}

fn resolve_column(
    sheet: &SheetGrid,
    header: &HeaderDetection,
    override_column: Option<usize>,
) -> Result<ColumnDetection> {
    if let Some(column_index) = override_column {
        let width = sheet.width();
        if column_index >= width {
            bail!(
                "column {} is past the right edge of sheet '{}' ({} columns)",
                column_index + 1,
                sheet.name,
                width
            );
        }
        let column_label = header
            .cells
            .get(column_index)
            .filter(|label| !label.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Column {}", column_index + 1));
        return Ok(ColumnDetection {
            column_index,
            confidence: 100.0,
            column_label,
        });
    }

    let detection = detect_filename_column(header, sheet).ok_or_else(|| {
        anyhow!(
            "no column in sheet '{}' looks like file names; pass --column",
            sheet.name
        )
    })?;
    if detection.confidence <= COLUMN_CONFIDENCE_FLOOR {
        bail!(
            "best file name column guess is '{}' at {:.0}% confidence; \
             rerun with --column to confirm (headers: {})",
            detection.column_label,
            detection.confidence,
            header.cells.join(", ")
        );
    }
    debug!(
        column = %detection.column_label,
        confidence = detection.confidence,
        "selected file name column"
    );
    Ok(detection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(name: &str, rows: &[&[&str]]) -> SheetGrid {
        SheetGrid {
            name: name.to_string(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| Cell::from_text(cell)).collect())
                .collect(),
        }
    }

    #[test]
    fn header_override_past_end_is_rejected() {
        let sheet = grid("Register", &[&["Drawing Number"], &["ABC-001.pdf"]]);
        let error = resolve_header(&sheet, Some(5)).unwrap_err();
        assert!(error.to_string().contains("past the end"));
    }

    #[test]
    fn header_override_builds_labels_from_that_row() {
        let sheet = grid(
            "Register",
            &[&["junk"], &["Drawing Number", "Title"], &["ABC-001.pdf", "x"]],
        );
        let header = resolve_header(&sheet, Some(1)).unwrap();
        assert_eq!(header.row_index, 1);
        assert_eq!(header.cells, vec!["Drawing Number", "Title"]);
    }

    #[test]
    fn column_override_past_width_is_rejected() {
        let sheet = grid("Register", &[&["Drawing Number"], &["ABC-001.pdf"]]);
        let header = resolve_header(&sheet, Some(0)).unwrap();
        let error = resolve_column(&sheet, &header, Some(7)).unwrap_err();
        assert!(error.to_string().contains("right edge"));
    }

    #[test]
    fn column_override_falls_back_to_positional_label() {
        let sheet = grid("Register", &[&["", "Notes"], &["ABC-001.pdf", "x"]]);
        let header = resolve_header(&sheet, Some(0)).unwrap();
        let column = resolve_column(&sheet, &header, Some(0)).unwrap();
        assert_eq!(column.column_label, "Column 1");
        assert_eq!(column.column_index, 0);
    }

    #[test]
    fn low_confidence_column_guess_is_refused_without_override() {
        // Keyword header, but the body values read nothing like file names,
        // so the detector's confidence stays at the keyword bonus alone.
        let sheet = grid(
            "Register",
            &[
                &["Drawing No", "Title"],
                &["Ground floor", "as issued"],
                &["First floor", "as issued"],
            ],
        );
        let header = resolve_header(&sheet, Some(0)).unwrap();
        let error = resolve_column(&sheet, &header, None).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("confidence"));
        assert!(message.contains("--column"));

        let column = resolve_column(&sheet, &header, Some(1)).unwrap();
        assert_eq!(column.column_index, 1);
        assert_eq!(column.column_label, "Title");
    }

    #[test]
    fn confident_column_guess_is_applied_without_override() {
        let sheet = grid(
            "Register",
            &[
                &["Drawing Number", "Title"],
                &["ABC-DEF-001.pdf", "Ground floor"],
                &["ABC-DEF-002.pdf", "First floor"],
            ],
        );
        let header = resolve_header(&sheet, Some(0)).unwrap();
        let column = resolve_column(&sheet, &header, None).unwrap();
        assert_eq!(column.column_index, 0);
        assert!(column.confidence > COLUMN_CONFIDENCE_FLOOR);
    }

    #[test]
    fn named_sheet_missing_lists_alternatives() {
        let workbook = Workbook {
            sheets: vec![grid("Cover", &[&["x"]]), grid("Register", &[&["y"]])],
        };
        let error = select_sheet(&workbook, Some("Nope")).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("Cover"));
        assert!(message.contains("Register"));
    }
}
