//! Register decoding.
//!
//! Workbooks decode through `calamine`, CSV registers through the `csv`
//! crate. Both produce the same [`Workbook`] grid shape: every sheet, every
//! cell coerced to the core's [`Cell`] model, absent cells as empty.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use drc_model::{Cell, SheetGrid, Workbook};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Loads a register of any supported format, dispatching on the extension.
pub fn load_register(path: &Path) -> Result<Workbook> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => load_workbook(path),
        "csv" => load_csv_register(path),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Decodes every sheet of a spreadsheet workbook into cell grids.
pub fn load_workbook(path: &Path) -> Result<Workbook> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = open_workbook_auto(path).map_err(|source| IngestError::WorkbookOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let names = reader.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = reader
            .worksheet_range(&name)
            .map_err(|source| IngestError::SheetRead {
                sheet: name.clone(),
                path: path.to_path_buf(),
                source,
            })?;
        let rows: Vec<Vec<Cell>> = range
            .rows()
            .map(|row| row.iter().map(cell_from_data).collect())
            .collect();
        debug!(sheet = %name, rows = rows.len(), "decoded sheet");
        sheets.push(SheetGrid::new(name, rows));
    }
    info!(path = %path.display(), sheets = sheets.len(), "loaded workbook");
    Ok(Workbook::new(sheets))
}

/// Decodes a CSV register as a single-sheet workbook. Registers are
/// human-authored, so ragged record lengths are accepted.
pub fn load_csv_register(path: &Path) -> Result<Workbook> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(Cell::from_text).collect());
    }

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("register")
        .to_string();
    info!(path = %path.display(), rows = rows.len(), "loaded CSV register");
    Ok(Workbook::new(vec![SheetGrid::new(name, rows)]))
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(text) => Cell::from_text(text),
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Bool(value) => Cell::Text(value.to_string()),
        Data::DateTime(value) => Cell::Text(value.to_string()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => Cell::from_text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_register_decodes_as_single_sheet() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("register.csv");
        std::fs::write(&path, "Drawing No,Title\nABC-DEF-001,Ground floor\n,\n")
            .expect("write csv");

        let workbook = load_csv_register(&path).expect("load csv");
        assert_eq!(workbook.sheets.len(), 1);
        let sheet = &workbook.sheets[0];
        assert_eq!(sheet.name, "register");
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.cell(1, 0).to_text(), "ABC-DEF-001");
        assert!(sheet.cell(2, 0).is_empty());
    }

    #[test]
    fn missing_register_is_reported_not_panicked() {
        let error = load_csv_register(Path::new("/nonexistent/register.csv"))
            .expect_err("should fail");
        assert!(matches!(error, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let error = load_register(Path::new("register.pdf")).expect_err("should fail");
        assert!(matches!(error, IngestError::UnsupportedFormat { .. }));
    }

    #[test]
    fn numeric_and_empty_cells_map_to_the_model() {
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
        assert_eq!(cell_from_data(&Data::Float(3.0)), Cell::Number(3.0));
        assert_eq!(cell_from_data(&Data::Int(7)), Cell::Number(7.0));
        assert_eq!(
            cell_from_data(&Data::String("  A-1 ".to_string())),
            Cell::Text("A-1".to_string())
        );
    }
}
