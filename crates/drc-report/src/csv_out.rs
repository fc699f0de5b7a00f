//! Flat CSV export of the result rows.

use std::path::{Path, PathBuf};

use drc_model::ComparisonResult;

use crate::error::{ReportError, Result};
use crate::summary::{matched_label, status_label};

fn csv_err(path: &Path) -> impl Fn(csv::Error) -> ReportError + '_ {
    move |source| ReportError::Csv {
        path: PathBuf::from(path),
        source,
    }
}

/// Writes one record per result row: expected name (or orphan file),
/// matched file, status label.
pub fn write_csv(path: &Path, result: &ComparisonResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_err(path))?;

    writer
        .write_record(["expected", "matched_file", "status"])
        .map_err(csv_err(path))?;
    for row in &result.rows {
        writer
            .write_record([
                row.name.as_str(),
                matched_label(row),
                status_label(&row.status),
            ])
            .map_err(csv_err(path))?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drc_model::ValidationRow;

    #[test]
    fn csv_export_writes_one_record_per_row() {
        let result = ComparisonResult::new(vec![
            ValidationRow::done("ABC-DEF-001", "ABC-DEF-001.pdf"),
            ValidationRow::todo("ABC-DEF-002"),
            ValidationRow::extra("EXTRA-999.pdf"),
        ]);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.csv");
        write_csv(&path, &result).expect("write");

        let body = std::fs::read_to_string(&path).expect("read back");
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "expected,matched_file,status");
        assert_eq!(lines[1], "ABC-DEF-001,ABC-DEF-001.pdf,Done");
        assert_eq!(lines[2], "ABC-DEF-002,N/A,To Do");
        assert_eq!(
            lines[3],
            "EXTRA-999.pdf,EXTRA-999.pdf,File not in Drawing List"
        );
    }
}
