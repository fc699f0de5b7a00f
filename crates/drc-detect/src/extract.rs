//! Expected-name extraction.

use drc_model::{Cell, SheetGrid};

/// Reads every row strictly below `header_row_index` in `column_index`,
/// coerced to trimmed strings, skipping blanks. Row order is preserved and
/// duplicates are kept; the reconciliation engine owns the duplicate policy.
///
/// # Panics
///
/// Panics when `column_index` is outside the sheet's width. That is a caller
/// bug, not a user-input condition, so it fails loudly instead of silently
/// returning an empty list.
pub fn extract_expected_names(
    sheet: &SheetGrid,
    header_row_index: usize,
    column_index: usize,
) -> Vec<String> {
    let width = sheet.width();
    assert!(
        column_index < width,
        "column index {column_index} out of range for sheet '{}' (width {width})",
        sheet.name
    );
    sheet
        .rows
        .iter()
        .skip(header_row_index + 1)
        .filter_map(|row| {
            let text = row.get(column_index).map(Cell::to_text).unwrap_or_default();
            (!text.is_empty()).then_some(text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SheetGrid {
        SheetGrid::new(
            "Register",
            vec![
                vec![Cell::from_text("Drawing No"), Cell::from_text("Title")],
                vec![Cell::from_text(" ABC-DEF-001 "), Cell::from_text("Plan")],
                vec![Cell::Empty, Cell::from_text("spacer row")],
                vec![Cell::from_text("ABC-DEF-002")],
                vec![Cell::from_text("ABC-DEF-001")],
            ],
        )
    }

    #[test]
    fn extracts_in_row_order_skipping_blanks() {
        let names = extract_expected_names(&sheet(), 0, 0);
        assert_eq!(names, vec!["ABC-DEF-001", "ABC-DEF-002", "ABC-DEF-001"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let names = extract_expected_names(&sheet(), 0, 0);
        assert_eq!(names.iter().filter(|n| *n == "ABC-DEF-001").count(), 2);
    }

    #[test]
    fn header_at_last_row_yields_no_names() {
        let names = extract_expected_names(&sheet(), 4, 0);
        assert!(names.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_column_panics() {
        extract_expected_names(&sheet(), 0, 9);
    }

    #[test]
    fn numeric_cells_extract_as_text() {
        let grid = SheetGrid::new(
            "Register",
            vec![
                vec![Cell::from_text("No")],
                vec![Cell::Number(1001.0)],
            ],
        );
        assert_eq!(extract_expected_names(&grid, 0, 0), vec!["1001"]);
    }
}
