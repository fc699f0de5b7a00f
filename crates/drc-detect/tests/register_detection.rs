//! End-to-end detection over a realistic register sheet: sheet ranking,
//! header detection, column detection, and name extraction chained together.

use drc_detect::{
    analyze_workbook_sheets, detect_filename_column, detect_header_row, extract_expected_names,
};
use drc_model::{Cell, SheetGrid, Workbook};

fn row(values: &[&str]) -> Vec<Cell> {
    values.iter().map(|v| Cell::from_text(v)).collect()
}

fn register_workbook() -> Workbook {
    Workbook::new(vec![
        SheetGrid::new(
            "Cover",
            vec![row(&["Project X"]), vec![], row(&["Issued 2024"])],
        ),
        SheetGrid::new(
            "Drawing Register",
            vec![
                row(&["Rev", "Date", "Drawing Number", "Description"]),
                row(&["A", "2024-01-02", "ABC-DEF-001", "Ground floor"]),
                row(&["A", "2024-01-02", "ABC-DEF-002", "First floor"]),
                row(&["B", "2024-02-10", "ABC-DEF-003", "Roof plan"]),
            ],
        ),
    ])
}

#[test]
fn full_detection_chain_selects_the_register() {
    let workbook = register_workbook();

    let ranked = analyze_workbook_sheets(&workbook);
    assert_eq!(ranked[0].name, "Drawing Register");

    let sheet = workbook.sheet(&ranked[0].name).expect("sheet");
    let header = detect_header_row(sheet).expect("header row");
    assert_eq!(header.row_index, 0);

    let column = detect_filename_column(&header, sheet).expect("column");
    assert_eq!(column.column_index, 2);
    assert!(column.confidence > 75.0);

    let names = extract_expected_names(sheet, header.row_index, column.column_index);
    assert_eq!(names, vec!["ABC-DEF-001", "ABC-DEF-002", "ABC-DEF-003"]);
}

#[test]
fn detection_surfaces_ambiguity_as_data() {
    // A sheet with no header keywords: both detectors decline, nothing
    // panics, and the caller is left to prompt for manual selection.
    let sheet = SheetGrid::new(
        "Costs",
        vec![row(&["100", "200"]), row(&["300", "400"])],
    );
    assert!(detect_header_row(&sheet).is_none());

    let workbook = Workbook::new(vec![sheet]);
    let ranked = analyze_workbook_sheets(&workbook);
    assert_eq!(ranked.len(), 1);
}
