//! Decoded spreadsheet cells.
//!
//! A workbook is decoded once by the ingest layer and treated as immutable
//! for the duration of an analysis run. Rows may be ragged; absent cells are
//! equivalent to [`Cell::Empty`].

use serde::{Deserialize, Serialize};

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    /// Builds a cell from raw text, mapping blank input to [`Cell::Empty`].
    pub fn from_text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Whether the cell holds a numeric value, including numeric-looking text.
    pub fn is_numeric(&self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Number(_) => true,
            Cell::Text(text) => text.trim().parse::<f64>().is_ok(),
        }
    }

    /// String form of the cell. Whole numbers render without a fraction so
    /// that a numeric drawing code like `1001` round-trips as `"1001"`.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.trim().to_string(),
            Cell::Number(value) => {
                if *value == value.floor() && value.abs() < 1e15 {
                    format!("{}", *value as i64)
                } else {
                    value.to_string()
                }
            }
        }
    }
}

/// One decoded worksheet: a name plus rows of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetGrid {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn non_empty_row_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .count()
    }

    /// Widest row in the sheet. Rows may be ragged.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell at `(row, column)`, treating absent positions as empty.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&EMPTY_CELL)
    }
}

/// A decoded workbook: every sheet, in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<SheetGrid>,
}

impl Workbook {
    pub fn new(sheets: Vec<SheetGrid>) -> Self {
        Self { sheets }
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetGrid> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_maps_blank_to_empty() {
        assert_eq!(Cell::from_text("   "), Cell::Empty);
        assert_eq!(Cell::from_text(" A-1 "), Cell::Text("A-1".to_string()));
    }

    #[test]
    fn numeric_detection_covers_numeric_text() {
        assert!(Cell::Number(12.0).is_numeric());
        assert!(Cell::Text("42".to_string()).is_numeric());
        assert!(!Cell::Text("A-101".to_string()).is_numeric());
        assert!(!Cell::Empty.is_numeric());
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(Cell::Number(1001.0).to_text(), "1001");
        assert_eq!(Cell::Number(1.5).to_text(), "1.5");
    }

    #[test]
    fn grid_handles_ragged_rows() {
        let grid = SheetGrid::new(
            "Sheet1",
            vec![
                vec![Cell::from_text("a"), Cell::from_text("b")],
                vec![Cell::from_text("c")],
            ],
        );
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.cell(1, 1), &Cell::Empty);
        assert_eq!(grid.cell(9, 9), &Cell::Empty);
    }

    #[test]
    fn non_empty_row_count_skips_blank_rows() {
        let grid = SheetGrid::new(
            "Sheet1",
            vec![
                vec![Cell::Empty, Cell::Empty],
                vec![Cell::from_text("x")],
                vec![],
            ],
        );
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.non_empty_row_count(), 1);
    }
}
