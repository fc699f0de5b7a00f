//! Reconciliation output.

use serde::{Deserialize, Serialize};

/// Classification of one result row.
///
/// A tagged variant instead of a record with sentinel strings: presentation
/// layers render `"N/A"` and `"File not in Drawing List"`, the core never
/// stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowStatus {
    /// The expected entry was matched to a delivered file.
    Done { matched_file: String },
    /// The expected entry has no delivered counterpart.
    Todo,
    /// A delivered file no expected entry claimed.
    Extra,
}

/// One row of the comparison report.
///
/// For `Done`/`Todo` rows `name` is the register entry; for `Extra` rows it
/// is the orphan delivered file's own name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRow {
    pub name: String,
    #[serde(flatten)]
    pub status: RowStatus,
}

impl ValidationRow {
    pub fn done(name: impl Into<String>, matched_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: RowStatus::Done {
                matched_file: matched_file.into(),
            },
        }
    }

    pub fn todo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: RowStatus::Todo,
        }
    }

    pub fn extra(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: RowStatus::Extra,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.status, RowStatus::Done { .. })
    }

    pub fn is_todo(&self) -> bool {
        self.status == RowStatus::Todo
    }

    pub fn is_extra(&self) -> bool {
        self.status == RowStatus::Extra
    }

    pub fn matched_file(&self) -> Option<&str> {
        match &self.status {
            RowStatus::Done { matched_file } => Some(matched_file),
            RowStatus::Todo | RowStatus::Extra => None,
        }
    }
}

/// Aggregate counts over a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of expected register entries (`done + todo`).
    pub total: usize,
    pub done: usize,
    pub todo: usize,
    pub extra: usize,
    /// `done / total * 100`, unrounded; `0.0` when `total` is zero.
    /// Presentation layers round for display.
    pub delivery_percentage: f64,
}

impl Summary {
    pub fn from_counts(done: usize, todo: usize, extra: usize) -> Self {
        let total = done + todo;
        let delivery_percentage = if total == 0 {
            0.0
        } else {
            done as f64 / total as f64 * 100.0
        };
        Self {
            total,
            done,
            todo,
            extra,
            delivery_percentage,
        }
    }

    pub fn has_missing(&self) -> bool {
        self.todo > 0
    }
}

/// The full output of one reconciliation run: expected-derived rows in
/// extraction order, followed by extra-file rows in delivered order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub rows: Vec<ValidationRow>,
    pub summary: Summary,
}

impl ComparisonResult {
    /// Builds a result, deriving the summary from the rows. This is the only
    /// constructor, so `done + todo + extra == rows.len()` holds by
    /// construction.
    pub fn new(rows: Vec<ValidationRow>) -> Self {
        let done = rows.iter().filter(|row| row.is_done()).count();
        let todo = rows.iter().filter(|row| row.is_todo()).count();
        let extra = rows.iter().filter(|row| row.is_extra()).count();
        let summary = Summary::from_counts(done, todo, extra);
        Self { rows, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_partition_rows() {
        let result = ComparisonResult::new(vec![
            ValidationRow::done("A-1", "A-1.pdf"),
            ValidationRow::todo("A-2"),
            ValidationRow::extra("B-9.pdf"),
        ]);
        let summary = &result.summary;
        assert_eq!(summary.total, 2);
        assert_eq!(summary.done + summary.todo, summary.total);
        assert_eq!(
            summary.done + summary.todo + summary.extra,
            result.rows.len()
        );
        assert!((summary.delivery_percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_result_has_zero_percentage() {
        let result = ComparisonResult::new(Vec::new());
        assert_eq!(result.summary.total, 0);
        assert_eq!(result.summary.delivery_percentage, 0.0);
    }

    #[test]
    fn row_status_serializes_with_tag() {
        let row = ValidationRow::done("A-1", "A-1.pdf");
        let json = serde_json::to_value(&row).expect("serialize row");
        assert_eq!(json["status"], "done");
        assert_eq!(json["matched_file"], "A-1.pdf");

        let todo = serde_json::to_value(ValidationRow::todo("A-2")).expect("serialize row");
        assert_eq!(todo["status"], "todo");
        assert!(todo.get("matched_file").is_none());
    }

    #[test]
    fn rows_round_trip_through_json() {
        let result = ComparisonResult::new(vec![
            ValidationRow::done("A-1", "A-1.pdf"),
            ValidationRow::extra("B-9.pdf"),
        ]);
        let json = serde_json::to_string(&result).expect("serialize result");
        let round: ComparisonResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round, result);
    }
}
