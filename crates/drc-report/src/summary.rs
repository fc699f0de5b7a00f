//! Terminal rendering of a comparison result.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use drc_model::{ComparisonResult, RowStatus, ValidationRow};

/// Display label for a row status.
pub fn status_label(status: &RowStatus) -> &'static str {
    match status {
        RowStatus::Done { .. } => "Done",
        RowStatus::Todo => "To Do",
        RowStatus::Extra => "File not in Drawing List",
    }
}

/// Matched-file column text for a row: the file for Done, `"N/A"` for To Do,
/// the orphan file's own name for extras.
pub fn matched_label(row: &ValidationRow) -> &str {
    match &row.status {
        RowStatus::Done { matched_file } => matched_file,
        RowStatus::Todo => "N/A",
        RowStatus::Extra => &row.name,
    }
}

/// Rounds a percentage to one decimal for display.
pub fn round_percentage(percentage: f64) -> f64 {
    (percentage * 10.0).round() / 10.0
}

/// Prints the per-row table and summary line to stdout.
pub fn print_summary(result: &ComparisonResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Expected / File"),
        header_cell("Matched File"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);

    for (index, row) in result.rows.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&row.name),
            Cell::new(matched_label(row)),
            status_cell(&row.status),
        ]);
    }

    let summary = &result.summary;
    table.add_row(vec![
        Cell::new("").add_attribute(Attribute::Bold),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} done / {} to do / {} extra",
            summary.done, summary.todo, summary.extra
        ))
        .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{:.1}% delivered",
            round_percentage(summary.delivery_percentage)
        ))
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold),
    ]);

    println!("{table}");
    println!(
        "Expected: {}  Done: {}  To Do: {}  Extra: {}  Delivery: {:.1}%",
        summary.total,
        summary.done,
        summary.todo,
        summary.extra,
        round_percentage(summary.delivery_percentage)
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn status_cell(status: &RowStatus) -> Cell {
    let cell = Cell::new(status_label(status));
    match status {
        RowStatus::Done { .. } => cell.fg(Color::Green),
        RowStatus::Todo => cell.fg(Color::Red),
        RowStatus::Extra => cell.fg(Color::Yellow),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_the_report_vocabulary() {
        assert_eq!(
            status_label(&RowStatus::Done {
                matched_file: "a.pdf".to_string()
            }),
            "Done"
        );
        assert_eq!(status_label(&RowStatus::Todo), "To Do");
        assert_eq!(status_label(&RowStatus::Extra), "File not in Drawing List");
    }

    #[test]
    fn todo_rows_render_not_available() {
        let row = ValidationRow::todo("ABC-DEF-002");
        assert_eq!(matched_label(&row), "N/A");

        let extra = ValidationRow::extra("EXTRA-999.pdf");
        assert_eq!(matched_label(&extra), "EXTRA-999.pdf");
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(round_percentage(100.0 / 3.0), 33.3);
        assert_eq!(round_percentage(66.666_666), 66.7);
        assert_eq!(round_percentage(0.0), 0.0);
        assert_eq!(round_percentage(100.0), 100.0);
    }
}
