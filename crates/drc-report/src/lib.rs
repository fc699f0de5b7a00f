//! Presentation of comparison results.
//!
//! The engine returns unrounded numbers and tagged rows; everything
//! display-shaped lives here: the one-decimal percentage, the `"N/A"` and
//! `"File not in Drawing List"` labels, table styling, and file exports.

pub mod csv_out;
pub mod error;
pub mod json;
pub mod summary;

pub use csv_out::write_csv;
pub use error::{ReportError, Result};
pub use json::{ReportMeta, render_json, write_json};
pub use summary::{print_summary, round_percentage, status_label};
