//! Shared data model for drawing-register reconciliation.
//!
//! Everything here is plain immutable data: the decoded cell grid, the
//! detection results produced by the heuristics, and the comparison output
//! consumed by reports. No I/O, no state.

pub mod analysis;
pub mod delivered;
pub mod grid;
pub mod result;

pub use analysis::{ColumnDetection, HeaderDetection, SheetAnalysis};
pub use delivered::DeliveredFile;
pub use grid::{Cell, SheetGrid, Workbook};
pub use result::{ComparisonResult, RowStatus, Summary, ValidationRow};
