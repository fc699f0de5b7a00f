//! Heuristics for locating a drawing register inside an arbitrary,
//! human-authored workbook and for recognising drawing files in a delivered
//! folder.
//!
//! Every function here is pure and total: ambiguity is reported as data
//! (`Option`, low confidence scores), never as errors. Each heuristic is a
//! small scoring function over enumerated candidates plus max-selection, so
//! individual weights and thresholds stay testable in isolation.

pub mod column;
pub mod extract;
pub mod filter;
pub mod header;
pub mod normalize;
pub mod sheet;

pub use column::{COLUMN_SAMPLE_LIMIT, detect_filename_column, looks_like_filename};
pub use extract::extract_expected_names;
pub use filter::{filter_drawing_files, is_drawing_file};
pub use header::{HEADER_KEYWORDS, HEADER_SCAN_ROWS, detect_header_row};
pub use normalize::{normalize_key, normalize_key_with};
pub use sheet::analyze_workbook_sheets;
