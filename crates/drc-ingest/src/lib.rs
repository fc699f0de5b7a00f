//! Boundary I/O for the reconciliation pipeline.
//!
//! The core operates on in-memory data only; this crate is where bytes
//! become grids and directory entries become delivered-file records. Decode
//! failures surface as [`IngestError`] values for the calling layer to
//! present; nothing here is expected to panic on bad user input.

pub mod error;
pub mod folder;
pub mod workbook;

pub use error::{IngestError, Result};
pub use folder::scan_delivered_files;
pub use workbook::{load_csv_register, load_register, load_workbook};
