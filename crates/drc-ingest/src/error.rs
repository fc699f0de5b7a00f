//! Error types for register and folder ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding registers or scanning folders.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Register file not found.
    #[error("register not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Delivered folder not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to walk the delivered folder.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Failed to open or decode a workbook.
    #[error("failed to open workbook {path}: {source}")]
    WorkbookOpen {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Failed to read one sheet out of a workbook.
    #[error("failed to read sheet '{sheet}' in {path}: {source}")]
    SheetRead {
        sheet: String,
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Failed to parse a CSV register.
    #[error("failed to parse CSV register {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The register file has an extension no decoder handles.
    #[error("unsupported register format: {path} (expected .xlsx, .xlsm, .xls, .ods, or .csv)")]
    UnsupportedFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
