//! JSON report export.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use drc_model::{ComparisonResult, Summary, ValidationRow};

use crate::error::{ReportError, Result};
use crate::summary::round_percentage;

/// Run context recorded alongside the results.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    /// Register file name as the user supplied it.
    pub register: String,
    /// Delivered folder as the user supplied it.
    pub folder: String,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    register: &'a str,
    folder: &'a str,
    summary: Summary,
    results: &'a [ValidationRow],
}

/// Serializes a comparison result with metadata to a JSON string.
/// The percentage is rounded to one decimal here, at the presentation edge.
pub fn render_json(result: &ComparisonResult, meta: &ReportMeta) -> Result<String> {
    let mut summary = result.summary.clone();
    summary.delivery_percentage = round_percentage(summary.delivery_percentage);
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        register: &meta.register,
        folder: &meta.folder,
        summary,
        results: &result.rows,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Writes the JSON report to `path`.
pub fn write_json(path: &Path, result: &ComparisonResult, meta: &ReportMeta) -> Result<()> {
    let rendered = render_json(result, meta)?;
    std::fs::write(path, rendered).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
