use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info;

use drc_cli::pipeline::{self, CheckReport, CheckRequest};
use drc_reconcile::ReconcileOptions;
use drc_report::summary::apply_table_style;
use drc_report::{ReportMeta, write_csv, write_json};

use crate::cli::{CheckArgs, SheetsArgs};

pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let request = CheckRequest {
        register: args.register.clone(),
        folder: args.folder.clone(),
        sheet: args.sheet.clone(),
        header_row: one_based(args.header_row, "--header-row")?,
        column: one_based(args.column, "--column")?,
        options: reconcile_options(args)?,
    };
    let report = pipeline::run_check(&request)?;

    if let Some(path) = &args.json {
        let meta = ReportMeta {
            register: args.register.display().to_string(),
            folder: args.folder.display().to_string(),
        };
        write_json(path, &report.result, &meta)
            .with_context(|| format!("write JSON report {}", path.display()))?;
        info!(path = %path.display(), "wrote JSON report");
    }
    if let Some(path) = &args.csv {
        write_csv(path, &report.result)
            .with_context(|| format!("write CSV report {}", path.display()))?;
        info!(path = %path.display(), "wrote CSV report");
    }
    Ok(report)
}

pub fn run_sheets(args: &SheetsArgs) -> Result<()> {
    let analyses = pipeline::list_sheets(&args.register)?;
    let mut table = Table::new();
    table.set_header(vec!["Sheet", "Rows", "Non-empty", "Score"]);
    apply_table_style(&mut table);
    for analysis in analyses {
        table.add_row(vec![
            analysis.name,
            analysis.row_count.to_string(),
            analysis.non_empty_row_count.to_string(),
            format!("{:.1}", analysis.score),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Converts a 1-based CLI row/column number to a zero-based index.
fn one_based(value: Option<usize>, flag: &str) -> Result<Option<usize>> {
    match value {
        Some(0) => bail!("{flag} is 1-based; 0 is not a valid value"),
        Some(n) => Ok(Some(n - 1)),
        None => Ok(None),
    }
}

fn reconcile_options(args: &CheckArgs) -> Result<ReconcileOptions> {
    let mut options = ReconcileOptions {
        strip_revision: !args.keep_revision,
        fuzzy: !args.no_fuzzy,
        ..ReconcileOptions::default()
    };
    if let Some(threshold) = args.fuzzy_threshold {
        if !(0.0..=1.0).contains(&threshold) {
            bail!("--fuzzy-threshold must be between 0.0 and 1.0");
        }
        options.fuzzy_threshold = threshold;
    }
    Ok(options)
}
