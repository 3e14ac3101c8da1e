//! CLI commands for reports and exports

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_expenses_csv, export_expenses_json, export_expenses_yaml};
use crate::reports::ReportFormat;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (re-importable)
    Csv,
    /// JSON format
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Pick the report format: explicit flag, then output extension, then settings
pub fn resolve_report_format(
    explicit: Option<ReportFormat>,
    output: &Path,
    settings: &Settings,
) -> ReportFormat {
    explicit
        .or_else(|| ReportFormat::from_path(output))
        .unwrap_or(settings.default_report_format)
}

/// Handle the report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    output: PathBuf,
    format: Option<ReportFormat>,
) -> BudgetResult<()> {
    let format = resolve_report_format(format, &output, settings);
    tracing::debug!(%format, output = %output.display(), "generating report");
    format.write_report(&output, &storage.expenses)
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> BudgetResult<()> {
    let file = File::create(&output).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_expenses_csv(&storage.expenses, &mut writer)?,
        ExportFormat::Json => export_expenses_json(&storage.expenses, &mut writer, pretty)?,
        ExportFormat::Yaml => export_expenses_yaml(&storage.expenses, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| BudgetError::Export(format!("Failed to write {}: {}", output.display(), e)))?;

    println!("Expenses exported to: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_report_format() {
        let settings = Settings {
            default_report_format: ReportFormat::Text,
            ..Settings::default()
        };

        assert_eq!(
            resolve_report_format(Some(ReportFormat::Html), Path::new("r.txt"), &settings),
            ReportFormat::Html
        );
        assert_eq!(
            resolve_report_format(None, Path::new("r.html"), &settings),
            ReportFormat::Html
        );
        assert_eq!(
            resolve_report_format(None, Path::new("report"), &settings),
            ReportFormat::Text
        );
    }
}
