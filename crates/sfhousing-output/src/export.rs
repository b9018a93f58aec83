//! Export functionality for dashboard tables and charts.
//!
//! Tables export as CSV, JSON records or a plain text table; chart
//! descriptions export as JSON only.

use crate::cells;
use crate::chart::ChartSpec;
use polars::prelude::*;
use sfhousing_analysis::AggregateTable;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writer produced bytes that are not UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Reading the table failed.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,

    /// Aligned plain text table.
    Text,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
            Self::Text => "txt",
        }
    }
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the format is not
    /// supported for this data.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl Exporter for AggregateTable {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                wtr.write_record(self.column_names())?;
                for row in cells::rows(self.frame(), cells::csv_value)? {
                    wtr.write_record(row)?;
                }
                let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)?;
                Ok(data)
            }
            ExportFormat::Json => Ok(serde_json::to_string(&cells::records(self.frame())?)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(&cells::records(
                self.frame(),
            )?)?),
            ExportFormat::Text => to_ascii_table(self),
        }
    }
}

impl Exporter for ChartSpec {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
            ExportFormat::Csv | ExportFormat::Text => Err(ExportError::InvalidFormat(format!(
                "chart descriptions export as JSON, not {}",
                format.extension()
            ))),
        }
    }
}

/// Format a table for terminal display.
///
/// Text columns are left aligned, everything else right aligned. Nulls are
/// blank. A display range, when present, is printed under the table.
pub fn to_ascii_table(table: &AggregateTable) -> Result<String, ExportError> {
    let names = table.column_names();
    let rows = cells::rows(table.frame(), cells::text_value)?;
    let left: Vec<bool> = table
        .frame()
        .get_columns()
        .iter()
        .map(|c| matches!(c.dtype(), DataType::String))
        .collect();

    let widths: Vec<usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            rows.iter()
                .map(|row| row[i].len())
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);

    let format_row = |cells: &[String]| -> String {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if left[i] {
                    format!("{:<width$}", cell, width = widths[i])
                } else {
                    format!("{:>width$}", cell, width = widths[i])
                }
            })
            .collect();
        line.join(" ").trim_end().to_string()
    };

    let mut output = String::new();
    output.push_str(&format_row(&names));
    output.push('\n');
    output.push_str(&"-".repeat(total));
    output.push('\n');

    for row in &rows {
        output.push_str(&format_row(row));
        output.push('\n');
    }

    output.push_str(&"-".repeat(total));
    output.push('\n');
    output.push_str(&format!("{} rows\n", rows.len()));
    if let Some(range) = table.display_range() {
        output.push_str(&format!("Display range: {}\n", range));
    }

    Ok(output)
}
