//! Timesheet export for external analysis and accounting.
//!
//! Exports the weekly-grouped timesheet to CSV, JSON or Excel. CSV is the
//! format the production accountant usually asks for; JSON preserves the
//! full records for programmatic use; Excel adds per-week total rows with
//! light formatting.

use crate::libs::formatter::{format_hours, LogGroup};
use crate::libs::messages::Message;
use crate::libs::week::WeekSummary;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one row per logged day.
    Csv,
    /// Pretty-printed JSON, weeks with nested log records.
    Json,
    /// Excel workbook with per-week total rows.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Writes the weekly timesheet to a file in the selected format.
pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Exports the given weeks and returns the written path.
    pub fn export(&self, weeks: &[WeekSummary]) -> Result<PathBuf> {
        if weeks.is_empty() {
            msg_bail_anyhow!(Message::ExportEmpty);
        }

        let path = self.output.clone().unwrap_or_else(|| self.default_output());
        msg_debug!(format!("exporting {} week(s) to {}", weeks.len(), path.display()));

        match self.format {
            ExportFormat::Csv => self.export_csv(weeks, &path)?,
            ExportFormat::Json => self.export_json(weeks, &path)?,
            ExportFormat::Excel => self.export_excel(weeks, &path)?,
        }

        Ok(path)
    }

    fn default_output(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("wraptime_timesheet_{}.{}", stamp, self.format.extension()))
    }

    fn export_csv(&self, weeks: &[WeekSummary], path: &PathBuf) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["week", "date", "call", "meal", "wrap", "total"])?;

        for week in weeks {
            let key = week.key.to_string();
            for log in week.logs.format() {
                writer.write_record([
                    key.as_str(),
                    log.date.as_str(),
                    log.call.as_str(),
                    log.meal.as_str(),
                    log.end.as_str(),
                    log.total.as_str(),
                ])?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn export_json(&self, weeks: &[WeekSummary], path: &PathBuf) -> Result<()> {
        let payload: Vec<serde_json::Value> = weeks
            .iter()
            .map(|week| {
                serde_json::json!({
                    "week": week.key.to_string(),
                    "total_hours": week.total_hours,
                    "logs": week.logs,
                })
            })
            .collect();

        let mut file = File::create(path)?;
        file.write_all(serde_json::to_string_pretty(&payload)?.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, weeks: &[WeekSummary], path: &PathBuf) -> Result<()> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();
        let worksheet = workbook.add_worksheet().set_name("Timesheet")?;

        let headers = ["Week", "Date", "Call", "Meal", "Wrap", "Total"];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
        }

        let mut row = 1u32;
        for week in weeks {
            let key = week.key.to_string();
            for log in week.logs.format() {
                worksheet.write_string(row, 0, key.as_str())?;
                worksheet.write_string(row, 1, log.date.as_str())?;
                worksheet.write_string(row, 2, log.call.as_str())?;
                worksheet.write_string(row, 3, log.meal.as_str())?;
                worksheet.write_string(row, 4, log.end.as_str())?;
                worksheet.write_string(row, 5, log.total.as_str())?;
                row += 1;
            }
            worksheet.write_string_with_format(row, 0, format!("{} total", key), &bold)?;
            worksheet.write_string_with_format(row, 5, format_hours(week.total_hours), &bold)?;
            row += 1;
        }

        workbook.save(path)?;
        Ok(())
    }
}
