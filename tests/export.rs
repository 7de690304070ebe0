#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use wraptime::libs::export::{ExportFormat, Exporter};
    use wraptime::libs::timelog::TimeLog;
    use wraptime::libs::week::WeekGrouping;

    fn sample_weeks() -> Vec<wraptime::libs::week::WeekSummary> {
        let log = |date: &str, total: f64| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
            TimeLog {
                id: TimeLog::log_id(date, "crew@abetterset.example"),
                user_id: "crew@abetterset.example".to_string(),
                user_name: "Crew Member".to_string(),
                department: "IMAGE".to_string(),
                date,
                call_time: "09:00".to_string(),
                meal_time: "13:00".to_string(),
                has_shortened_meal: false,
                end_time: "18:00".to_string(),
                total_hours: total,
            }
        };
        vec![log("2026-07-27", 8.0), log("2026-07-28", 9.5), log("2026-08-03", 8.0)].group_by_week()
    }

    #[test]
    fn test_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("timesheet.csv");

        let written = Exporter::new(ExportFormat::Csv, Some(path.clone()))
            .export(&sample_weeks())
            .unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "week,date,call,meal,wrap,total");
        // One row per logged day
        assert_eq!(lines.count(), 3);
        assert!(content.contains("2026-W31,2026-07-27,09:00,13:00,18:00,8.00"));
        assert!(content.contains("2026-W32,2026-08-03"));
    }

    #[test]
    fn test_json_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("timesheet.json");

        Exporter::new(ExportFormat::Json, Some(path.clone()))
            .export(&sample_weeks())
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let weeks = parsed.as_array().unwrap();
        assert_eq!(weeks.len(), 2);
        // Weeks are ordered most recent first
        assert_eq!(weeks[0]["week"], "2026-W32");
        assert_eq!(weeks[1]["week"], "2026-W31");
        assert_eq!(weeks[1]["logs"].as_array().unwrap().len(), 2);
        assert!((weeks[1]["total_hours"].as_f64().unwrap() - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_excel_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("timesheet.xlsx");

        Exporter::new(ExportFormat::Excel, Some(path.clone()))
            .export(&sample_weeks())
            .unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_export_empty_timesheet_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        let result = Exporter::new(ExportFormat::Csv, Some(path)).export(&[]);
        assert!(result.is_err());
    }
}
