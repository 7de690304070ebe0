#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use wraptime::libs::timelog::TimeLog;
    use wraptime::libs::week::{WeekGrouping, WeekKey};

    fn log(date: &str, total_hours: f64) -> TimeLog {
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
            total_hours,
        }
    }

    #[test]
    fn test_week_key_format() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(WeekKey::of(date).to_string(), "2026-W01");
    }

    #[test]
    fn test_week_key_year_boundary() {
        // December 29th 2025 is a Monday in the week containing the first
        // Thursday of 2026, so it belongs to ISO year 2026
        let date = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
        let key = WeekKey::of(date);
        assert_eq!(key.iso_year, 2026);
        assert_eq!(key.week, 1);
    }

    #[test]
    fn test_week_key_parse_round_trip() {
        let key: WeekKey = "2026-W31".parse().unwrap();
        assert_eq!(key.iso_year, 2026);
        assert_eq!(key.week, 31);
        assert_eq!(key.to_string(), "2026-W31");

        assert!("2026W31".parse::<WeekKey>().is_err());
        assert!("2026-W99".parse::<WeekKey>().is_err());
        assert!("someday".parse::<WeekKey>().is_err());
    }

    #[test]
    fn test_grouping_preserves_total_hours() {
        let logs = vec![
            log("2026-07-27", 8.0),
            log("2026-07-28", 10.5),
            log("2026-08-03", 9.0),
            log("2026-08-04", 7.5),
            log("2025-12-29", 8.0),
        ];
        let individual_sum: f64 = logs.iter().map(|l| l.total_hours).sum();

        let weeks = logs.group_by_week();
        let grouped_sum: f64 = weeks.iter().map(|w| w.total_hours).sum();

        assert!((individual_sum - grouped_sum).abs() < 1e-9);
    }

    #[test]
    fn test_weeks_ordered_most_recent_first() {
        let logs = vec![
            log("2025-12-29", 8.0),
            log("2026-08-04", 7.5),
            log("2026-07-27", 8.0),
        ];

        let weeks = logs.group_by_week();
        assert_eq!(weeks.len(), 3);

        for pair in weeks.windows(2) {
            assert!(pair[0].key > pair[1].key, "week keys must be non-increasing");
        }
        assert_eq!(weeks[0].key.to_string(), "2026-W32");
        assert_eq!(weeks[2].key.to_string(), "2026-W01");
    }

    #[test]
    fn test_logs_within_week_ordered_by_date() {
        let logs = vec![
            log("2026-07-29", 8.0),
            log("2026-07-27", 9.0),
            log("2026-07-28", 10.0),
        ];

        let weeks = logs.group_by_week();
        assert_eq!(weeks.len(), 1);

        let dates: Vec<NaiveDate> = weeks[0].logs.iter().map(|l| l.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_week_contains() {
        let key: WeekKey = "2026-W31".parse().unwrap();
        assert!(key.contains(NaiveDate::from_ymd_opt(2026, 7, 27).unwrap()));
        assert!(key.contains(NaiveDate::from_ymd_opt(2026, 8, 2).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()));
    }
}
