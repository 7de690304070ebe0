#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use wraptime::db::time_logs::{TimeLogStore, TimeLogs};
    use wraptime::libs::config::IdentityConfig;
    use wraptime::libs::timelog::TimeLog;

    struct TimeLogTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TimeLogTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TimeLogTestContext { _temp_dir: temp_dir }
        }
    }

    fn identity() -> IdentityConfig {
        IdentityConfig {
            email: "crew@abetterset.example".to_string(),
            name: "Crew Member".to_string(),
            department: "IMAGE".to_string(),
        }
    }

    fn sample_log(date: NaiveDate) -> TimeLog {
        TimeLog::new(&identity(), date, "09:00", "13:00", "18:00", false)
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_put_and_get(_ctx: &mut TimeLogTestContext) {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let log = sample_log(date);

        let mut store = TimeLogs::new().unwrap();
        store.put(&log).unwrap();

        let fetched = store.get(&log.id).unwrap().unwrap();
        assert_eq!(fetched.id, "2026-08-03_crew@abetterset.example");
        assert_eq!(fetched.date, date);
        assert_eq!(fetched.call_time, "09:00");
        assert_eq!(fetched.end_time, "18:00");
        assert_eq!(fetched.total_hours, 8.0);
        assert!(!fetched.has_shortened_meal);
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_get_missing_returns_none(_ctx: &mut TimeLogTestContext) {
        let mut store = TimeLogs::new().unwrap();
        assert!(store.get("2026-01-01_nobody@example.com").unwrap().is_none());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_put_replaces_same_day_entry(_ctx: &mut TimeLogTestContext) {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let mut store = TimeLogs::new().unwrap();

        store.put(&sample_log(date)).unwrap();

        // Saving the same day again overwrites the previous record
        let corrected = TimeLog::new(&identity(), date, "08:00", "", "20:00", true);
        store.put(&corrected).unwrap();

        let logs = store.fetch_user("crew@abetterset.example").unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].call_time, "08:00");
        assert_eq!(logs[0].end_time, "20:00");
        assert!(logs[0].has_shortened_meal);
        assert_eq!(logs[0].total_hours, 11.5);
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_delete(_ctx: &mut TimeLogTestContext) {
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let log = sample_log(date);

        let mut store = TimeLogs::new().unwrap();
        store.put(&log).unwrap();
        assert!(store.get(&log.id).unwrap().is_some());

        store.delete(&log.id).unwrap();
        assert!(store.get(&log.id).unwrap().is_none());
    }

    #[test_context(TimeLogTestContext)]
    #[test]
    fn test_fetch_user_orders_by_date_and_filters_user(_ctx: &mut TimeLogTestContext) {
        let mut store = TimeLogs::new().unwrap();

        for day in [5, 3, 4] {
            let date = NaiveDate::from_ymd_opt(2026, 8, day).unwrap();
            store.put(&sample_log(date)).unwrap();
        }

        let other = IdentityConfig {
            email: "gaffer@abetterset.example".to_string(),
            name: "Gaffer".to_string(),
            department: "LUMIERE".to_string(),
        };
        let date = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        store.put(&TimeLog::new(&other, date, "07:00", "", "17:00", false)).unwrap();

        let logs = store.fetch_user("crew@abetterset.example").unwrap();
        assert_eq!(logs.len(), 3);
        let dates: Vec<NaiveDate> = logs.iter().map(|l| l.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            ]
        );
        assert!(logs.iter().all(|l| l.user_id == "crew@abetterset.example"));
    }
}
