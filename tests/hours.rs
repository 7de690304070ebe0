#[cfg(test)]
mod tests {
    use wraptime::libs::hours::{clock_minutes, compute_hours};

    #[test]
    fn test_standard_day_with_meal() {
        // 9 hour span minus the standard 60 minute meal break
        assert_eq!(compute_hours("09:00", "13:00", "18:00", false), 8.0);
    }

    #[test]
    fn test_shortened_meal_applies_without_meal_time() {
        // The deduction follows the flag even when no meal was recorded
        assert_eq!(compute_hours("09:00", "", "18:00", true), 8.5);
    }

    #[test]
    fn test_meal_deduction_ignores_recorded_meal_time() {
        let with_meal = compute_hours("08:00", "12:30", "19:00", false);
        let without_meal = compute_hours("08:00", "", "19:00", false);
        assert_eq!(with_meal, without_meal);
        assert_eq!(with_meal, 10.0);
    }

    #[test]
    fn test_overnight_wrap() {
        // 22:00 to 06:00 next day is an 8 hour span, minus 60 minutes
        assert_eq!(compute_hours("22:00", "02:00", "06:00", false), 7.0);
    }

    #[test]
    fn test_missing_endpoints_yield_zero() {
        assert_eq!(compute_hours("", "12:00", "18:00", false), 0.0);
        assert_eq!(compute_hours("09:00", "12:00", "", false), 0.0);
        assert_eq!(compute_hours("", "", "", true), 0.0);
    }

    #[test]
    fn test_malformed_times_yield_zero() {
        assert_eq!(compute_hours("9am", "", "18:00", false), 0.0);
        assert_eq!(compute_hours("09:00", "", "25:00", false), 0.0);
        assert_eq!(compute_hours("09:60", "", "18:00", false), 0.0);
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        // 30 minute span minus a 60 minute deduction
        assert_eq!(compute_hours("09:00", "", "09:30", false), 0.0);
        // Zero span minus the shortened deduction
        assert_eq!(compute_hours("09:00", "", "09:00", true), 0.0);
    }

    #[test]
    fn test_shortened_meal_deducts_thirty_minutes() {
        assert_eq!(compute_hours("09:00", "13:00", "18:00", true), 8.5);
    }

    #[test]
    fn test_clock_minutes_parsing() {
        assert_eq!(clock_minutes("00:00"), Some(0));
        assert_eq!(clock_minutes("09:30"), Some(570));
        assert_eq!(clock_minutes("23:59"), Some(1439));
        assert_eq!(clock_minutes(""), None);
        assert_eq!(clock_minutes("24:00"), None);
        assert_eq!(clock_minutes("12:60"), None);
        assert_eq!(clock_minutes("noon"), None);
    }
}
