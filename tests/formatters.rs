#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use positrack::libs::formatter::{
        format_amount, format_countdown, format_duration, format_percent, format_progress, parse_date, parse_date_time,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 2).unwrap()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
        assert_eq!(format_duration(&(Duration::hours(1) + Duration::minutes(30))), "01:30");
        assert_eq!(format_duration(&Duration::minutes(-5)), "00:00");
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(25 * 60), "25:00");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(90 * 60 + 5), "90:05");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(2.5), "2.5");
        assert_eq!(format_amount(0.25), "0.25");
        assert_eq!(format_amount(1.001), "1");
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(3.0, 8.0, "glasses"), "3/8 glasses");
        assert_eq!(format_progress(0.5, 1.0, ""), "0.5/1");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("today", today()).unwrap(), today());
        assert_eq!(parse_date("Yesterday", today()).unwrap(), NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
        assert_eq!(parse_date("2024-02-29", today()).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_date("2024-02-30", today()).is_err());
        assert!(parse_date("tomorrow-ish", today()).is_err());
    }

    #[test]
    fn test_parse_date_time() {
        let exact = parse_date_time("2024-10-05 14:30", today()).unwrap();
        assert_eq!(exact, NaiveDate::from_ymd_opt(2024, 10, 5).unwrap().and_hms_opt(14, 30, 0).unwrap());

        let end_of_day = parse_date_time("2024-10-05", today()).unwrap();
        assert_eq!(end_of_day, NaiveDate::from_ymd_opt(2024, 10, 5).unwrap().and_hms_opt(23, 59, 0).unwrap());

        assert_eq!(parse_date_time("today", today()).unwrap().date(), today());
        assert!(parse_date_time("5 Oct", today()).is_err());
    }
}
