use super::habit::DATE_KEY_FORMAT;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// `HH:MM`, negative durations clamp to zero.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Countdown display, `MM:SS`. Minutes are not wrapped into hours.
pub fn format_countdown(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Whole amounts without a fractional part, others with up to two decimals.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        let formatted = format!("{:.2}", amount);
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// `3/8 glasses`, or `3/8` without a unit.
pub fn format_progress(progress: f64, goal: f64, unit: &str) -> String {
    let base = format!("{}/{}", format_amount(progress), format_amount(goal));
    if unit.is_empty() {
        base
    } else {
        format!("{} {}", base, unit)
    }
}

pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Parses `today`, `yesterday` or `YYYY-MM-DD`.
pub fn parse_date(value: &str, today: NaiveDate) -> Result<NaiveDate> {
    match value.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, DATE_KEY_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string()))),
    }
}

/// Parses `YYYY-MM-DD HH:MM` or a bare `YYYY-MM-DD`, which means the end of that day.
pub fn parse_date_time(value: &str, today: NaiveDate) -> Result<NaiveDateTime> {
    let value = value.trim();
    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return Ok(date_time);
    }
    let date = parse_date(value, today).map_err(|_| msg_error_anyhow!(Message::InvalidDateTime(value.to_string())))?;
    Ok(date.and_time(NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)))
}
