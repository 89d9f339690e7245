//! Automatic activation by time of day.

use chrono::NaiveTime;

use crate::error::{Result, SiteError};

/// Parse an `H:MM` or `HH:MM` time of day.
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| SiteError::InvalidTime(value.to_string()))
}

/// Whether `time` falls in the window starting at `activation` and ending
/// (exclusive) at `deactivation`. A window whose end is not after its start
/// wraps over midnight.
pub fn is_in_time_interval(time: NaiveTime, activation: &str, deactivation: &str) -> Result<bool> {
    let start = parse_time(activation)?;
    let end = parse_time(deactivation)?;
    Ok(if start < end {
        start <= time && time < end
    } else {
        time >= start || time < end
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn parses_short_hours() {
        assert_eq!(parse_time("9:00").unwrap(), at(9, 0));
        assert_eq!(parse_time(" 18:30 ").unwrap(), at(18, 30));
        assert!(matches!(parse_time("25:00"), Err(SiteError::InvalidTime(_))));
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn window_wraps_over_midnight() {
        assert!(is_in_time_interval(at(23, 0), "18:00", "9:00").unwrap());
        assert!(is_in_time_interval(at(18, 0), "18:00", "9:00").unwrap());
        assert!(is_in_time_interval(at(3, 0), "18:00", "9:00").unwrap());
        assert!(!is_in_time_interval(at(9, 0), "18:00", "9:00").unwrap());
        assert!(!is_in_time_interval(at(12, 0), "18:00", "9:00").unwrap());
    }

    #[test]
    fn daytime_window() {
        assert!(is_in_time_interval(at(10, 0), "9:00", "17:00").unwrap());
        assert!(!is_in_time_interval(at(17, 0), "9:00", "17:00").unwrap());
        assert!(!is_in_time_interval(at(8, 59), "9:00", "17:00").unwrap());
    }
}
