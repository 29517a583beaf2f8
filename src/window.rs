use chrono::{DateTime, Timelike, Utc};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid time boundary {value:?}: expected HH:MM")]
    Malformed { value: String },
}

/// Converts an "HH:MM" string to minutes past midnight.
///
/// Values like "25:00" are accepted without range checks; a window built from
/// one simply never matches a real minute of day.
pub fn hhmm_to_minutes(hhmm: &str) -> Result<u32, WindowError> {
    let malformed = || WindowError::Malformed {
        value: hhmm.to_string(),
    };

    let (h, m) = hhmm.split_once(':').ok_or_else(malformed)?;
    let hours: u32 = h.trim().parse().map_err(|_| malformed())?;
    let minutes: u32 = m.trim().parse().map_err(|_| malformed())?;

    Ok(hours * 60 + minutes)
}

pub fn minute_of_day(t: DateTime<Utc>) -> u32 {
    t.hour() * 60 + t.minute()
}

/// The safety-belt gate restricting alert activity to a UTC minute-of-day
/// range. Boundaries are operator-supplied UTC strings; no timezone
/// conversion happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingWindow {
    start: u32,
    end: u32,
}

impl TradingWindow {
    pub fn parse(start: &str, end: &str) -> Result<Self, WindowError> {
        Ok(Self {
            start: hhmm_to_minutes(start)?,
            end: hhmm_to_minutes(end)?,
        })
    }

    /// Inclusive on both ends; the date is ignored.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        let minute = minute_of_day(t);
        self.start <= minute && minute <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 11, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_hhmm_to_minutes() {
        assert_eq!(hhmm_to_minutes("14:35"), Ok(875));
        assert_eq!(hhmm_to_minutes("00:00"), Ok(0));
        assert_eq!(hhmm_to_minutes("23:59"), Ok(1439));
    }

    #[test]
    fn test_hhmm_to_minutes_no_range_check() {
        // Preserved behavior: well-formed but impossible values are accepted.
        assert_eq!(hhmm_to_minutes("25:99"), Ok(25 * 60 + 99));
    }

    #[test]
    fn test_hhmm_to_minutes_malformed() {
        for bad in ["1435", "14:3x", "half past two", "", ":"] {
            assert!(hhmm_to_minutes(bad).is_err(), "{:?} should not parse", bad);
        }
    }

    #[test]
    fn test_window_inclusive_bounds() {
        let window = TradingWindow::parse("14:35", "16:00").unwrap();

        assert!(window.contains(utc(14, 35)));
        assert!(window.contains(utc(16, 0)));
        assert!(window.contains(utc(15, 12)));

        assert!(!window.contains(utc(14, 34)));
        assert!(!window.contains(utc(16, 1)));
        assert!(!window.contains(utc(3, 0)));
    }

    #[test]
    fn test_window_ignores_date() {
        let window = TradingWindow::parse("14:35", "16:00").unwrap();
        let other_day = Utc.with_ymd_and_hms(2031, 12, 25, 15, 0, 0).unwrap();
        assert!(window.contains(other_day));
    }

    #[test]
    fn test_window_with_inflated_end_never_excludes_in_range_minutes() {
        let window = TradingWindow::parse("00:00", "25:00").unwrap();
        assert!(window.contains(utc(23, 59)));
    }

    #[test]
    fn test_malformed_boundary_is_an_error() {
        assert!(TradingWindow::parse("14:35", "sixteen").is_err());
        assert!(TradingWindow::parse("soon", "16:00").is_err());
    }
}
