//! Appointment time of day.
//!
//! Canonical form is whole seconds since midnight. That integer is what the
//! `appointments.appointment_time` column stores; JSON always carries the
//! 24-hour `HH:MM` rendering.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::enums::ClockStyle;

pub const SECONDS_PER_DAY: u32 = 86_400;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid time of day '{0}', expected HH:MM")]
pub struct InvalidTimeOfDay(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub fn from_seconds(seconds: u32) -> Option<Self> {
        (seconds < SECONDS_PER_DAY).then_some(Self(seconds))
    }

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour * 3600 + minute * 60))
    }

    pub fn seconds_since_midnight(&self) -> u32 {
        self.0
    }

    pub fn format(&self, style: ClockStyle) -> String {
        format_time_of_day(self.0, style)
    }
}

/// Render a duration since midnight as `HH:MM` or `HH:MM AM/PM`.
///
/// Display only. Values of a day or more wrap around midnight.
pub fn format_time_of_day(seconds_since_midnight: u32, style: ClockStyle) -> String {
    let seconds = seconds_since_midnight % SECONDS_PER_DAY;
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    match style {
        ClockStyle::TwentyFourHour => format!("{hours:02}:{minutes:02}"),
        ClockStyle::TwelveHour => {
            let period = if hours < 12 { "AM" } else { "PM" };
            let hours = match hours % 12 {
                0 => 12,
                h => h,
            };
            format!("{hours:02}:{minutes:02} {period}")
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDay;

    /// Accepts `HH:MM` or `HH:MM:SS` (24-hour). Seconds are dropped so the
    /// stored value is always the minute the API reports.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|_| InvalidTimeOfDay(s.to_string()))?;
        Ok(Self(time.hour() * 3600 + time.minute() * 60))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ClockStyle::TwentyFourHour))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl ToSql for TimeOfDay {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(i64::from(self.0)))
    }
}

impl FromSql for TimeOfDay {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_i64()?;
        u32::try_from(raw)
            .ok()
            .and_then(Self::from_seconds)
            .ok_or(FromSqlError::OutOfRange(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_twenty_four_hour() {
        assert_eq!(format_time_of_day(0, ClockStyle::TwentyFourHour), "00:00");
        assert_eq!(format_time_of_day(14 * 3600 + 30 * 60, ClockStyle::TwentyFourHour), "14:30");
        assert_eq!(format_time_of_day(9 * 3600 + 5 * 60 + 59, ClockStyle::TwentyFourHour), "09:05");
    }

    #[test]
    fn formats_twelve_hour() {
        assert_eq!(format_time_of_day(0, ClockStyle::TwelveHour), "12:00 AM");
        assert_eq!(format_time_of_day(12 * 3600, ClockStyle::TwelveHour), "12:00 PM");
        assert_eq!(format_time_of_day(14 * 3600 + 30 * 60, ClockStyle::TwelveHour), "02:30 PM");
        assert_eq!(format_time_of_day(11 * 3600 + 59 * 60, ClockStyle::TwelveHour), "11:59 AM");
    }

    #[test]
    fn values_past_midnight_wrap() {
        assert_eq!(format_time_of_day(SECONDS_PER_DAY + 60, ClockStyle::TwentyFourHour), "00:01");
    }

    #[test]
    fn parses_with_and_without_seconds_to_the_minute() {
        let t: TimeOfDay = "08:15".parse().unwrap();
        assert_eq!(t.seconds_since_midnight(), 8 * 3600 + 15 * 60);
        let t: TimeOfDay = "08:15:30".parse().unwrap();
        assert_eq!(t.seconds_since_midnight(), 8 * 3600 + 15 * 60);
        assert_eq!(t, TimeOfDay::from_hm(8, 15).unwrap());
        assert_eq!(t.to_string(), "08:15");
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
        assert!("noon".parse::<TimeOfDay>().is_err());
        assert!(TimeOfDay::from_seconds(SECONDS_PER_DAY).is_none());
        assert!(TimeOfDay::from_hm(23, 60).is_none());
    }

    #[test]
    fn json_uses_hh_mm_string() {
        let t = TimeOfDay::from_hm(7, 5).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"07:05\"");
        let back: TimeOfDay = serde_json::from_str("\"07:05\"").unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<TimeOfDay>("\"7 o'clock\"").is_err());
    }

    #[test]
    fn stored_as_integer_seconds() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let t = TimeOfDay::from_hm(16, 45).unwrap();
        let stored: i64 = conn
            .query_row("SELECT ?1", [&t], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, 16 * 3600 + 45 * 60);

        let read: TimeOfDay = conn
            .query_row("SELECT ?1", [stored], |row| row.get(0))
            .unwrap();
        assert_eq!(read, t);

        let bad = conn.query_row("SELECT 90000", [], |row| row.get::<_, TimeOfDay>(0));
        assert!(bad.is_err());
    }
}
