use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use time::{Date, Month};

use super::error::InvalidDate;

/// A calendar date written as `YYYY-MM-DD`.
///
/// Parsing is strict: exactly four digits, dash, two digits, dash, two digits, and the
/// result must exist in the calendar (`2024-02-30` is rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskDate(Date);

impl TaskDate {
    /// Build from calendar components.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, InvalidDate> {
        let invalid = || InvalidDate(format!("{year:04}-{month:02}-{day:02}"));
        let month = Month::try_from(month).map_err(|_| invalid())?;
        Date::from_calendar_date(year, month, day)
            .map(TaskDate)
            .map_err(|_| invalid())
    }

    /// Strict `YYYY-MM-DD` parser used for form input.
    pub fn parse(s: &str) -> Result<Self, InvalidDate> {
        if !has_date_shape(s) {
            return Err(InvalidDate(s.to_string()));
        }
        let field = |range: std::ops::Range<usize>| s[range].parse::<u16>().ok();
        match (field(0..4), field(5..7), field(8..10)) {
            (Some(y), Some(m), Some(d)) => {
                let (Ok(m), Ok(d)) = (u8::try_from(m), u8::try_from(d)) else {
                    return Err(InvalidDate(s.to_string()));
                };
                Self::from_ymd(i32::from(y), m, d).map_err(|_| InvalidDate(s.to_string()))
            }
            _ => Err(InvalidDate(s.to_string())),
        }
    }

    /// Lenient parser for dates coming back from the API, which may carry a time part
    /// (`2024-01-10T00:00:00.000Z`). Only the part before `T` is kept.
    pub fn parse_wire(s: &str) -> Result<Self, InvalidDate> {
        let date = s.split_once('T').map_or(s, |(date, _)| date);
        Self::parse(date)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }

    pub fn as_date(&self) -> Date {
        self.0
    }
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl From<Date> for TaskDate {
    fn from(date: Date) -> Self {
        TaskDate(date)
    }
}

impl FromStr for TaskDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl Serialize for TaskDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaskDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        TaskDate::parse_wire(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_real_dates() {
        let d = TaskDate::parse("2024-02-29").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));
        assert_eq!(d.to_string(), "2024-02-29");
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        for bad in ["", "2024-1-05", "24-01-05", "2024/01/05", "2024-01-05 ", "+024-01-05", "２０２４-01-05"] {
            assert!(TaskDate::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        for bad in ["2023-02-29", "2024-13-01", "2024-00-10", "2024-04-31", "2024-01-00"] {
            assert!(TaskDate::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn wire_parse_drops_time_part() {
        let d = TaskDate::parse_wire("2024-01-10T00:00:00.000Z").unwrap();
        assert_eq!(d, TaskDate::from_ymd(2024, 1, 10).unwrap());
        assert!(TaskDate::parse("2024-01-10T00:00:00.000Z").is_err());
    }

    #[test]
    fn dates_order_chronologically() {
        let a = TaskDate::parse("2024-01-05").unwrap();
        let b = TaskDate::parse("2024-01-10").unwrap();
        assert!(a < b);
    }

    #[test]
    fn serde_as_plain_string() {
        let d = TaskDate::from_ymd(2025, 7, 1).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""2025-07-01""#);
        let back: TaskDate = serde_json::from_str(r#""2025-07-01T12:30:00Z""#).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<TaskDate>(r#""soon""#).is_err());
    }
}
