use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use std::fmt;
use std::str::FromStr;

/// A date/time value taken from the data. Date-only input is read as
/// midnight so the time accessors always have something to report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Date(NaiveDateTime);

impl Date {
    pub fn new(value: NaiveDateTime) -> Date {
        Date(value)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// 1-based day of the year, January 1 = day 1.
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }
}

impl FromStr for Date {
    type Err = super::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
            .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_hms(0, 0, 0)))
            .map(Date)
            .map_err(From::from)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_valid_date() {
        let d = "2018-05-03".parse::<Date>();
        assert!(d.is_ok());
        assert_eq!(d.unwrap().to_string(), "2018-05-03 00:00:00");
    }

    #[test]
    fn for_valid_datetime() {
        let d: Date = "2018-05-03 07:30:05".parse().unwrap();
        assert_eq!(d.hour(), 7);
        assert_eq!(d.minute(), 30);
        assert_eq!(d.second(), 5);
    }

    #[test]
    fn day_of_year_is_one_based() {
        let d: Date = "2020-01-01".parse().unwrap();
        assert_eq!(d.day_of_year(), 1);
    }

    #[test]
    fn for_invalid_date() {
        assert!("not-a-date".parse::<Date>().is_err());
    }
}
