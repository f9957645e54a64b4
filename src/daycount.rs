//! Day-count conventions.
//!
//! The "basic" conventions count actual calendar days and divide by a fixed
//! year length. No end-of-month or business-day adjustment is applied.
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Error;

pub trait DayCountConvention {
    const NAME: &'static str;
    const DAYS_PER_YEAR: f64;

    /// Signed number of days from `begin` to `end`.
    fn days_diff(begin: NaiveDate, end: NaiveDate) -> i64 {
        end.signed_duration_since(begin).num_days()
    }

    /// `days_diff / DAYS_PER_YEAR`.
    fn years_diff(begin: NaiveDate, end: NaiveDate) -> f64 {
        Self::days_diff(begin, end) as f64 / Self::DAYS_PER_YEAR
    }
}

/// Actual days over 365.25.
pub struct BasicActual36525;

impl DayCountConvention for BasicActual36525 {
    const NAME: &'static str = "actual/365.25";
    const DAYS_PER_YEAR: f64 = 365.25;
}

/// Actual days over 360.
pub struct BasicActual360;

impl DayCountConvention for BasicActual360 {
    const NAME: &'static str = "actual/360";
    const DAYS_PER_YEAR: f64 = 360.0;
}

/// Actual days over 365.
pub struct BasicActual365Fixed;

impl DayCountConvention for BasicActual365Fixed {
    const NAME: &'static str = "actual/365-fixed";
    const DAYS_PER_YEAR: f64 = 365.0;
}

/// Runtime selection of a convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Convention {
    #[default]
    Actual36525,
    Actual360,
    Actual365Fixed,
}

impl Convention {
    pub const ALL: [Self; 3] = [Self::Actual36525, Self::Actual360, Self::Actual365Fixed];

    pub fn name(self) -> &'static str {
        match self {
            Self::Actual36525 => BasicActual36525::NAME,
            Self::Actual360 => BasicActual360::NAME,
            Self::Actual365Fixed => BasicActual365Fixed::NAME,
        }
    }

    pub fn days_diff(self, begin: NaiveDate, end: NaiveDate) -> i64 {
        match self {
            Self::Actual36525 => BasicActual36525::days_diff(begin, end),
            Self::Actual360 => BasicActual360::days_diff(begin, end),
            Self::Actual365Fixed => BasicActual365Fixed::days_diff(begin, end),
        }
    }

    pub fn years_diff(self, begin: NaiveDate, end: NaiveDate) -> f64 {
        match self {
            Self::Actual36525 => BasicActual36525::years_diff(begin, end),
            Self::Actual360 => BasicActual360::years_diff(begin, end),
            Self::Actual365Fixed => BasicActual365Fixed::years_diff(begin, end),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Convention {
    type Err = Error;

    /// Accepts the convention name case-insensitively, with or without the `/`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '/' | '-' | '.' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "actual36525" | "act36525" => Ok(Self::Actual36525),
            "actual360" | "act360" => Ok(Self::Actual360),
            "actual365fixed" | "act365fixed" | "actual365" => Ok(Self::Actual365Fixed),
            _ => Err(Error::UnknownConvention(s.to_string())),
        }
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_across_leap_february() {
        assert_eq!(BasicActual36525::days_diff(date(2004, 2, 1), date(2004, 3, 1)), 29);
        assert_eq!(BasicActual36525::days_diff(date(2004, 2, 1), date(2005, 2, 1)), 366);
        assert_eq!(BasicActual36525::days_diff(date(2005, 2, 1), date(2004, 2, 1)), -366);
        assert_eq!(BasicActual36525::days_diff(date(2004, 2, 1), date(2004, 2, 1)), 0);
    }

    #[test]
    fn years_divide_by_fixed_length() {
        let years = BasicActual36525::years_diff(date(2004, 2, 1), date(2005, 2, 1));
        assert!(years > 1.0020 && years < 1.0021, "{years}");
        let back = BasicActual36525::years_diff(date(2005, 2, 1), date(2004, 2, 1));
        assert!((years + back).abs() <= 1.0e-15);

        assert_eq!(BasicActual360::years_diff(date(2001, 1, 1), date(2001, 12, 27)), 1.0);
        assert_eq!(BasicActual365Fixed::years_diff(date(2001, 1, 1), date(2002, 1, 1)), 1.0);
    }

    #[test]
    fn convention_names_parse() {
        assert_eq!("actual/365.25".parse::<Convention>().unwrap(), Convention::Actual36525);
        assert_eq!("ACT/360".parse::<Convention>().unwrap(), Convention::Actual360);
        assert_eq!("actual/365-fixed".parse::<Convention>().unwrap(), Convention::Actual365Fixed);
        assert!("30/360".parse::<Convention>().is_err());
        for convention in Convention::ALL {
            assert_eq!(convention.name().parse::<Convention>().unwrap(), convention);
        }
    }
}
