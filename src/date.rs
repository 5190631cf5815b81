use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::types::{Century, Day, Month, Year};
use crate::{DATE_SEPARATOR, InputError, MONTH_FIRST_SEPARATOR};

/// Length of the compact `YYYYMMDD` form
const COMPACT_LENGTH: usize = 8;

/// A calendar date of birth between 1800-01-01 and 2099-12-31 (inclusive).
///
/// Accepted textual forms:
/// - ISO `YYYY-MM-DD`
/// - compact `YYYYMMDD`
/// - month-first `MM/DD/YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOfBirth {
    year:  Year,
    month: Month,
    day:   Day,
}

impl DateOfBirth {
    /// Creates a date of birth from its numeric components.
    ///
    /// # Errors
    /// Returns an `InputError` if the year is outside the supported
    /// centuries or the month/day do not form a real calendar date.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, InputError> {
        let year_checked = Year::new(year)?;
        let month_checked = Month::new(month)?;
        let day_checked = Day::new(day, year, month)?;
        Ok(Self {
            year:  year_checked,
            month: month_checked,
            day:   day_checked,
        })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    pub const fn century(&self) -> Century {
        self.year.century()
    }

    /// The `YYMMDD` segment embedded in a personal code
    pub fn date_segment(&self) -> String {
        format!(
            "{:02}{:02}{:02}",
            self.year.two_digit(),
            self.month.get(),
            self.day.get()
        )
    }

    /// Digits of [`Self::date_segment`] as values `0..=9`
    pub(crate) const fn segment_digits(&self) -> [u8; 6] {
        let yy = self.year.two_digit();
        let mm = self.month.get();
        let dd = self.day.get();
        [yy / 10, yy % 10, mm / 10, mm % 10, dd / 10, dd % 10]
    }

    fn parse_iso(parts: &[&str]) -> Result<Self, InputError> {
        match parts {
            [year, month, day] => Self::from_parts(year, month, day),
            _ => Err(InputError::InvalidDate(parts.join("-"))),
        }
    }

    fn parse_month_first(parts: &[&str]) -> Result<Self, InputError> {
        match parts {
            [month, day, year] => Self::from_parts(year, month, day),
            _ => Err(InputError::InvalidDate(parts.join("/"))),
        }
    }

    fn parse_compact(s: &str) -> Result<Self, InputError> {
        if s.len() != COMPACT_LENGTH || !s.is_char_boundary(4) || !s.is_char_boundary(6) {
            return Err(InputError::InvalidDate(s.to_owned()));
        }
        Self::from_parts(&s[..4], &s[4..6], &s[6..])
    }

    fn from_parts(year: &str, month: &str, day: &str) -> Result<Self, InputError> {
        let year = parse_component::<u16>(year)?;
        let month = parse_component::<u8>(month)?;
        let day = parse_component::<u8>(day)?;
        Self::new(year, month, day)
    }
}

/// Parses an unsigned component made only of ASCII digits.
/// `str::parse` alone would let a leading `+` through.
fn parse_component<T: FromStr>(s: &str) -> Result<T, InputError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::InvalidDate(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| InputError::InvalidDate(s.to_owned()))
}

impl FromStr for DateOfBirth {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InputError::InvalidDate(s.to_owned()));
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(InputError::InvalidDate(trimmed.to_owned()));
        }

        if has_hyphen {
            let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
            Self::parse_iso(&parts)
        } else if has_slash {
            let parts: Vec<&str> = trimmed.split(MONTH_FIRST_SEPARATOR).collect();
            Self::parse_month_first(&parts)
        } else {
            Self::parse_compact(trimmed)
        }
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.year,
            self.month.get(),
            self.day.get()
        )
    }
}

impl Serialize for DateOfBirth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateOfBirth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
