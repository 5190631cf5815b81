use crate::consts::{
    BASE_CENTURY, CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_SEX_DIGIT, MAX_SEX_INPUT, MAX_YEAR, MIN_SEX_DIGIT,
    MIN_SEX_INPUT, MIN_YEAR, SEQUENCE_COUNT, SEQUENCE_WIDTH,
};
use crate::{InputError, prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A birth year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1800..=2099),
/// i.e. inside one of the three centuries that have a sex digit mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
    /// Creates a new Year, rejecting years outside the supported centuries
    ///
    /// # Errors
    /// Returns `InputError::BeforeEarliestDate` below `MIN_YEAR` and
    /// `InputError::UnsupportedCentury` above `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, InputError> {
        if value < MIN_YEAR {
            return Err(InputError::BeforeEarliestDate(value));
        }
        if value > MAX_YEAR {
            return Err(InputError::UnsupportedCentury(Century::ordinal_of(value)));
        }
        Ok(Self(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Last two digits of the year, as embedded in a personal code
    #[inline]
    pub const fn two_digit(self) -> u8 {
        (self.0 % CENTURY_CYCLE) as u8
    }

    pub const fn century(self) -> Century {
        // Range checked in `Year::new`.
        match self.0 / CENTURY_CYCLE {
            18 => Century::Nineteenth,
            19 => Century::Twentieth,
            _ => Century::TwentyFirst,
        }
    }
}

impl TryFrom<u16> for Year {
    type Error = InputError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// # Errors
    /// Returns `InputError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, InputError> {
        let non_zero = NonZeroU8::new(value).ok_or(InputError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(InputError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// A day of month, validated against its year and month on construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `InputError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, InputError> {
        let invalid = InputError::InvalidDay {
            year,
            month,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

/// The three centuries a sex digit can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Century {
    #[display(fmt = "19th century")]
    Nineteenth,
    #[display(fmt = "20th century")]
    Twentieth,
    #[display(fmt = "21st century")]
    TwentyFirst,
}

impl Century {
    /// Ordinal century of a year (`floor(year / 100) + 1`), e.g. 1950 -> 20
    pub const fn ordinal_of(year: u16) -> u16 {
        year / CENTURY_CYCLE + 1
    }

    pub const fn ordinal(self) -> u16 {
        match self {
            Self::Nineteenth => 19,
            Self::Twentieth => 20,
            Self::TwentyFirst => 21,
        }
    }

    /// Amount added to the sex parity: 0, 2 or 4, counted from `BASE_CENTURY`
    pub const fn modifier(self) -> u8 {
        ((self.ordinal() - BASE_CENTURY) * 2) as u8
    }
}

/// Biological sex as implied by the parity of a sex input or sex digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Sex {
    #[display(fmt = "male")]
    Male,
    #[display(fmt = "female")]
    Female,
}

impl Sex {
    /// Odd values are male, even values female
    pub const fn from_parity(value: u8) -> Self {
        if value % 2 == 1 { Self::Male } else { Self::Female }
    }

    /// 1 for male, 2 for female
    pub const fn parity(self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
        }
    }
}

/// The gender value a caller passes to generation, in `1..=6`.
///
/// Only its parity reaches the code; the century comes from the date of
/// birth. Not to be confused with [`SexDigit`], the first digit of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "u8", into = "u8")]
#[display(fmt = "{}", "_0.get()")]
pub struct SexInput(NonZeroU8);

impl SexInput {
    /// # Errors
    /// Returns `InputError::SexInputOutOfRange` outside `MIN_SEX_INPUT..=MAX_SEX_INPUT`.
    pub fn new(value: u8) -> Result<Self, InputError> {
        let non_zero = NonZeroU8::new(value).ok_or(InputError::SexInputOutOfRange(value))?;
        if !(MIN_SEX_INPUT..=MAX_SEX_INPUT).contains(&value) {
            return Err(InputError::SexInputOutOfRange(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    pub const fn sex(self) -> Sex {
        Sex::from_parity(self.0.get())
    }
}

impl FromStr for SexInput {
    type Err = InputError;

    /// Accepts exactly one ASCII digit; signs, decimals and padding are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [digit] if digit.is_ascii_digit() => Self::new(digit - b'0'),
            _ => Err(InputError::InvalidSexInput(s.to_owned())),
        }
    }
}

impl TryFrom<u8> for SexInput {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SexInput> for u8 {
    fn from(input: SexInput) -> Self {
        input.0.get()
    }
}

/// First digit of a generated personal code: sex parity plus century modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
pub struct SexDigit(u8);

impl SexDigit {
    /// Parity (1 or 2) plus modifier (0, 2 or 4), always `1..=6`
    pub const fn new(sex: Sex, century: Century) -> Self {
        let value = sex.parity() + century.modifier();
        debug_assert!(matches!(value, MIN_SEX_DIGIT..=MAX_SEX_DIGIT));
        Self(value)
    }

    /// Reads a sex digit back from the first digit of a code
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            MIN_SEX_DIGIT..=MAX_SEX_DIGIT => Some(Self(digit)),
            _ => None,
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn sex(self) -> Sex {
        Sex::from_parity(self.0)
    }

    pub const fn century(self) -> Century {
        match (self.0 - 1) / 2 {
            0 => Century::Nineteenth,
            1 => Century::Twentieth,
            _ => Century::TwentyFirst,
        }
    }
}

/// Per-date sequence number, `0..SEQUENCE_COUNT`, printed zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct SequenceNumber(u16);

impl SequenceNumber {
    /// # Errors
    /// Returns `InputError::SequenceOutOfRange` for values >= `SEQUENCE_COUNT`.
    pub const fn new(value: u16) -> Result<Self, InputError> {
        if value >= SEQUENCE_COUNT {
            return Err(InputError::SequenceOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Every sequence number in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SEQUENCE_COUNT).map(Self)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Hundreds, tens and ones digits
    #[allow(clippy::cast_possible_truncation)]
    pub const fn digits(self) -> [u8; SEQUENCE_WIDTH] {
        [
            (self.0 / 100) as u8,
            (self.0 / 10 % 10) as u8,
            (self.0 % 10) as u8,
        ]
    }

    /// Inverse of [`Self::digits`]; each digit must be `0..=9`
    pub(crate) const fn from_digits(digits: [u8; SEQUENCE_WIDTH]) -> Self {
        let [hundreds, tens, ones] = digits;
        Self(hundreds as u16 * 100 + tens as u16 * 10 + ones as u16)
    }
}

impl TryFrom<u16> for SequenceNumber {
    type Error = InputError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SequenceNumber> for u16 {
    fn from(sequence: SequenceNumber) -> Self {
        sequence.0
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = SEQUENCE_WIDTH)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_bounds() {
        assert!(Year::new(1800).is_ok());
        assert!(Year::new(2099).is_ok());
        assert_eq!(Year::new(1799), Err(InputError::BeforeEarliestDate(1799)));
        assert_eq!(Year::new(2100), Err(InputError::UnsupportedCentury(22)));
        assert_eq!(Year::new(0), Err(InputError::BeforeEarliestDate(0)));
    }

    #[test]
    fn test_year_two_digit() {
        assert_eq!(Year::new(1950).unwrap().two_digit(), 50);
        assert_eq!(Year::new(2005).unwrap().two_digit(), 5);
        assert_eq!(Year::new(1800).unwrap().two_digit(), 0);
    }

    #[test]
    fn test_year_century() {
        let cases = [
            (1800, Century::Nineteenth),
            (1899, Century::Nineteenth),
            (1900, Century::Twentieth),
            (1999, Century::Twentieth),
            (2000, Century::TwentyFirst),
            (2099, Century::TwentyFirst),
        ];
        for (year, century) in cases {
            assert_eq!(Year::new(year).unwrap().century(), century, "year {year}");
            assert_eq!(Century::ordinal_of(year), century.ordinal(), "year {year}");
        }
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1991).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1991");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        assert!(serde_json::from_str::<Year>("1700").is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert_eq!(Month::new(0), Err(InputError::InvalidMonth(0)));
        assert_eq!(Month::new(13), Err(InputError::InvalidMonth(13)));
    }

    #[test]
    fn test_day_new() {
        assert!(Day::new(31, 2024, 1).is_ok());
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());
        assert!(Day::new(29, 1900, 2).is_err());
        assert!(Day::new(29, 2000, 2).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
        assert!(matches!(
            Day::new(0, 2024, 1),
            Err(InputError::InvalidDay { day: 0, .. })
        ));
    }

    #[test]
    fn test_century_modifier_table() {
        assert_eq!(Century::Nineteenth.modifier(), 0);
        assert_eq!(Century::Twentieth.modifier(), 2);
        assert_eq!(Century::TwentyFirst.modifier(), 4);
    }

    #[test]
    fn test_sex_digit_new_stays_in_range() {
        let centuries = [Century::Nineteenth, Century::Twentieth, Century::TwentyFirst];
        let mut seen = Vec::new();
        for sex in [Sex::Male, Sex::Female] {
            for century in centuries {
                let digit = SexDigit::new(sex, century);
                assert!(
                    (MIN_SEX_DIGIT..=MAX_SEX_DIGIT).contains(&digit.get()),
                    "{sex} born in the {century} gave sex digit {digit}"
                );
                assert_eq!(digit.sex(), sex);
                assert_eq!(digit.century(), century);
                seen.push(digit.get());
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_sex_digit_mapping() {
        // (sex input, year, expected sex digit)
        let cases = [
            (1, 1890, 1),
            (2, 1890, 2),
            (1, 1950, 3),
            (4, 1950, 4),
            (3, 1950, 3),
            (5, 2005, 5),
            (2, 2005, 6),
            (6, 2005, 6),
        ];
        for (input, year, expected) in cases {
            let input = SexInput::new(input).unwrap();
            let century = Year::new(year).unwrap().century();
            let digit = SexDigit::new(input.sex(), century);
            assert_eq!(
                digit.get(),
                expected,
                "sex input {input} born {year} should map to {expected}"
            );
        }
    }

    #[test]
    fn test_sex_input_is_not_sex_digit() {
        // Input 5 (a "21st century" band value) born in 1950 still encodes as 20th century.
        let input = SexInput::new(5).unwrap();
        let digit = SexDigit::new(input.sex(), Century::Twentieth);
        assert_eq!(digit.get(), 3);
        assert_ne!(digit.get(), input.get());
    }

    #[test]
    fn test_sex_digit_decodes() {
        for value in MIN_SEX_DIGIT..=MAX_SEX_DIGIT {
            let digit = SexDigit::from_digit(value).unwrap();
            assert_eq!(SexDigit::new(digit.sex(), digit.century()), digit);
        }
        assert_eq!(SexDigit::from_digit(0), None);
        assert_eq!(SexDigit::from_digit(7), None);
        assert_eq!(SexDigit::from_digit(9), None);
    }

    #[test]
    fn test_sex_input_from_str() {
        for s in ["1", "2", "3", "4", "5", "6"] {
            assert!(s.parse::<SexInput>().is_ok(), "{s} should parse");
        }
        assert_eq!("0".parse::<SexInput>(), Err(InputError::SexInputOutOfRange(0)));
        assert_eq!("7".parse::<SexInput>(), Err(InputError::SexInputOutOfRange(7)));
        for s in ["", "12", "+1", "-1", "1.0", " 1", "a", "１"] {
            assert_eq!(
                s.parse::<SexInput>(),
                Err(InputError::InvalidSexInput(s.to_owned())),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_sex_input_serde() {
        let input: SexInput = serde_json::from_str("4").unwrap();
        assert_eq!(input.get(), 4);
        assert_eq!(input.sex(), Sex::Female);
        assert!(serde_json::from_str::<SexInput>("7").is_err());
    }

    #[test]
    fn test_sequence_number() {
        assert_eq!(SequenceNumber::new(0).unwrap().to_string(), "000");
        assert_eq!(SequenceNumber::new(42).unwrap().to_string(), "042");
        assert_eq!(SequenceNumber::new(407).unwrap().digits(), [4, 0, 7]);
        assert_eq!(SequenceNumber::from_digits([0, 1, 9]).get(), 19);
        assert_eq!(SequenceNumber::new(999).unwrap().to_string(), "999");
        assert_eq!(
            SequenceNumber::new(1000),
            Err(InputError::SequenceOutOfRange(1000))
        );

        let all: Vec<_> = SequenceNumber::all().collect();
        assert_eq!(all.len(), 1000);
        assert_eq!(all.first().map(|s| s.get()), Some(0));
        assert_eq!(all.last().map(|s| s.get()), Some(999));
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }
}
