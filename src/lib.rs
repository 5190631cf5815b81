//! Generation and validation of 11-digit personal identification codes.
//!
//! A code is laid out as `S YYMMDD NNN C`:
//! - `S`: sex digit, odd for male and even for female, shifted by 2 per
//!   century after the 19th (1-2: 1800s, 3-4: 1900s, 5-6: 2000s)
//! - `YYMMDD`: date of birth
//! - `NNN`: sequence number
//! - `C`: weighted modulo-11 control digit
//!
//! ```
//! let codes = personal_code::generate("1950-01-01", "1");
//! assert_eq!(codes.len(), 1000);
//! assert_eq!(codes[0].to_string(), "35001010003");
//! assert!(personal_code::validate("35001010003"));
//! ```

pub mod checksum;
mod code;
mod consts;
mod date;
mod prelude;
pub mod response;
mod types;

pub use code::{CodeError, PersonalCode};
pub use consts::*;
pub use date::DateOfBirth;
pub use types::{Century, Day, Month, SequenceNumber, Sex, SexDigit, SexInput, Year};

use crate::prelude::*;
use tracing::debug;

/// Reasons generation input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    #[display(fmt = "Negative date of birth: {_0}")]
    NegativeDate(String),
    #[display(fmt = "Invalid date of birth: {_0}")]
    InvalidDate(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Year {} is before {}", "_0", MIN_YEAR)]
    BeforeEarliestDate(u16),
    #[display(fmt = "Unsupported century: {_0}")]
    UnsupportedCentury(u16),
    #[display(fmt = "Sex input must be a single digit: {_0:?}")]
    InvalidSexInput(String),
    #[display(fmt = "Sex input out of range: {} (must be {}-{})", "_0", MIN_SEX_INPUT, MAX_SEX_INPUT)]
    SexInputOutOfRange(u8),
    #[display(fmt = "Sequence number out of range: {} (must be below {})", "_0", SEQUENCE_COUNT)]
    SequenceOutOfRange(u16),
}

impl std::error::Error for InputError {}

/// Checks raw generation input and converts it to typed values.
///
/// # Errors
/// Returns the first rule the input breaks:
/// - a date token that reads as a negative number
/// - a date that does not parse, or lies outside 1800-01-01..=2099-12-31
/// - a sex input that is not one digit in `1..=6`
pub fn validate_input(dob: &str, sex: &str) -> Result<(DateOfBirth, SexInput), InputError> {
    if is_negative_number(dob) {
        return Err(InputError::NegativeDate(dob.to_owned()));
    }
    let date = dob.parse::<DateOfBirth>()?;
    let input = sex.parse::<SexInput>()?;
    Ok((date, input))
}

/// `-` followed by a digit, after leading whitespace
fn is_negative_number(token: &str) -> bool {
    let mut chars = token.trim_start().chars();
    chars.next() == Some('-') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// All 1000 candidate codes for a date of birth and sex input, by ascending
/// sequence number.
pub fn generate_for(dob: DateOfBirth, sex: SexInput) -> Vec<PersonalCode> {
    let sex_digit = SexDigit::new(sex.sex(), dob.century());
    SequenceNumber::all()
        .map(|sequence| PersonalCode::new(sex_digit, &dob, sequence))
        .collect()
}

/// Like [`generate`], but reports why the input was rejected.
///
/// # Errors
/// See [`validate_input`].
pub fn try_generate(dob: &str, sex: &str) -> Result<Vec<PersonalCode>, InputError> {
    let (date, input) = validate_input(dob, sex)?;
    Ok(generate_for(date, input))
}

/// All 1000 candidate codes for the raw date of birth and sex input, or
/// none if the input is rejected.
pub fn generate(dob: &str, sex: &str) -> Vec<PersonalCode> {
    try_generate(dob, sex).unwrap_or_else(|error| {
        debug!(dob, sex, %error, "rejected generate input");
        Vec::new()
    })
}

/// Whether `code` is a well-formed personal code with a correct control digit.
pub fn validate(code: &str) -> bool {
    match code.parse::<PersonalCode>() {
        Ok(_) => true,
        Err(error) => {
            debug!(code, %error, "rejected personal code");
            false
        }
    }
}
