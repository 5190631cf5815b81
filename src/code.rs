use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checksum::control_digit;
use crate::date::DateOfBirth;
use crate::types::{SequenceNumber, SexDigit};
use crate::{
    BODY_LENGTH, CODE_LENGTH, DATE_SEGMENT_WIDTH, MAX_SEX_DIGIT, MIN_SEX_DIGIT, WILDCARD_PREFIX,
};

/// A well-formed 11-digit personal code:
/// sex digit, `YYMMDD`, 3-digit sequence number, control digit.
///
/// Codes starting with 9 are wildcards and carry no further guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonalCode([u8; CODE_LENGTH]);

/// Reason a string was rejected as a personal code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// Anything other than ASCII decimal digits, including the empty string.
    #[error("Personal code must contain only decimal digits: {0:?}")]
    NonNumeric(String),

    /// Wrong number of significant digits. Leading zeros do not count.
    #[error("Personal code must have {expected} significant digits, found {found}")]
    InvalidLength { expected: usize, found: usize },

    /// First digit is neither a sex digit nor the wildcard prefix.
    #[error("Invalid first digit: {0} (must be {min}-{max} or {wildcard})", min = MIN_SEX_DIGIT, max = MAX_SEX_DIGIT, wildcard = WILDCARD_PREFIX)]
    InvalidSexDigit(u8),

    #[error("Control digit mismatch: expected {expected}, found {found}")]
    ControlDigitMismatch { expected: u8, found: u8 },
}

impl PersonalCode {
    /// Builds the code for a sex digit, date of birth and sequence number,
    /// appending the computed control digit.
    pub fn new(sex_digit: SexDigit, dob: &DateOfBirth, sequence: SequenceNumber) -> Self {
        let mut body = [0; BODY_LENGTH];
        body[0] = sex_digit.get();
        body[1..=DATE_SEGMENT_WIDTH].copy_from_slice(&dob.segment_digits());
        body[DATE_SEGMENT_WIDTH + 1..].copy_from_slice(&sequence.digits());

        let mut digits = [0; CODE_LENGTH];
        digits[..BODY_LENGTH].copy_from_slice(&body);
        digits[BODY_LENGTH] = control_digit(&body);
        Self(digits)
    }

    /// All digits as values `0..=9`
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// The ten digits covered by the control digit
    pub fn body(&self) -> [u8; BODY_LENGTH] {
        let mut body = [0; BODY_LENGTH];
        body.copy_from_slice(&self.0[..BODY_LENGTH]);
        body
    }

    pub const fn first_digit(&self) -> u8 {
        self.0[0]
    }

    pub const fn control_digit(&self) -> u8 {
        self.0[BODY_LENGTH]
    }

    pub const fn is_wildcard(&self) -> bool {
        self.first_digit() == WILDCARD_PREFIX
    }

    /// Sex digit, `None` for wildcard codes
    pub const fn sex_digit(&self) -> Option<SexDigit> {
        SexDigit::from_digit(self.first_digit())
    }

    /// Raw `YYMMDD` digits. Not guaranteed to be a real calendar date.
    pub fn date_segment(&self) -> String {
        self.0[1..=DATE_SEGMENT_WIDTH]
            .iter()
            .map(u8::to_string)
            .collect()
    }

    pub const fn sequence(&self) -> SequenceNumber {
        SequenceNumber::from_digits([
            self.0[DATE_SEGMENT_WIDTH + 1],
            self.0[DATE_SEGMENT_WIDTH + 2],
            self.0[DATE_SEGMENT_WIDTH + 3],
        ])
    }
}

impl FromStr for PersonalCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeError::NonNumeric(s.to_owned()));
        }

        if s.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength {
                expected: CODE_LENGTH,
                found:    s.len(),
            });
        }

        // Leading zeros vanish when the code is read as a number.
        let significant = s.trim_start_matches('0').len();
        if significant != CODE_LENGTH {
            return Err(CodeError::InvalidLength {
                expected: CODE_LENGTH,
                found:    significant,
            });
        }

        let mut digits = [0; CODE_LENGTH];
        for (slot, byte) in digits.iter_mut().zip(s.bytes()) {
            *slot = byte - b'0';
        }
        let code = Self(digits);

        if code.is_wildcard() {
            return Ok(code);
        }

        let first = code.first_digit();
        if !(MIN_SEX_DIGIT..=MAX_SEX_DIGIT).contains(&first) {
            return Err(CodeError::InvalidSexDigit(first));
        }

        // Digits 2-7 are not checked against the calendar.
        let expected = control_digit(&code.body());
        let found = code.control_digit();
        if expected != found {
            debug!(expected, found, "control digit mismatch");
            return Err(CodeError::ControlDigitMismatch { expected, found });
        }

        Ok(code)
    }
}

impl fmt::Display for PersonalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|digit| write!(f, "{digit}"))
    }
}

impl Serialize for PersonalCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PersonalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
