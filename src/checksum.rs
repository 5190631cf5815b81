//! Weighted modulo-11 control digit.
//!
//! The body digits are multiplied by weights cycling through `1..=9` and
//! summed. A remainder of 10 is not a digit, so the sum is recomputed with
//! the weights rotated to start at 3; if that also lands on 10 the control
//! digit is 0.

use tracing::trace;

use crate::consts::{
    BODY_LENGTH, CHECKSUM_MODULUS, CHECKSUM_RETRY, MAX_WEIGHT, TERMINAL_CONTROL_DIGIT,
};

/// Checksum pass. Passes are tried in order until one yields a remainder other than 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pass {
    /// Weights `1 2 3 4 5 6 7 8 9 1`
    First,
    /// Weights `3 4 5 6 7 8 9 1 2 3`
    Second,
    /// No weighting; the control digit is 0
    Terminal,
}

impl Pass {
    /// Weight applied to the first body digit, `None` for the terminal pass
    pub const fn first_weight(self) -> Option<u32> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(3),
            Self::Terminal => None,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second | Self::Terminal => Self::Terminal,
        }
    }

    /// Per-digit weights for this pass
    pub fn weights(self) -> Option<[u32; BODY_LENGTH]> {
        let first = self.first_weight()?;
        let mut weights = [0; BODY_LENGTH];
        for (index, weight) in (0_u32..).zip(weights.iter_mut()) {
            *weight = (first - 1 + index) % MAX_WEIGHT + 1;
        }
        Some(weights)
    }
}

/// Control digit for a 10-digit body, starting from the first pass.
///
/// `body` holds digit values `0..=9`, not ASCII bytes.
pub fn control_digit(body: &[u8; BODY_LENGTH]) -> u8 {
    control_digit_from(body, Pass::First)
}

/// Control digit for a 10-digit body, starting from `start`.
///
/// Falls through to the following pass whenever the remainder is 10.
#[allow(clippy::cast_possible_truncation)]
pub fn control_digit_from(body: &[u8; BODY_LENGTH], start: Pass) -> u8 {
    let mut pass = start;
    loop {
        let Some(value) = remainder(body, pass) else {
            return TERMINAL_CONTROL_DIGIT;
        };
        if value != CHECKSUM_RETRY {
            // value < 10 here
            return value as u8;
        }
        trace!(?pass, "checksum remainder is {CHECKSUM_RETRY}, moving to next pass");
        pass = pass.next();
    }
}

/// Weighted sum of `body` modulo 11 for a single pass
pub fn remainder(body: &[u8; BODY_LENGTH], pass: Pass) -> Option<u32> {
    let weights = pass.weights()?;
    let sum: u32 = body
        .iter()
        .zip(weights)
        .map(|(&digit, weight)| u32::from(digit) * weight)
        .sum();
    Some(sum % CHECKSUM_MODULUS)
}
