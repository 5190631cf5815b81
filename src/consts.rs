/// Number of digits in a full personal code
pub const CODE_LENGTH: usize = 11;

/// Number of digits covered by the control digit
pub const BODY_LENGTH: usize = CODE_LENGTH - 1;

/// Number of sequence numbers generated per date of birth (000..=999)
pub const SEQUENCE_COUNT: u16 = 1000;

/// Width of the zero-padded sequence number segment
pub const SEQUENCE_WIDTH: usize = 3;

/// Width of the `YYMMDD` date segment
pub const DATE_SEGMENT_WIDTH: usize = 6;

/// First digit that bypasses every other check
pub const WILDCARD_PREFIX: u8 = 9;

/// Lowest sex digit a generated code can start with
pub const MIN_SEX_DIGIT: u8 = 1;
/// Highest sex digit a generated code can start with
pub const MAX_SEX_DIGIT: u8 = 6;

/// Lowest accepted caller sex input
pub const MIN_SEX_INPUT: u8 = 1;
/// Highest accepted caller sex input
pub const MAX_SEX_INPUT: u8 = 6;

/// Earliest supported birth year (start of the 19th century)
pub const MIN_YEAR: u16 = 1800;
/// Latest supported birth year (end of the 21st century)
pub const MAX_YEAR: u16 = 2099;

/// Ordinal of the earliest century with a sex digit mapping; its modifier is 0
pub const BASE_CENTURY: u16 = 19;

/// Checksum modulus
pub const CHECKSUM_MODULUS: u32 = 11;
/// Remainder that forces another checksum pass
pub const CHECKSUM_RETRY: u32 = 10;
/// Weights cycle through `1..=MAX_WEIGHT`
pub const MAX_WEIGHT: u32 = 9;
/// Control digit returned when every weighting pass yields `CHECKSUM_RETRY`
pub const TERMINAL_CONTROL_DIGIT: u8 = 0;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// ISO date separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Month-first date separator (`MM/DD/YYYY`)
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// Error payload for a rejected generate request
pub const INVALID_REQUEST: &str = "Invalid request";
