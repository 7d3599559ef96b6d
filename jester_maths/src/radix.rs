//! Parsing of numerals written in bases between 2 and 62.
//!
//! Digits are `0-9`, followed by `A-Z` for the values 10 to 35. Lowercase letters are folded onto the uppercase
//! letters as long as the base does not exceed 36. For larger bases the lowercase letters carry the values 36 to 61
//! instead, so the numeral becomes case-sensitive.

use num::{BigUint, Zero};

use crate::error::NumeralError;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base: ten decimal digits and two alphabets.
pub const MAX_BASE: u32 = 62;

/// Map a single character onto its digit value in the given base. Returns `None` if the character is not
/// alphanumeric. The returned value is not checked against `base`.
pub fn digit_value(character: char, base: u32) -> Option<u32> {
    match character {
        '0'..='9' => Some(character as u32 - '0' as u32),
        'A'..='Z' => Some(10 + character as u32 - 'A' as u32),
        'a'..='z' if base <= 36 => Some(10 + character as u32 - 'a' as u32),
        'a'..='z' => Some(36 + character as u32 - 'a' as u32),
        _ => None,
    }
}

/// Parse `digits` as a non-negative numeral in `base`. The digits are accumulated left to right as
/// `result = result * base + digit` without any width limit. An empty string parses to zero.
pub fn parse_numeral(base: u32, digits: &str) -> Result<BigUint, NumeralError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(NumeralError::UnsupportedBase { base });
    }

    digits
        .chars()
        .enumerate()
        .try_fold(BigUint::zero(), |akk, (position, character)| {
            match digit_value(character, base) {
                Some(digit) if digit < base => Ok(akk * base + digit),
                _ => Err(NumeralError::InvalidDigit {
                    character,
                    position,
                    base,
                }),
            }
        })
}
