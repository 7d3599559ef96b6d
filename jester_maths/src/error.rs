//! Error types of numeral parsing and domain arithmetic.

use num_bigint::{BigInt, BigUint};

/// Errors that can occur while parsing a numeral in a given base.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumeralError {
    /// The base lies outside of the supported range `2..=62`.
    #[error("unsupported base {base}, expected a base between 2 and 62")]
    UnsupportedBase { base: u32 },

    /// A character is either no digit symbol at all or its value is not below the base.
    #[error("invalid digit '{character}' at position {position} for base {base}")]
    InvalidDigit {
        character: char,
        position: usize,
        base: u32,
    },
}

/// Errors of arithmetic domain operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// An exact integer division left a remainder.
    #[error("inexact division: {dividend} is not divisible by {divisor}")]
    InexactDivision { dividend: BigInt, divisor: BigInt },

    /// The divisor is zero (modulo the field prime, if any).
    #[error("division by zero")]
    DivisionByZero,

    /// The modulus cannot be used for a prime field.
    #[error("modulus {modulus} is not a prime greater than one")]
    InvalidModulus { modulus: BigUint },
}
