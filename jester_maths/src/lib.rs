//! A crate containing the number-theoretic building blocks for share reconstruction: parsing of numerals in
//! arbitrary bases, interchangeable arithmetic domains for exact and modular arithmetic and utilities for large
//! prime moduli.

pub mod domain;
pub mod error;
pub mod prime;
pub mod radix;

pub use domain::{ArithmeticDomain, IntegerDomain, PrimeFieldDomain};
pub use error::{DomainError, NumeralError};
pub use num_bigint;
