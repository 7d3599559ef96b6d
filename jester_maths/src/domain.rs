//! This module defines the trait `ArithmeticDomain`, an algebraic interface over the ring or field that share values
//! live in. Algorithms written against it (like Lagrange interpolation) work unchanged in both provided domains:
//! - `IntegerDomain`: unbounded signed integers where a division must not leave a remainder
//! - `PrimeFieldDomain`: residues modulo an explicitly given prime, where division multiplies by the inverse

use std::fmt::{Debug, Display};

use num::{BigInt, BigUint, Integer, One, Zero};

use crate::error::DomainError;
use crate::prime::{mod_inverse, MERSENNE_127};
use crate::prime_test::{MillerRabin, PrimeTest};

/// The operations a domain offers for its elements. Elements are immutable values; every operation produces a fresh
/// element. Implementations are stateless apart from their parameters, so a domain can be shared between threads.
pub trait ArithmeticDomain {
    /// The type of the domain's elements. Its `Display` implementation must produce the canonical decimal string.
    type Element: Clone + PartialEq + Debug + Display;

    /// The additive identity.
    fn zero(&self) -> Self::Element;

    /// The multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Embed a non-negative integer into the domain, reducing it if the domain requires that.
    fn from_uint(&self, value: &BigUint) -> Self::Element;

    /// Embed a share index into the domain.
    fn from_index(&self, index: u64) -> Self::Element {
        self.from_uint(&BigUint::from(index))
    }

    fn add(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element;

    fn sub(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element;

    fn mul(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element;

    fn neg(&self, value: &Self::Element) -> Self::Element;

    /// Divide `lhs` by `rhs`. What counts as a valid division is up to the domain, but a zero divisor is always an
    /// error.
    fn div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Result<Self::Element, DomainError>;
}

/// Exact arithmetic over the unbounded signed integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegerDomain;

impl ArithmeticDomain for IntegerDomain {
    type Element = BigInt;

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn from_uint(&self, value: &BigUint) -> BigInt {
        BigInt::from(value.clone())
    }

    fn add(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        lhs + rhs
    }

    fn sub(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        lhs - rhs
    }

    fn mul(&self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
        lhs * rhs
    }

    fn neg(&self, value: &BigInt) -> BigInt {
        -value
    }

    /// Integer division that refuses to truncate: a remainder yields `DomainError::InexactDivision`.
    fn div(&self, lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, DomainError> {
        if rhs.is_zero() {
            return Err(DomainError::DivisionByZero);
        }

        let (quotient, remainder) = lhs.div_rem(rhs);
        if remainder.is_zero() {
            Ok(quotient)
        } else {
            Err(DomainError::InexactDivision {
                dividend: lhs.clone(),
                divisor: rhs.clone(),
            })
        }
    }
}

/// Arithmetic modulo a prime. All results are reduced into `[0, modulus)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeFieldDomain {
    modulus: BigUint,
}

impl PrimeFieldDomain {
    /// Create a field over the given modulus. The modulus is rejected unless it passes the Miller-Rabin test.
    pub fn new(modulus: BigUint) -> Result<Self, DomainError> {
        if MillerRabin::is_prime(&modulus) {
            Ok(PrimeFieldDomain { modulus })
        } else {
            Err(DomainError::InvalidModulus { modulus })
        }
    }

    /// The field over the Mersenne prime `2^127 - 1`.
    pub fn mersenne_127() -> Self {
        PrimeFieldDomain {
            modulus: MERSENNE_127.clone(),
        }
    }

    /// Returns the prime that is base to this field's operations.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }
}

impl Default for PrimeFieldDomain {
    fn default() -> Self {
        PrimeFieldDomain::mersenne_127()
    }
}

impl ArithmeticDomain for PrimeFieldDomain {
    type Element = BigUint;

    fn zero(&self) -> BigUint {
        BigUint::zero()
    }

    fn one(&self) -> BigUint {
        BigUint::one()
    }

    fn from_uint(&self, value: &BigUint) -> BigUint {
        self.reduce(value)
    }

    fn add(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        self.reduce(&(lhs + rhs))
    }

    fn sub(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        // add the additive inverse to stay within the unsigned integers
        self.reduce(&(self.reduce(lhs) + self.neg(rhs)))
    }

    fn mul(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        self.reduce(&(lhs * rhs))
    }

    fn neg(&self, value: &BigUint) -> BigUint {
        self.reduce(&(&self.modulus - self.reduce(value)))
    }

    /// Multiply `lhs` with the inverse of `rhs`. Fails with `DomainError::DivisionByZero` if `rhs` is a multiple of
    /// the modulus.
    fn div(&self, lhs: &BigUint, rhs: &BigUint) -> Result<BigUint, DomainError> {
        let inverse = mod_inverse(rhs, &self.modulus)?;
        Ok(self.mul(lhs, &inverse))
    }
}
