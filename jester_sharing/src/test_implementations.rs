//! This module defines polynomial fixtures common to multiple tests, saving each test from redefining them.

#![cfg(test)]

use num::Integer;
use num_bigint::{BigInt, BigUint, RandBigInt};
use jester_maths::{ArithmeticDomain, PrimeFieldDomain};
use rand::Rng;

use crate::share::Share;

/// A polynomial given by its coefficients, constant term first. Tests evaluate it to obtain consistent shares with a
/// known secret.
#[derive(Clone, Debug)]
pub(crate) struct TestPolynomial<E> {
    coefficients: Vec<E>,
}

impl<E> TestPolynomial<E>
where
    E: Clone,
{
    pub(crate) fn new(coefficients: Vec<E>) -> Self {
        assert!(!coefficients.is_empty());
        TestPolynomial { coefficients }
    }

    /// The constant term.
    pub(crate) fn secret(&self) -> &E {
        &self.coefficients[0]
    }

    /// Evaluate the polynomial at `x` using Horner's method.
    pub(crate) fn evaluate<D>(&self, domain: &D, x: u64) -> E
    where
        D: ArithmeticDomain<Element = E>,
    {
        let x = domain.from_index(x);
        self.coefficients
            .iter()
            .rev()
            .fold(domain.zero(), |akk, coefficient| {
                domain.add(&domain.mul(&akk, &x), coefficient)
            })
    }

    /// Evaluate the polynomial at every given index, in order.
    pub(crate) fn shares<D, I>(&self, domain: &D, indices: I) -> Vec<Share<E>>
    where
        D: ArithmeticDomain<Element = E>,
        I: IntoIterator<Item = u64>,
    {
        indices
            .into_iter()
            .map(|x| Share::new(x, self.evaluate(domain, x)))
            .collect()
    }
}

impl TestPolynomial<BigUint> {
    /// A polynomial of degree `threshold - 1` with uniformly random coefficients from the field.
    pub(crate) fn random<R>(domain: &PrimeFieldDomain, rng: &mut R, threshold: usize) -> Self
    where
        R: Rng,
    {
        TestPolynomial::new(
            (0..threshold)
                .map(|_| rng.gen_biguint_below(domain.modulus()))
                .collect(),
        )
    }
}

impl TestPolynomial<BigInt> {
    /// A polynomial of degree `threshold - 1` with random signed 64 bit coefficients.
    pub(crate) fn random_integral<R>(rng: &mut R, threshold: usize) -> Self
    where
        R: Rng,
    {
        TestPolynomial::new((0..threshold).map(|_| rng.gen_bigint(64)).collect())
    }
}

/// Reduce a signed integer into the field over `modulus`, mapping negative values onto their additive inverse.
pub(crate) fn reduce_signed(value: &BigInt, modulus: &BigUint) -> BigUint {
    let modulus = BigInt::from(modulus.clone());
    value.mod_floor(&modulus).magnitude().clone()
}

#[test]
fn test_reduce_signed() {
    let modulus = BigUint::from(7919u32);
    assert_eq!(reduce_signed(&BigInt::from(-1), &modulus), BigUint::from(7918u32));
    assert_eq!(reduce_signed(&BigInt::from(8000), &modulus), BigUint::from(81u32));
}
