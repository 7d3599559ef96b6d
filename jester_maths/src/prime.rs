//! Utilities for arithmetic modulo large primes. The default modulus of this crate is the Mersenne prime
//! `2^127 - 1`, which is large enough to embed 126-bit secrets.

use num::{BigUint, Integer, One, Zero};
use once_cell::sync::Lazy;

use crate::error::DomainError;

/// The exponent of the default Mersenne prime.
pub const MERSENNE_127_EXPONENT: usize = 127;

/// The Mersenne prime `2^127 - 1`.
pub static MERSENNE_127: Lazy<BigUint> = Lazy::new(|| mersenne_number(MERSENNE_127_EXPONENT));

/// Calculate the Mersenne number `2^exponent - 1`. The result is only prime for some prime exponents.
pub fn mersenne_number(exponent: usize) -> BigUint {
    (BigUint::one() << exponent) - BigUint::one()
}

/// Calculate `base^exponent mod modulus` by square-and-multiply. The exponent bits are consumed from the least
/// significant bit upwards: the base is squared in every step and multiplied into the accumulator whenever the
/// current bit is set.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = (result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exponent >>= 1;
    }

    result
}

/// Calculate the multiplicative inverse of `value` modulo the prime `modulus` using Fermat's little theorem, i.e. as
/// `value^(modulus - 2)`. The result is meaningless if `modulus` is not prime.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint, DomainError> {
    if (value % modulus).is_zero() {
        return Err(DomainError::DivisionByZero);
    }

    let exponent = modulus - BigUint::from(2u32);
    Ok(mod_pow(value, &exponent, modulus))
}

#[cfg(test)]
mod tests {
    use num::Num;
    use num_bigint::RandBigInt;
    use rand::thread_rng;

    use super::*;

    #[test]
    fn test_mersenne_127() {
        assert_eq!(
            *MERSENNE_127,
            BigUint::from_str_radix("170141183460469231731687303715884105727", 10).unwrap()
        );
        assert_eq!(mersenne_number(5), BigUint::from(31u32));
    }

    #[test]
    fn test_mod_pow_small() {
        let modulus = BigUint::from(13u32);
        assert_eq!(
            mod_pow(&BigUint::from(2u32), &BigUint::from(10u32), &modulus),
            BigUint::from(10u32)
        );
        assert_eq!(
            mod_pow(&BigUint::from(7u32), &BigUint::zero(), &modulus),
            BigUint::one()
        );
        assert_eq!(
            mod_pow(&BigUint::from(7u32), &BigUint::from(3u32), &BigUint::one()),
            BigUint::zero()
        );
    }

    #[test]
    fn test_mod_pow_matches_library() {
        let mut rng = thread_rng();
        for _ in 0..20 {
            let base = rng.gen_biguint(200);
            let exponent = rng.gen_biguint(130);
            assert_eq!(
                mod_pow(&base, &exponent, &MERSENNE_127),
                base.modpow(&exponent, &MERSENNE_127)
            );
        }
    }

    #[test]
    fn test_inverse() {
        let mut rng = thread_rng();
        for _ in 0..20 {
            let value = rng.gen_biguint_below(&MERSENNE_127);
            if value.is_zero() {
                continue;
            }
            let inverse = mod_inverse(&value, &MERSENNE_127).unwrap();
            assert!(((value * inverse) % &*MERSENNE_127).is_one());
        }
    }

    /// Zero and every multiple of the modulus have no inverse.
    #[test]
    fn test_inverse_of_zero() {
        assert_eq!(
            mod_inverse(&BigUint::zero(), &MERSENNE_127),
            Err(DomainError::DivisionByZero)
        );
        assert_eq!(
            mod_inverse(&(*MERSENNE_127).clone(), &MERSENNE_127),
            Err(DomainError::DivisionByZero)
        );
    }
}
