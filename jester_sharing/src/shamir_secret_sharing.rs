use jester_maths::ArithmeticDomain;

use crate::error::SharingError;
use crate::lagrange::{interpolate_at, interpolate_secret};
use crate::share::{Share, ShareSet};
use crate::ThresholdSecretSharingScheme;

/// Shamir's secret sharing scheme over the arithmetic domain `D`. Shares are points of a polynomial of degree
/// `threshold - 1` whose constant term is the secret.
#[derive(Clone, Debug, Default)]
pub struct ShamirSecretSharing<D> {
    domain: D,
}

/// A share that does not lie on the reconstructed polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrongShare<E> {
    /// The share index.
    pub x: u64,
    /// The value found in the share set.
    pub given: E,
    /// The value of the reconstructed polynomial at `x`.
    pub expected: E,
}

/// The outcome of a reconstruction: the recovered secret and every share inconsistent with it, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReconstructionResult<E> {
    pub secret: E,
    pub wrong_shares: Vec<WrongShare<E>>,
}

impl<E> ReconstructionResult<E> {
    /// Whether every share lies on the reconstructed polynomial.
    pub fn is_consistent(&self) -> bool {
        self.wrong_shares.is_empty()
    }
}

impl<D> ShamirSecretSharing<D>
where
    D: ArithmeticDomain,
{
    pub fn new(domain: D) -> Self {
        ShamirSecretSharing { domain }
    }

    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Reconstruct the secret of `share_set` and check every share against the reconstructed polynomial.
    ///
    /// The first `k` shares in input order are trusted as the basis of the polynomial, the remaining shares are only
    /// audited. A corrupted share within the basis therefore yields a wrong secret and may get correct shares
    /// flagged. Basis members are audited as well, but always match.
    ///
    /// # Errors
    /// - `SharingError::InsufficientShares` if fewer than `k` shares are present. No interpolation happens then.
    /// - `SharingError::Domain` if an interpolation step is rejected by the domain.
    pub fn reconstruct(
        &self,
        share_set: &ShareSet<D::Element>,
    ) -> Result<ReconstructionResult<D::Element>, SharingError> {
        let basis = share_set
            .basis()
            .ok_or_else(|| SharingError::InsufficientShares {
                needed: share_set.threshold(),
                got: share_set.len(),
            })?;

        let secret = self.reconstruct_secret(basis, share_set.threshold())?;

        let wrong_shares = share_set
            .shares()
            .iter()
            .map(|share| self.check_share(basis, share))
            .filter_map(Result::transpose)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReconstructionResult {
            secret,
            wrong_shares,
        })
    }

    /// Compare `share` with the polynomial defined by `basis`. Returns `Some` if the share does not lie on it.
    fn check_share(
        &self,
        basis: &[Share<D::Element>],
        share: &Share<D::Element>,
    ) -> Result<Option<WrongShare<D::Element>>, SharingError> {
        let expected = interpolate_at(&self.domain, basis, &self.domain.from_index(share.x))?;

        if expected == share.y {
            Ok(None)
        } else {
            Ok(Some(WrongShare {
                x: share.x,
                given: share.y.clone(),
                expected,
            }))
        }
    }
}

impl<D> ThresholdSecretSharingScheme<D::Element, Share<D::Element>> for ShamirSecretSharing<D>
where
    D: ArithmeticDomain,
{
    /// Interpolates the secret from the first `threshold` shares using the Lagrange interpolation method.
    fn reconstruct_secret(
        &self,
        shares: &[Share<D::Element>],
        threshold: usize,
    ) -> Result<D::Element, SharingError> {
        let basis = shares
            .get(..threshold)
            .ok_or_else(|| SharingError::InsufficientShares {
                needed: threshold,
                got: shares.len(),
            })?;

        Ok(interpolate_secret(&self.domain, basis)?)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use num_bigint::{BigInt, BigUint, RandBigInt};
    use jester_maths::{DomainError, IntegerDomain, PrimeFieldDomain};
    use num::One;
    use rand::thread_rng;

    use super::*;
    use crate::test_implementations::TestPolynomial;

    fn int(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn integer_share_set(k: usize, values: &[(u64, i64)]) -> ShareSet<BigInt> {
        let shares = values.iter().map(|(x, y)| Share::new(*x, int(*y))).collect();
        ShareSet::new(values.len(), k, shares)
    }

    /// The shares of `123 + 45x + 67x^2` reconstruct the secret without complaints.
    #[test]
    fn test_quadratic_example() {
        let share_set = integer_share_set(3, &[(1, 235), (2, 481), (3, 861), (4, 1375)]);
        let result = ShamirSecretSharing::new(IntegerDomain)
            .reconstruct(&share_set)
            .unwrap();

        assert_eq!(result.secret, int(123));
        assert!(result.is_consistent());
    }

    /// The first three points fix the polynomial; the fourth does not lie on it.
    #[test]
    fn test_fourth_share_off_polynomial() {
        let share_set = integer_share_set(
            3,
            &[(1, 166270), (2, 585182), (3, 1716161), (4, 5971876)],
        );
        let result = ShamirSecretSharing::new(IntegerDomain)
            .reconstruct(&share_set)
            .unwrap();

        assert_eq!(result.secret, int(459425));
        assert_eq!(
            result.wrong_shares,
            vec![WrongShare {
                x: 4,
                given: int(5971876),
                expected: int(3559207)
            }]
        );
    }

    #[test]
    fn test_threshold_enforced() {
        let share_set = integer_share_set(3, &[(1, 235), (3, 861)]);
        let scheme = ShamirSecretSharing::new(IntegerDomain);

        assert_eq!(
            scheme.reconstruct(&share_set),
            Err(SharingError::InsufficientShares { needed: 3, got: 2 })
        );
        assert_eq!(
            scheme.reconstruct_secret(share_set.shares(), 3),
            Err(SharingError::InsufficientShares { needed: 3, got: 2 })
        );
    }

    /// Only the first `threshold` shares enter the secret, the corrupted fourth share is ignored.
    #[test]
    fn test_secret_from_prefix() {
        let share_set = integer_share_set(3, &[(1, 235), (2, 481), (3, 861), (4, 1376)]);
        let scheme = ShamirSecretSharing::new(IntegerDomain);

        assert_eq!(scheme.reconstruct_secret(share_set.shares(), 3), Ok(int(123)));
        assert_eq!(
            scheme.reconstruct(&share_set).map(|result| result.secret),
            scheme.reconstruct_secret(share_set.shares(), 3)
        );
    }

    /// Corrupting a single share outside the basis flags exactly that share with its correct value.
    #[test]
    fn test_corruption_detection() {
        let domain = PrimeFieldDomain::mersenne_127();
        let mut rng = thread_rng();
        let polynomial = TestPolynomial::random(&domain, &mut rng, 4);
        let mut shares = polynomial.shares(&domain, 1..=9);

        for corrupted in 4..9 {
            let intact = shares[corrupted].y.clone();
            shares[corrupted].y = domain.add(&intact, &BigUint::one());

            let share_set = ShareSet::new(9, 4, shares.clone());
            let result = ShamirSecretSharing::new(domain.clone())
                .reconstruct(&share_set)
                .unwrap();

            assert_eq!(&result.secret, polynomial.secret());
            assert_eq!(
                result.wrong_shares,
                vec![WrongShare {
                    x: corrupted as u64 + 1,
                    given: shares[corrupted].y.clone(),
                    expected: intact.clone()
                }]
            );

            shares[corrupted].y = intact;
        }
    }

    /// A corrupted basis member poisons the secret: the basis itself looks consistent while the honest remainder of
    /// the shares gets flagged.
    #[test]
    fn test_corrupted_basis_is_trusted() {
        let share_set = integer_share_set(3, &[(1, 235), (2, 482), (3, 861), (4, 1375), (5, 2023)]);
        let result = ShamirSecretSharing::new(IntegerDomain)
            .reconstruct(&share_set)
            .unwrap();

        assert_ne!(result.secret, int(123));
        assert_eq!(
            result.wrong_shares.iter().map(|w| w.x).collect::<Vec<_>>(),
            vec![4, 5]
        );
    }

    /// Gaps in the indices are fine, the shares keep their input order.
    #[test]
    fn test_sparse_indices() {
        let domain = PrimeFieldDomain::mersenne_127();
        let mut rng = thread_rng();
        let polynomial = TestPolynomial::random(&domain, &mut rng, 3);
        let mut shares = polynomial.shares(&domain, vec![7, 2, 9, 4, 12]);
        shares[3].y = rng.gen_biguint_below(domain.modulus());

        let result = ShamirSecretSharing::new(domain.clone())
            .reconstruct(&ShareSet::new(12, 3, shares.clone()))
            .unwrap();

        assert_eq!(&result.secret, polynomial.secret());
        let flagged: Vec<u64> = result.wrong_shares.iter().map(|w| w.x).collect();
        if shares[3].y == polynomial.evaluate(&domain, 4) {
            assert!(flagged.is_empty());
        } else {
            assert_eq!(flagged, vec![4]);
        }
    }

    /// All field outputs lie within `[0, P)`.
    #[test]
    fn test_field_bounds() {
        let domain = PrimeFieldDomain::mersenne_127();
        let mut rng = thread_rng();
        let shares = (1..=6)
            .map(|x| Share::ingest(&domain, x, &rng.gen_biguint(200)))
            .collect();

        let result = ShamirSecretSharing::new(domain.clone())
            .reconstruct(&ShareSet::new(6, 3, shares))
            .unwrap();

        assert!(result.secret < *domain.modulus());
        for wrong in result.wrong_shares.iter() {
            assert!(wrong.given < *domain.modulus());
            assert!(wrong.expected < *domain.modulus());
        }
    }

    #[test]
    fn test_inexact_division_aborts() {
        let share_set = integer_share_set(2, &[(1, 1), (3, 4), (5, 5)]);
        let result = ShamirSecretSharing::new(IntegerDomain).reconstruct(&share_set);

        assert!(matches!(
            result,
            Err(SharingError::Domain(DomainError::InexactDivision { .. }))
        ));
    }

    #[test]
    fn test_duplicate_basis_coordinates() {
        let domain = PrimeFieldDomain::mersenne_127();
        let shares = vec![
            Share::new(1, BigUint::from(3u32)),
            Share::new(1, BigUint::from(5u32)),
        ];

        assert_eq!(
            ShamirSecretSharing::new(domain).reconstruct(&ShareSet::new(2, 2, shares)),
            Err(SharingError::Domain(DomainError::DivisionByZero))
        );
    }

    /// Independent reconstructions share nothing and can run in parallel.
    #[test]
    fn test_parallel_reconstructions() {
        let domain = PrimeFieldDomain::mersenne_127();
        let mut rng = thread_rng();
        let polynomials: Vec<_> = (1..=4)
            .map(|k| TestPolynomial::random(&domain, &mut rng, k))
            .collect();

        let handles: Vec<_> = polynomials
            .iter()
            .enumerate()
            .map(|(i, polynomial)| {
                let share_set = ShareSet::new(8, i + 1, polynomial.shares(&domain, 1..=8));
                let scheme = ShamirSecretSharing::new(domain.clone());
                thread::spawn(move || scheme.reconstruct(&share_set))
            })
            .collect();

        for (handle, polynomial) in handles.into_iter().zip(polynomials.iter()) {
            let result = handle.join().unwrap().unwrap();
            assert_eq!(&result.secret, polynomial.secret());
            assert!(result.is_consistent());
        }
    }
}
