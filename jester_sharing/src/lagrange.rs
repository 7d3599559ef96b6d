//! Lagrange interpolation over an arbitrary `ArithmeticDomain`.
//!
//! For a basis `(x_1, y_1), ..., (x_k, y_k)` the unique polynomial of degree `k - 1` through these points is
//! evaluated at `x` as
//!
//! ```text
//! f(x) = sum_i  y_i * prod_{j != i} (x - x_j)  /  prod_{j != i} (x_i - x_j)
//! ```
//!
//! Numerator and denominator of each term are accumulated completely before a single division per term. The share
//! value is multiplied into the numerator first, so the integer domain only rejects terms that are not integral.

use jester_maths::{ArithmeticDomain, DomainError};

use crate::share::Share;

/// Evaluate the polynomial defined by `basis` at the point `x`. Evaluating at zero yields the secret.
///
/// Requires `O(k^2)` domain multiplications. Fails if a division is rejected by the domain, which happens for
/// duplicate x-coordinates in the basis and, in the integer domain, for non-integral terms.
pub fn interpolate_at<D>(
    domain: &D,
    basis: &[Share<D::Element>],
    x: &D::Element,
) -> Result<D::Element, DomainError>
where
    D: ArithmeticDomain,
{
    let coordinates: Vec<D::Element> = basis.iter().map(|share| domain.from_index(share.x)).collect();

    basis
        .iter()
        .zip(coordinates.iter())
        .enumerate()
        .try_fold(domain.zero(), |akk, (i, (share, x_i))| {
            let (numerator, denominator) = coordinates
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold((domain.one(), domain.one()), |(num, den), (_, x_j)| {
                    (
                        domain.mul(&num, &domain.sub(x, x_j)),
                        domain.mul(&den, &domain.sub(x_i, x_j)),
                    )
                });

            let term = domain.div(&domain.mul(&share.y, &numerator), &denominator)?;
            Ok(domain.add(&akk, &term))
        })
}

/// Evaluate the polynomial defined by `basis` at zero, i.e. recover its constant term.
pub fn interpolate_secret<D>(domain: &D, basis: &[Share<D::Element>]) -> Result<D::Element, DomainError>
where
    D: ArithmeticDomain,
{
    interpolate_at(domain, basis, &domain.zero())
}
