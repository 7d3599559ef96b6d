//! The share data model: single points of the secret polynomial and the set of points a reconstruction works on.

use jester_maths::ArithmeticDomain;
use num_bigint::BigUint;

/// A point `(x, y)` of the secret polynomial. `x` is the 1-based share index, `y` the share value as an element of
/// the active domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share<E> {
    pub x: u64,
    pub y: E,
}

impl<E> Share<E> {
    pub fn new(x: u64, y: E) -> Self {
        Share { x, y }
    }

    /// Create a share from a parsed value, reducing the value into `domain`.
    pub fn ingest<D>(domain: &D, x: u64, value: &BigUint) -> Self
    where
        D: ArithmeticDomain<Element = E>,
    {
        Share {
            x,
            y: domain.from_uint(value),
        }
    }
}

/// The shares of one secret, in input order, together with the declared share count `n` and threshold `k`.
///
/// `n` is advisory and never checked against the shares. Uniqueness of the x-coordinates is not validated here
/// either; duplicate coordinates within the basis surface as a division by zero during interpolation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet<E> {
    n: usize,
    k: usize,
    shares: Vec<Share<E>>,
}

impl<E> ShareSet<E> {
    pub fn new(n: usize, k: usize, shares: Vec<Share<E>>) -> Self {
        ShareSet { n, k, shares }
    }

    /// The declared number of shares.
    pub fn declared_count(&self) -> usize {
        self.n
    }

    /// The declared threshold `k`.
    pub fn threshold(&self) -> usize {
        self.k
    }

    pub fn shares(&self) -> &[Share<E>] {
        &self.shares
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// The first `k` shares in input order, or `None` if fewer than `k` shares are present. These shares define the
    /// polynomial; all other shares are only checked against it.
    pub fn basis(&self) -> Option<&[Share<E>]> {
        self.shares.get(..self.k)
    }
}
