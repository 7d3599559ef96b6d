//! Reconstruction of secrets from Shamir shares and auditing of share sets against the reconstructed polynomial.
//! All algorithms are generic over an `ArithmeticDomain`, so the same code recovers secrets over the integers and
//! over prime fields.

pub mod error;
pub mod lagrange;
pub mod shamir_secret_sharing;
pub mod share;

mod test_implementations;

pub use error::SharingError;
pub use shamir_secret_sharing::{ReconstructionResult, ShamirSecretSharing, WrongShare};
pub use share::{Share, ShareSet};

/// A threshold secret sharing scheme whose secrets can be recovered from `t` shares. The secret is of type `T` and
/// shares are of type `S`.
pub trait ThresholdSecretSharingScheme<T, S> {
    /// Take a slice of shares and reconstruct the secret from them. At least `threshold` shares must be present,
    /// otherwise the secret cannot be reconstructed.
    /// # Parameters
    /// - `shares` a collection of at least `threshold` shares
    /// - `threshold` the threshold the shares were generated upon. This may be less than the actual number of shares
    /// given, in which case only the first `threshold` shares are used
    ///
    /// # Returns
    /// The secret if enough shares are present and the domain arithmetic succeeds.
    fn reconstruct_secret(&self, shares: &[S], threshold: usize) -> Result<T, SharingError>;
}
