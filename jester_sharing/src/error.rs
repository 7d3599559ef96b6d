//! Errors of share reconstruction.

use jester_maths::DomainError;

/// Errors that can occur while reconstructing or auditing a share set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SharingError {
    /// Fewer shares than the threshold were supplied.
    #[error("not enough shares: need {needed}, got {got}")]
    InsufficientShares {
        /// The threshold k.
        needed: usize,
        /// Shares actually present.
        got: usize,
    },

    /// The arithmetic domain rejected an interpolation step.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
