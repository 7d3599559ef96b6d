//! Runs the reconstruction of a loaded share file within a chosen arithmetic domain.

use std::convert::TryFrom;

use jester_maths::radix::parse_numeral;
use jester_maths::{ArithmeticDomain, NumeralError};
use jester_sharing::{ShamirSecretSharing, Share, ShareSet, SharingError};
use tracing::{debug, info, warn};

use crate::loader::ShareFile;
use crate::report::Report;

/// Errors that can occur while recovering a secret from a share file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecoveryError {
    /// The value of a share is no valid numeral in its base.
    #[error("share {index} has an invalid value")]
    Numeral {
        index: u64,
        #[source]
        source: NumeralError,
    },

    #[error(transparent)]
    Sharing(#[from] SharingError),
}

/// Parse every share of `file` and embed the values into `domain`.
pub fn share_set<D>(domain: &D, file: &ShareFile) -> Result<ShareSet<D::Element>, RecoveryError>
where
    D: ArithmeticDomain,
{
    let shares = file
        .records
        .iter()
        .map(|record| {
            let value = parse_numeral(record.base, &record.value).map_err(|source| RecoveryError::Numeral {
                index: record.index,
                source,
            })?;
            debug!(x = record.index, base = record.base, "parsed share");
            Ok(Share::ingest(domain, record.index, &value))
        })
        .collect::<Result<Vec<_>, RecoveryError>>()?;

    // saturate on 32 bit targets, n is advisory only
    let n = usize::try_from(file.n).unwrap_or(usize::MAX);
    Ok(ShareSet::new(n, file.k, shares))
}

/// Reconstruct the secret of `file` within `domain` and audit all of its shares.
pub fn recover<D>(domain: D, file: &ShareFile) -> Result<Report, RecoveryError>
where
    D: ArithmeticDomain,
{
    let shares = share_set(&domain, file)?;
    info!(
        shares = shares.len(),
        threshold = shares.threshold(),
        "reconstructing secret"
    );

    let result = ShamirSecretSharing::new(domain).reconstruct(&shares)?;
    for wrong in result.wrong_shares.iter() {
        warn!(
            x = wrong.x,
            given = %wrong.given,
            expected = %wrong.expected,
            "share does not lie on the reconstructed polynomial"
        );
    }
    info!(wrong_shares = result.wrong_shares.len(), "reconstruction finished");

    Ok(Report::from(&result))
}
