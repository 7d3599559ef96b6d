//! Loading of share files.
//!
//! A share file is a JSON object with a `keys` entry declaring the share count `n` and the threshold `k`. Every share
//! is stored under the decimal string of its index and carries the `base` and the digit string `value`:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "235" },
//!     "3": { "base": "16", "value": "35d" }
//! }
//! ```
//!
//! Numbers may be given as JSON numbers or as decimal strings. Only the indices `1..=n` are loaded, missing indices
//! are skipped and every other key is ignored.

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// Errors that can occur while loading a share file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not a JSON object with a valid `keys` entry.
    #[error("malformed share file")]
    Json(#[from] serde_json::Error),

    /// The record of a share is malformed.
    #[error("malformed share {index}")]
    Record {
        index: u64,
        #[source]
        source: serde_json::Error,
    },

    /// A numeric field does not hold a non-negative integer of the expected size.
    #[error("field `{field}` must be a non-negative integer, got {value}")]
    InvalidNumber { field: String, value: String },

    /// A threshold of zero does not define a polynomial.
    #[error("threshold k must be at least 1")]
    ZeroThreshold,
}

/// A number given either as JSON number or as string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(u64),
    Text(String),
}

impl Scalar {
    fn to_u64(&self, field: &str) -> Result<u64, LoadError> {
        match self {
            Scalar::Number(number) => Ok(*number),
            Scalar::Text(text) => text.trim().parse().map_err(|_| LoadError::InvalidNumber {
                field: field.to_string(),
                value: text.clone(),
            }),
        }
    }

    fn into_text(self) -> String {
        match self {
            Scalar::Number(number) => number.to_string(),
            Scalar::Text(text) => text,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawKeys {
    n: Scalar,
    k: Scalar,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    base: Scalar,
    value: Scalar,
}

#[derive(Debug, Deserialize)]
struct RawShareFile {
    keys: RawKeys,
    #[serde(flatten)]
    records: HashMap<String, Value>,
}

/// A single share as found in the file, before its value is parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRecord {
    pub index: u64,
    pub base: u32,
    pub value: String,
}

/// The content of a share file: the declared parameters and the present share records in ascending index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareFile {
    pub n: u64,
    pub k: usize,
    pub records: Vec<ShareRecord>,
}

/// Read and parse the share file at `path`.
pub fn load(path: &Path) -> Result<ShareFile, LoadError> {
    let input = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file = parse(&input)?;
    info!(
        path = %path.display(),
        n = file.n,
        k = file.k,
        shares = file.records.len(),
        "loaded share file"
    );
    Ok(file)
}

/// Parse the JSON text of a share file.
pub fn parse(input: &str) -> Result<ShareFile, LoadError> {
    let raw: RawShareFile = serde_json::from_str(input)?;

    let n = raw.keys.n.to_u64("keys.n")?;
    let k = raw.keys.k.to_u64("keys.k")?;
    let k = usize::try_from(k).map_err(|_| LoadError::InvalidNumber {
        field: "keys.k".to_string(),
        value: k.to_string(),
    })?;
    if k == 0 {
        return Err(LoadError::ZeroThreshold);
    }

    let mut present: Vec<(u64, Value)> = Vec::new();
    for (key, value) in raw.records {
        match share_index(&key, n) {
            Some(index) if !value.is_null() => present.push((index, value)),
            _ => debug!(key = %key, "ignoring entry outside of the share indices"),
        }
    }
    present.sort_by_key(|(index, _)| *index);

    let records = present
        .into_iter()
        .map(|(index, value)| parse_record(index, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ShareFile { n, k, records })
}

/// The index denoted by `key`, if it is the canonical decimal string of an index in `1..=n`.
fn share_index(key: &str, n: u64) -> Option<u64> {
    let index: u64 = key.parse().ok()?;
    if index >= 1 && index <= n && index.to_string() == key {
        Some(index)
    } else {
        None
    }
}

fn parse_record(index: u64, value: Value) -> Result<ShareRecord, LoadError> {
    let raw: RawRecord =
        serde_json::from_value(value).map_err(|source| LoadError::Record { index, source })?;

    let field = format!("{}.base", index);
    let base = raw.base.to_u64(&field)?;
    let base = u32::try_from(base).map_err(|_| LoadError::InvalidNumber {
        field,
        value: base.to_string(),
    })?;

    Ok(ShareRecord {
        index,
        base,
        value: raw.value.into_text(),
    })
}
