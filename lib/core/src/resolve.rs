//! Query resolution
//!
//! Maps a raw product query to a bucket in the [`Dataset`]: an exact key
//! lookup first, then the first key (in dataset order) that contains the
//! normalized query or is contained by it.

use crate::dataset::{Dataset, QueryBucket};

/// Outcome of resolving a query against a dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// The raw query was empty; no search was attempted
    EmptyQuery,
    /// The normalized query is a dataset key
    Exact(&'a QueryBucket),
    /// A dataset key and the normalized query contain one another
    Partial { key: &'a str, bucket: &'a QueryBucket },
    NotFound,
}

impl<'a> Resolution<'a> {
    #[inline]
    pub fn bucket(&self) -> Option<&'a QueryBucket> {
        match *self {
            Resolution::Exact(bucket) | Resolution::Partial { bucket, .. } => Some(bucket),
            Resolution::EmptyQuery | Resolution::NotFound => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.bucket().is_some()
    }
}

/// Lowercase and trim a raw query.
///
/// Trimming removes Unicode `White_Space` only; the separator controls
/// U+001C..=U+001F are kept.
#[inline]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Resolve a raw query to a bucket.
///
/// Only a truly empty query short-circuits. A whitespace-only query
/// normalizes to `""`, which every key contains, so it resolves to the
/// first bucket.
pub fn resolve<'a>(query: &str, dataset: &'a Dataset) -> Resolution<'a> {
    if query.is_empty() {
        return Resolution::EmptyQuery;
    }

    let normalized = normalize_query(query);

    if let Some(bucket) = dataset.get(&normalized) {
        return Resolution::Exact(bucket);
    }

    dataset
        .iter()
        .find(|(key, _)| key.contains(normalized.as_str()) || normalized.contains(key))
        .map(|(key, bucket)| Resolution::Partial { key, bucket })
        .unwrap_or(Resolution::NotFound)
}
