//! Dataset model
//!
//! A [`Dataset`] maps normalized query text to a [`QueryBucket`]. Key order
//! matters: partial matching walks the keys in the order they appear in the
//! source document, so the dataset keeps its entries in an ordered list and
//! uses a hash index only for exact lookups.

use crate::error::Result;
use crate::vendor::Vendor;
use ahash::AHashMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// Stored result set for one canonical query.
///
/// Only `query_id` is required. Missing metadata defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryBucket {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub query_id: String,
    /// Display form of the query
    #[serde(default)]
    pub query_text: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

/// Accept string or numeric identifiers, rendered as strings
fn deserialize_identifier<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "query_id must be a string or number, got {}",
            other
        ))),
    }
}

impl QueryBucket {
    pub fn new(
        query_id: impl Into<String>,
        query_text: impl Into<String>,
        last_updated: impl Into<String>,
        vendors: Vec<Vendor>,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            query_text: query_text.into(),
            last_updated: last_updated.into(),
            vendors,
        }
    }
}

/// Read-only mapping from normalized query text to query buckets,
/// iterated in insertion order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<(String, QueryBucket)>,
    index: AHashMap<String, usize>,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a full dataset document (`{"queries": {...}}`).
    ///
    /// A document without a `queries` key is an empty dataset.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let document: DatasetDocument = serde_json::from_slice(data)?;
        Ok(document.queries)
    }

    /// Insert a bucket. Re-inserting an existing key replaces its bucket
    /// but keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, bucket: QueryBucket) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = bucket,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, bucket));
            }
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&QueryBucket> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Iterate `(key, bucket)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryBucket)> {
        self.entries.iter().map(|(k, b)| (k.as_str(), b))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of vendors across all buckets
    pub fn vendor_count(&self) -> usize {
        self.entries.iter().map(|(_, b)| b.vendors.len()).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, QueryBucket)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (K, QueryBucket)>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for (key, bucket) in iter {
            dataset.insert(key, bucket);
        }
        dataset
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = Dataset;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of query text to query buckets")
            }

            // A bucket that does not parse is skipped so the rest of the
            // dataset stays usable.
            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Dataset, A::Error> {
                let mut dataset = Dataset::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    match QueryBucket::deserialize(value) {
                        Ok(bucket) => dataset.insert(key, bucket),
                        Err(e) => warn!(key = %key, "skipping invalid query bucket: {}", e),
                    }
                }
                Ok(dataset)
            }
        }

        deserializer.deserialize_map(DatasetVisitor)
    }
}

/// Top-level shape of the backing JSON document
#[derive(Debug, Default, Deserialize)]
pub struct DatasetDocument {
    #[serde(default)]
    pub queries: Dataset,
}
