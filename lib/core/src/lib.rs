//! # altvendor Core
//!
//! Core library for the altvendor lookup service.
//!
//! This crate provides the dataset model and the decision logic:
//!
//! - [`Dataset`] - Ordered mapping of normalized query text to [`QueryBucket`]s
//! - [`Vendor`] - Open-ended vendor record
//! - [`resolve`] - Exact, then partial, query-to-bucket resolution
//! - [`rank`] - Suitability scoring and stable best-first ordering
//! - [`lookup`] - The full query → ranked vendors response
//!
//! ## Example
//!
//! ```rust
//! use altvendor_core::{lookup, Dataset, QueryBucket, Vendor};
//!
//! let mut dataset = Dataset::new();
//! dataset.insert(
//!     "saline bags",
//!     QueryBucket::new(
//!         "q-001",
//!         "Saline Bags",
//!         "2024-06-01",
//!         vec![
//!             Vendor::new().with_field("name", "Basic Supply"),
//!             Vendor::new().with_field("name", "MedSource").with_field("price", "4.20"),
//!         ],
//!     ),
//! );
//!
//! let response = lookup("Saline Bags", &dataset);
//! assert!(response.found);
//! assert_eq!(response.vendors[0].suitability_score(), Some(60));
//! ```

pub mod dataset;
pub mod error;
pub mod lookup;
pub mod rank;
pub mod resolve;
pub mod vendor;

pub use dataset::{Dataset, DatasetDocument, QueryBucket};
pub use error::{Error, Result};
pub use lookup::{lookup, LookupResponse};
pub use rank::{rank, score};
pub use resolve::{normalize_query, resolve, Resolution};
pub use vendor::{Vendor, SUITABILITY_SCORE_FIELD};
