//! # altvendor
//!
//! Alternate vendor lookup service.
//!
//! Given a free-text product query, altvendor finds the matching query
//! bucket in a pre-populated vendor dataset, scores every vendor by how
//! complete its procurement data is, and returns the vendors best-first.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! altvendor --data-file ./data/vendors.json --http-port 8000
//! curl 'http://localhost:8000/alternate-vendors?q=saline%20bags'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use altvendor::prelude::*;
//!
//! let doc = br#"{"queries": {"sterile gauze pads": {
//!     "query_id": "q-002",
//!     "query_text": "Sterile Gauze Pads",
//!     "last_updated": "2024-06-02",
//!     "vendors": [{"name": "Gauze World", "price": 1.5}]
//! }}}"#;
//! let dataset = Dataset::from_slice(doc).unwrap();
//!
//! let response = lookup("gauze", &dataset);
//! assert!(response.found);
//! assert_eq!(response.query, "Sterile Gauze Pads");
//! assert_eq!(response.vendors[0].suitability_score(), Some(60));
//! ```
//!
//! ## Crate Structure
//!
//! - `altvendor-core` - Dataset model, query resolution, suitability ranking
//! - `altvendor-storage` - JSON dataset loading and the reloadable dataset cache
//! - `altvendor-api` - REST API
//!
//! ## Scoring
//!
//! Every vendor starts at 50 and gains 10 for each of: `price`,
//! `certifications` or `quality_certifications`,
//! `shelf_life_storage_conditions`, `sterilization_method`,
//! `packaging_format_volume_size`. The score is capped at 100.

// Re-export core types
pub use altvendor_core::{
    lookup, normalize_query, rank, resolve, score,
    Dataset, DatasetDocument, QueryBucket, Vendor,
    LookupResponse, Resolution,
    Error, Result,
};

// Re-export storage
pub use altvendor_storage::{DatasetStats, DatasetStore};

// Re-export API
pub use altvendor_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        lookup, rank, resolve, score,
        Dataset, QueryBucket, Vendor,
        LookupResponse, Resolution,
        Error, Result,
        DatasetStore,
        RestApi,
    };
}
