//! Lookup orchestration: resolve a raw query, rank the bucket's vendors and
//! build the response returned to callers.

use crate::dataset::Dataset;
use crate::rank::rank;
use crate::resolve::{resolve, Resolution};
use crate::vendor::Vendor;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of an alternate-vendor lookup.
///
/// `query_id` and `last_updated` are only serialized for found lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub vendors: Vec<Vendor>,
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub found: bool,
}

impl LookupResponse {
    fn not_found(query: impl Into<String>) -> Self {
        Self {
            vendors: Vec::new(),
            query: query.into(),
            query_id: None,
            last_updated: None,
            found: false,
        }
    }
}

/// Look up the ranked vendors for a raw query.
///
/// Never fails. The dataset is not modified; vendors are ranked on a copy
/// of the matched bucket.
pub fn lookup(query: &str, dataset: &Dataset) -> LookupResponse {
    let bucket = match resolve(query, dataset) {
        Resolution::EmptyQuery => return LookupResponse::not_found(""),
        Resolution::NotFound => {
            debug!(query, "no matching query bucket");
            return LookupResponse::not_found(query);
        }
        Resolution::Exact(bucket) => {
            debug!(query, query_id = %bucket.query_id, "exact match");
            bucket
        }
        Resolution::Partial { key, bucket } => {
            debug!(query, key, query_id = %bucket.query_id, "partial match");
            bucket
        }
    };

    LookupResponse {
        vendors: rank(bucket.vendors.clone()),
        query: bucket.query_text.clone(),
        query_id: Some(bucket.query_id.clone()),
        last_updated: Some(bucket.last_updated.clone()),
        found: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::QueryBucket;
    use serde_json::json;

    fn sample_dataset() -> Dataset {
        let doc = json!({"queries": {
            "saline bags": {
                "query_id": "q-001",
                "query_text": "Saline Bags",
                "last_updated": "2024-06-01T10:00:00Z",
                "vendors": [
                    {"name": "Basic Supply"},
                    {"name": "Full Data Co", "price": "4.20", "certifications": ["ISO 13485"],
                     "shelf_life_storage_conditions": "36 months", "sterilization_method": "Steam",
                     "packaging_format_volume_size": "500ml"},
                    {"name": "Priced Inc", "price": 3.1}
                ]
            },
            "sterile gauze pads": {
                "query_id": "q-002",
                "query_text": "Sterile Gauze Pads",
                "last_updated": "2024-06-02T10:00:00Z",
                "vendors": [{"name": "Gauze World", "quality_certifications": "CE"}]
            }
        }});
        Dataset::from_slice(doc.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_empty_query_response() {
        let response = lookup("", &sample_dataset());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"vendors": [], "query": "", "found": false})
        );
    }

    #[test]
    fn test_empty_query_on_empty_dataset() {
        let response = lookup("", &Dataset::new());
        assert_eq!(response, LookupResponse::not_found(""));
    }

    #[test]
    fn test_exact_match_response() {
        let response = lookup("Saline Bags", &sample_dataset());

        assert!(response.found);
        assert_eq!(response.query, "Saline Bags");
        assert_eq!(response.query_id.as_deref(), Some("q-001"));
        assert_eq!(response.last_updated.as_deref(), Some("2024-06-01T10:00:00Z"));

        let ranked: Vec<(&str, u8)> = response
            .vendors
            .iter()
            .map(|v| (v.get("name").unwrap().as_str().unwrap(), v.suitability_score().unwrap()))
            .collect();
        assert_eq!(ranked, [("Full Data Co", 100), ("Priced Inc", 60), ("Basic Supply", 50)]);
    }

    #[test]
    fn test_partial_match_response() {
        let response = lookup("gauze", &sample_dataset());
        assert!(response.found);
        assert_eq!(response.query, "Sterile Gauze Pads");
        assert_eq!(response.vendors[0].suitability_score(), Some(60));
    }

    #[test]
    fn test_not_found_keeps_raw_query() {
        let response = lookup("  Syringes 5ML ", &sample_dataset());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"vendors": [], "query": "  Syringes 5ML ", "found": false})
        );
    }

    #[test]
    fn test_found_response_shape() {
        let value = serde_json::to_value(lookup("saline bags", &sample_dataset())).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["vendors", "query", "query_id", "last_updated", "found"]);
    }

    #[test]
    fn test_dataset_not_modified() {
        let dataset = sample_dataset();
        let _ = lookup("saline bags", &dataset);
        let bucket: &QueryBucket = dataset.get("saline bags").unwrap();
        assert!(bucket.vendors.iter().all(|v| v.suitability_score().is_none()));
        assert_eq!(bucket.vendors[0].get("name"), Some(&json!("Basic Supply")));
    }
}
