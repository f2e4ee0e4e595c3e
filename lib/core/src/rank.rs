//! Vendor suitability ranking
//!
//! Scores each vendor by how complete its procurement data is and orders
//! vendors best-first.

use crate::vendor::Vendor;
use std::cmp::Reverse;

pub const BASE_SCORE: u8 = 50;
pub const FIELD_BONUS: u8 = 10;
pub const MAX_SCORE: u8 = 100;

/// Scored criteria. A criterion is met when any of its fields is present.
pub const SCORED_CRITERIA: &[&[&str]] = &[
    &["price"],
    &["certifications", "quality_certifications"],
    &["shelf_life_storage_conditions"],
    &["sterilization_method"],
    &["packaging_format_volume_size"],
];

/// Compute the suitability score (0-100) for a vendor
pub fn score(vendor: &Vendor) -> u8 {
    let met = SCORED_CRITERIA
        .iter()
        .filter(|fields| fields.iter().any(|f| vendor.has(f)))
        .count();

    let total = BASE_SCORE as usize + met * FIELD_BONUS as usize;
    total.min(MAX_SCORE as usize) as u8
}

/// Assign `suitability_score` to every vendor and sort by it, descending.
///
/// The sort is stable: vendors with equal scores keep their input order.
pub fn rank(vendors: Vec<Vendor>) -> Vec<Vendor> {
    let mut scored: Vec<(u8, Vendor)> = vendors
        .into_iter()
        .map(|mut vendor| {
            let s = score(&vendor);
            vendor.set_suitability_score(s);
            (s, vendor)
        })
        .collect();

    scored.sort_by_key(|(s, _)| Reverse(*s));
    scored.into_iter().map(|(_, vendor)| vendor).collect()
}
