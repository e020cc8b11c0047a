use crate::types::{Club, ClubId, VendorRequest};
use std::collections::HashSet;

/// Seed records in seed order, then user-added records as stored (newest first).
/// Duplicates are kept.
pub fn merge<T: Clone>(seed: &[T], user_added: &[T]) -> Vec<T> {
    let mut merged = Vec::with_capacity(seed.len() + user_added.len());
    merged.extend_from_slice(seed);
    merged.extend_from_slice(user_added);
    merged
}

/// Records carrying an integer id unique within their kind.
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Club {
    fn id(&self) -> ClubId {
        self.id
    }
}

impl Identified for VendorRequest {
    fn id(&self) -> i64 {
        self.id
    }
}

pub fn id_set<T: Identified>(records: &[T]) -> HashSet<i64> {
    records.iter().map(Identified::id).collect()
}
