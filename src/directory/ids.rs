use rand::Rng;
use std::collections::HashSet;
use std::ops::Range;

/// Base range new club ids are drawn from.
pub const CLUB_ID_BASE: Range<i64> = 10_000..20_000;
/// Base range new request ids are drawn from.
pub const REQUEST_ID_BASE: Range<i64> = 50_000..60_000;

/// Draw a candidate from `base`, then step up by one until it is not in `existing`.
///
/// Unique against `existing` for any input, including the empty set. Probing may
/// run past the end of `base`.
pub fn synthesize_id<R: Rng>(
    existing: &HashSet<i64>,
    base: Range<i64>,
    rng: &mut R,
) -> i64 {
    let mut candidate = rng.gen_range(base);
    while existing.contains(&candidate) {
        candidate += 1;
    }
    candidate
}
