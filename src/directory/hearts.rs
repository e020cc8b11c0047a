use crate::types::{Club, ClubId};

/// Add `id` to the front of `hearted`, or remove it if already present.
/// Returns whether the club is hearted afterwards.
pub fn toggle_heart(hearted: &mut Vec<ClubId>, id: ClubId) -> bool {
    if let Some(pos) = hearted.iter().position(|h| *h == id) {
        hearted.remove(pos);
        false
    } else {
        hearted.insert(0, id);
        true
    }
}

/// Hearted clubs in heart order. Ids with no matching club are skipped.
pub fn resolve_hearted(hearted: &[ClubId], clubs: &[Club]) -> Vec<Club> {
    hearted
        .iter()
        .filter_map(|id| clubs.iter().find(|c| c.id == *id))
        .cloned()
        .collect()
}
