use rand::Rng;
use rand::seq::SliceRandom;

/// Vocabulary the discover chips are drawn from.
pub const MASTER_TAGS: [&str; 13] = [
    "sports",
    "music",
    "tech",
    "art",
    "culture",
    "women",
    "business",
    "volunteering",
    "gaming",
    "food",
    "dance",
    "debate",
    "social",
];

/// Uniformly random `min(count, master.len())` tags without repeats.
///
/// Shuffles a copy (Fisher-Yates) and truncates, so every subset and order is
/// equally likely.
pub fn sample_tags<R: Rng>(master: &[&str], count: usize, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<String> = master.iter().map(|t| t.to_string()).collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}
