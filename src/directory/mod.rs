//! Pure directory logic: merging, filtering, tag sampling, id synthesis and hearts.

pub mod filter;
pub mod hearts;
pub mod ids;
pub mod merge;
pub mod tags;

pub use filter::{SearchQuery, Searchable, filter_clubs, filter_records, normalize};
pub use hearts::{resolve_hearted, toggle_heart};
pub use ids::{CLUB_ID_BASE, REQUEST_ID_BASE, synthesize_id};
pub use merge::{Identified, id_set, merge};
pub use tags::{MASTER_TAGS, sample_tags};
