use serde::{Deserialize, Serialize};

pub type ClubId = i64;

/// A student club. Missing fields deserialize to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub description: String,
    pub interests: Vec<String>,
    pub vibes: Vec<String>,
    pub collab_needs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Club {
    /// Interests, vibes and collab needs, in that order, un-normalized.
    pub fn tag_lists(&self) -> impl Iterator<Item = &String> {
        self.interests
            .iter()
            .chain(self.vibes.iter())
            .chain(self.collab_needs.iter())
    }
}
