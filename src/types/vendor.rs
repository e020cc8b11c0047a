use serde::{Deserialize, Serialize};

/// A vendor offering services to clubs. Only ever comes from seed data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub services: Vec<String>,
    pub vibes: Vec<String>,
    pub tags: Vec<String>,
    pub availability: Vec<String>,
    pub price_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}
