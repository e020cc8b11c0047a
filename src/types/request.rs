use serde::{Deserialize, Serialize};

pub type RequestId = i64;

/// A club's posted request for vendor help.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VendorRequest {
    pub id: RequestId,
    pub club_name: String,
    pub title: String,
    pub description: String,
    pub needs: Vec<String>,
    pub budget: String,
    pub date: String,
    pub time_window: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}
