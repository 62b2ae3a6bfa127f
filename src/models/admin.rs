//! Display-only records for the shelter admin screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminChat {
    pub id: u64,
    pub user_name: String,
    pub user_image: String,
    pub pet_name: String,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    pub unread_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub id: u64,
    pub user_name: String,
    pub user_image: String,
    pub pet_name: String,
    pub pet_image: String,
    pub requested_at: DateTime<Utc>,
    pub status: String,
}
