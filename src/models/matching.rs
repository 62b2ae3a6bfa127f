//! Matches and favorites: the two ways a user relates to an animal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review state of a match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Approved => "approved",
            MatchStatus::Rejected => "rejected",
        }
    }
}

/// Created when a user likes an animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: u64,
    pub pet_id: u64,
    pub user_id: String,
    pub matched_at: DateTime<Utc>,
    pub status: MatchStatus,
}

/// A bookmarked animal, independent of the like flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: u64,
    pub pet_id: u64,
    pub user_id: String,
    pub added_at: DateTime<Utc>,
}
