//! Data models for the adoption API.
//!
//! Defines the records held in the in-memory store and the input types
//! used to create and patch them. All records serialize with camelCase keys.

mod admin;
mod animal;
mod matching;
mod user;

pub use admin::*;
pub use animal::*;
pub use matching::*;
pub use user::*;

use chrono::{DateTime, Utc};

/// Current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
