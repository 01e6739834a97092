// Service exports
pub mod catalog;
pub mod community;
pub mod recommendations;
pub mod seed;

use chrono::Utc;
use serde_json::Value;
use thiserror::Error;

use crate::store::{Document, StoreError};

pub use catalog::CatalogService;
pub use community::CommunityService;
pub use recommendations::RecommendationService;
pub use seed::{seed_catalog, SeedSummary};

/// Errors raised by the catalog, community and recommendation services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    #[error("{0} already exists: {1}")]
    AlreadyExists(&'static str, String),

    #[error("User {user_id} is already a member of group {group_id}")]
    AlreadyMember { group_id: String, user_id: String },

    #[error("Group {0} is full")]
    GroupFull(String),

    #[error("Event {0} is full")]
    EventFull(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Collection names in the document store
#[derive(Debug, Clone)]
pub struct Collections {
    pub hobbies: String,
    pub categories: String,
    pub users: String,
    pub resources: String,
    pub posts: String,
    pub comments: String,
    pub groups: String,
    pub events: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            hobbies: "hobbies".to_string(),
            categories: "categories".to_string(),
            users: "users".to_string(),
            resources: "resources".to_string(),
            posts: "posts".to_string(),
            comments: "comments".to_string(),
            groups: "groups".to_string(),
            events: "events".to_string(),
        }
    }
}

fn now_value() -> Value {
    Value::String(Utc::now().to_rfc3339())
}

/// Set both `createdAt` and `updatedAt` to now
pub(crate) fn stamp_created(mut doc: Document) -> Document {
    let now = now_value();
    doc.insert("createdAt".to_string(), now.clone());
    doc.insert("updatedAt".to_string(), now);
    doc
}

/// Set `updatedAt` to now
pub(crate) fn stamp_updated(mut doc: Document) -> Document {
    doc.insert("updatedAt".to_string(), now_value());
    doc
}
