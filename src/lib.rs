//! Hobby Match - hobby recommendation and community service
//!
//! This library provides the recommendation heuristic used to suggest hobbies
//! to users, plus the catalog and community services built on top of an
//! injected document store.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use core::{parse_weekly_frequency, Recommender, WeeklyFrequency};
pub use models::{Hobby, RecommendationScore, ScoringPoints, UserProfile};
pub use store::{DocumentStore, MemoryStore, StoreError};
