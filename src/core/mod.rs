// Core algorithm exports
pub mod frequency;
pub mod recommender;
pub mod scoring;
pub mod similarity;

pub use frequency::{is_time_compatible, parse_weekly_frequency, WeeklyFrequency};
pub use recommender::{RecommendationResult, Recommender, DEFAULT_SIMILAR_N, DEFAULT_TOP_N};
pub use scoring::{calculate_hobby_score, count_matching_tags};
pub use similarity::{calculate_cost_overlap, calculate_similarity_score};
