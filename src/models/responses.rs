use serde::{Deserialize, Serialize};
use crate::models::domain::{RecommendationScore, SimilarityScore};

/// Response for the recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub recommendations: Vec<RecommendationScore>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for similar hobbies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarHobbiesResponse {
    #[serde(rename = "hobbyId")]
    pub hobby_id: String,
    pub similar: Vec<SimilarityScore>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for create endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: String,
}
