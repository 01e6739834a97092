use crate::core::{scoring::calculate_hobby_score, similarity::calculate_similarity_score};
use crate::models::{Hobby, RecommendationScore, ScoringPoints, SimilarityScore, UserProfile};

/// Number of recommendations returned per request
pub const DEFAULT_TOP_N: usize = 10;

/// Number of similar hobbies returned per request
pub const DEFAULT_SIMILAR_N: usize = 5;

/// Result of the recommendation process
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<RecommendationScore>,
    pub total_candidates: usize,
}

/// Scores and ranks candidate hobbies
///
/// # Pipeline Stages
/// 1. Score every candidate against the profile
/// 2. Stable sort by score, highest first
/// 3. Truncate to the configured top-N
///
/// Candidates are taken as given: duplicates coming from overlapping
/// categories are scored and ranked like any other entry.
#[derive(Debug, Clone)]
pub struct Recommender {
    points: ScoringPoints,
    top_n: usize,
    similar_n: usize,
}

impl Recommender {
    pub fn new(points: ScoringPoints, top_n: usize, similar_n: usize) -> Self {
        Self {
            points,
            top_n,
            similar_n,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringPoints::default(), DEFAULT_TOP_N, DEFAULT_SIMILAR_N)
    }

    pub fn points(&self) -> &ScoringPoints {
        &self.points
    }

    /// Rank `candidates` for `profile` and keep the best `top_n`
    ///
    /// Order among equal scores is not specified.
    pub fn recommend(&self, profile: &UserProfile, candidates: Vec<Hobby>) -> RecommendationResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<RecommendationScore> = candidates
            .into_iter()
            .map(|hobby| {
                let breakdown = calculate_hobby_score(&hobby, profile, &self.points);
                RecommendationScore {
                    hobby,
                    score: breakdown.total(),
                    breakdown,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.top_n);

        RecommendationResult {
            recommendations: scored,
            total_candidates,
        }
    }

    /// Rank hobbies similar to `reference`, never including `reference` itself
    pub fn similar(&self, reference: &Hobby, candidates: Vec<Hobby>) -> Vec<SimilarityScore> {
        let mut scored: Vec<SimilarityScore> = candidates
            .into_iter()
            .filter(|hobby| hobby.id != reference.id)
            .map(|hobby| {
                let score = calculate_similarity_score(reference, &hobby);
                SimilarityScore { hobby, score }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.similar_n);

        scored
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostRange, Difficulty, TimeRequirement, UserPreferences};

    fn create_hobby(id: &str, difficulty: Difficulty, max_cost: f64, frequency: &str) -> Hobby {
        Hobby {
            id: id.to_string(),
            name: format!("Hobby {}", id),
            description: String::new(),
            category_id: "art".to_string(),
            difficulty,
            cost: CostRange { min: 0.0, max: max_cost, currency: "KRW".to_string() },
            time_required: TimeRequirement {
                frequency: frequency.to_string(),
                duration: String::new(),
            },
            location: vec![],
            image_url: String::new(),
            tags: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn create_profile() -> UserProfile {
        UserProfile {
            id: "current_user".to_string(),
            display_name: "Current User".to_string(),
            email: String::new(),
            interests: vec!["art".to_string()],
            favorite_hobbies: vec![],
            location: Default::default(),
            preferences: UserPreferences {
                difficulty: vec![Difficulty::Beginner],
                max_cost: 100.0,
                time_availability: vec!["sat".to_string(), "sun".to_string()],
            },
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_recommend_sorted_by_score() {
        let recommender = Recommender::with_defaults();
        let profile = create_profile();

        let candidates = vec![
            // 0: nothing matches except partial cost (min 0 <= 100)
            create_hobby("low", Difficulty::Advanced, 500.0, "매일"),
            // 3 + 2 + 2 = 7
            create_hobby("best", Difficulty::Beginner, 50.0, "주 1-2회"),
            // 3 + 1 + 0 = 4
            create_hobby("mid", Difficulty::Beginner, 500.0, "주 5-6회"),
        ];

        let result = recommender.recommend(&profile, candidates);

        assert_eq!(result.total_candidates, 3);
        let ids: Vec<_> = result.recommendations.iter().map(|r| r.hobby.id.as_str()).collect();
        assert_eq!(ids, vec!["best", "mid", "low"]);
        assert_eq!(result.recommendations[0].score, 7);
        assert_eq!(result.recommendations[2].score, 1);
    }

    #[test]
    fn test_recommend_respects_top_n() {
        let recommender = Recommender::with_defaults();
        let profile = create_profile();

        let candidates: Vec<Hobby> = (0..25)
            .map(|i| create_hobby(&i.to_string(), Difficulty::Beginner, i as f64 * 10.0, "주 1-2회"))
            .collect();

        let result = recommender.recommend(&profile, candidates);

        assert_eq!(result.recommendations.len(), DEFAULT_TOP_N);
        assert_eq!(result.total_candidates, 25);
    }

    #[test]
    fn test_recommend_empty() {
        let result = Recommender::default().recommend(&create_profile(), vec![]);
        assert!(result.recommendations.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let hobby = create_hobby("dup", Difficulty::Beginner, 50.0, "주 1-2회");
        let result = Recommender::default().recommend(&create_profile(), vec![hobby.clone(), hobby]);
        assert_eq!(result.recommendations.len(), 2);
    }

    #[test]
    fn test_similar_excludes_reference() {
        let recommender = Recommender::new(ScoringPoints::default(), 10, 2);
        let reference = create_hobby("ref", Difficulty::Beginner, 100.0, "주 1-2회");

        let candidates = vec![
            reference.clone(),
            create_hobby("same", Difficulty::Beginner, 100.0, "주 1-2회"),
            create_hobby("other", Difficulty::Advanced, 100.0, "주 1-2회"),
            create_hobby("far", Difficulty::Advanced, 0.0, "주 1-2회"),
        ];

        let similar = recommender.similar(&reference, candidates);

        assert_eq!(similar.len(), 2);
        assert!(similar.iter().all(|s| s.hobby.id != "ref"));
        assert_eq!(similar[0].hobby.id, "same");
        assert!((similar[0].score - 4.0).abs() < 1e-9);
    }
}
