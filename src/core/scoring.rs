use crate::core::frequency::is_time_compatible;
use crate::models::{Hobby, ScoreBreakdown, ScoringPoints, UserProfile};

/// Score a hobby against a user profile
///
/// Scoring formula (default points):
/// score = (
///     difficulty_match * 3 +         # hobby tier is one the user accepts
///     cost_fit (2 | 1 | 0) +         # fully / partially / not affordable
///     time_compatible * 2 +          # enough free slots for the weekly minimum
///     matching_tags * 1              # tags contained in an interest string
/// )
///
/// Pure function of its inputs: identical hobby and profile always give the
/// same breakdown.
pub fn calculate_hobby_score(
    hobby: &Hobby,
    profile: &UserProfile,
    points: &ScoringPoints,
) -> ScoreBreakdown {
    let preferences = &profile.preferences;

    let difficulty = if preferences.difficulty.contains(&hobby.difficulty) {
        points.difficulty
    } else {
        0
    };

    let cost = calculate_cost_fit(hobby.cost.min, hobby.cost.max, preferences.max_cost, points);

    let time = if is_time_compatible(&preferences.time_availability, &hobby.time_required.frequency) {
        points.time
    } else {
        0
    };

    let tags = count_matching_tags(&hobby.tags, &profile.interests) * points.tag;

    ScoreBreakdown {
        difficulty,
        cost,
        time,
        tags,
    }
}

/// Full points when the whole range fits the budget, partial when only the
/// lower bound does
#[inline]
fn calculate_cost_fit(min: f64, max: f64, max_cost: f64, points: &ScoringPoints) -> u32 {
    if max <= max_cost {
        points.cost_full
    } else if min <= max_cost {
        points.cost_partial
    } else {
        0
    }
}

/// Count hobby tags appearing, case-insensitively, inside any interest string
///
/// Interests hold category ids, so this compares ids against free-text tags.
/// Kept as is: a tag only counts when an id happens to contain it.
#[inline]
pub fn count_matching_tags(tags: &[String], interests: &[String]) -> u32 {
    let interests: Vec<String> = interests.iter().map(|i| i.to_lowercase()).collect();

    tags.iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            interests.iter().any(|interest| interest.contains(&tag))
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostRange, Difficulty, TimeRequirement, UserPreferences};

    fn create_test_hobby(difficulty: Difficulty, min: f64, max: f64, frequency: &str) -> Hobby {
        Hobby {
            id: "hobby".to_string(),
            name: "등산".to_string(),
            description: String::new(),
            category_id: "outdoor".to_string(),
            difficulty,
            cost: CostRange { min, max, currency: "KRW".to_string() },
            time_required: TimeRequirement {
                frequency: frequency.to_string(),
                duration: "회당 3-4시간".to_string(),
            },
            location: vec![],
            image_url: String::new(),
            tags: vec!["Hiking".to_string(), "nature".to_string()],
            created_at: None,
            updated_at: None,
        }
    }

    fn create_test_profile(max_cost: f64, slots: usize) -> UserProfile {
        UserProfile {
            id: "user".to_string(),
            display_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            interests: vec!["outdoor-hiking".to_string()],
            favorite_hobbies: vec![],
            location: Default::default(),
            preferences: UserPreferences {
                difficulty: vec![Difficulty::Beginner],
                max_cost,
                time_availability: (0..slots).map(|i| format!("slot{}", i)).collect(),
            },
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_full_score() {
        let hobby = create_test_hobby(Difficulty::Beginner, 100.0, 500.0, "주 1-2회");
        let profile = create_test_profile(500.0, 1);

        let breakdown = calculate_hobby_score(&hobby, &profile, &ScoringPoints::default());

        assert_eq!(breakdown.difficulty, 3);
        assert_eq!(breakdown.cost, 2);
        assert_eq!(breakdown.time, 2);
        assert_eq!(breakdown.tags, 1); // "hiking" is inside "outdoor-hiking"
        assert_eq!(breakdown.total(), 8);
    }

    #[test]
    fn test_cost_fit() {
        let points = ScoringPoints::default();
        assert_eq!(calculate_cost_fit(100.0, 500.0, 500.0, &points), 2);
        assert_eq!(calculate_cost_fit(100.0, 500.0, 300.0, &points), 1);
        assert_eq!(calculate_cost_fit(100.0, 500.0, 100.0, &points), 1);
        assert_eq!(calculate_cost_fit(100.0, 500.0, 99.0, &points), 0);
    }

    #[test]
    fn test_difficulty_mismatch() {
        let hobby = create_test_hobby(Difficulty::Advanced, 0.0, 0.0, "주 1-2회");
        let profile = create_test_profile(0.0, 0);

        let breakdown = calculate_hobby_score(&hobby, &profile, &ScoringPoints::default());
        assert_eq!(breakdown.difficulty, 0);
    }

    #[test]
    fn test_time_requires_enough_slots() {
        let hobby = create_test_hobby(Difficulty::Beginner, 0.0, 0.0, "주 3-4회");
        let points = ScoringPoints::default();

        assert_eq!(calculate_hobby_score(&hobby, &create_test_profile(0.0, 2), &points).time, 0);
        assert_eq!(calculate_hobby_score(&hobby, &create_test_profile(0.0, 3), &points).time, 2);
    }

    #[test]
    fn test_tag_matching_is_case_insensitive_substring() {
        let tags = vec!["ART".to_string(), "music".to_string(), "x".to_string()];
        let interests = vec!["cat-art".to_string(), "Music-Lovers".to_string()];

        assert_eq!(count_matching_tags(&tags, &interests), 2);
        assert_eq!(count_matching_tags(&tags, &[]), 0);
    }

    #[test]
    fn test_custom_points() {
        let hobby = create_test_hobby(Difficulty::Beginner, 100.0, 500.0, "주 1-2회");
        let profile = create_test_profile(500.0, 1);
        let points = ScoringPoints { difficulty: 10, cost_full: 0, cost_partial: 0, time: 0, tag: 0 };

        assert_eq!(calculate_hobby_score(&hobby, &profile, &points).total(), 10);
    }
}
