use crate::models::{CostRange, Hobby};

/// Points for two hobbies sharing a difficulty tier
const SAME_DIFFICULTY_POINTS: f64 = 2.0;

/// Maximum points contributed by cost range overlap
const MAX_COST_OVERLAP_POINTS: f64 = 2.0;

/// Similarity between two hobbies
///
/// score = same_difficulty * 2 + cost_overlap (0..=2) + shared_tags
pub fn calculate_similarity_score(reference: &Hobby, other: &Hobby) -> f64 {
    let difficulty = if reference.difficulty == other.difficulty {
        SAME_DIFFICULTY_POINTS
    } else {
        0.0
    };

    let shared_tags = reference
        .tags
        .iter()
        .filter(|tag| other.tags.contains(tag))
        .count() as f64;

    difficulty + calculate_cost_overlap(&reference.cost, &other.cost) + shared_tags
}

/// Share of the combined cost span covered by both ranges, scaled to 0..=2
///
/// Symmetric in its arguments. Ranges that only touch or do not meet score 0.
pub fn calculate_cost_overlap(a: &CostRange, b: &CostRange) -> f64 {
    let overlap = a.max.min(b.max) - a.min.max(b.min);
    if overlap <= 0.0 {
        return 0.0;
    }

    let total_span = a.max.max(b.max) - a.min.min(b.min);
    (overlap / total_span) * MAX_COST_OVERLAP_POINTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, TimeRequirement};

    fn cost(min: f64, max: f64) -> CostRange {
        CostRange { min, max, currency: "KRW".to_string() }
    }

    fn hobby(id: &str, difficulty: Difficulty, min: f64, max: f64, tags: &[&str]) -> Hobby {
        Hobby {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            category_id: "art".to_string(),
            difficulty,
            cost: cost(min, max),
            time_required: TimeRequirement {
                frequency: "주 1-2회".to_string(),
                duration: String::new(),
            },
            location: vec![],
            image_url: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_cost_overlap() {
        // overlap 100..200 = 100, span 0..400 = 400
        let score = calculate_cost_overlap(&cost(0.0, 200.0), &cost(100.0, 400.0));
        assert!((score - 0.5).abs() < 1e-9);

        // identical ranges cover the whole span
        let same = calculate_cost_overlap(&cost(100.0, 300.0), &cost(100.0, 300.0));
        assert!((same - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_overlap_disjoint_or_touching() {
        assert_eq!(calculate_cost_overlap(&cost(0.0, 100.0), &cost(200.0, 300.0)), 0.0);
        assert_eq!(calculate_cost_overlap(&cost(0.0, 100.0), &cost(100.0, 300.0)), 0.0);
        assert_eq!(calculate_cost_overlap(&cost(50.0, 50.0), &cost(50.0, 50.0)), 0.0);
    }

    #[test]
    fn test_cost_overlap_symmetric() {
        let pairs = [
            (cost(0.0, 200.0), cost(100.0, 400.0)),
            (cost(10.0, 20.0), cost(0.0, 100.0)),
            (cost(500_000.0, 2_000_000.0), cost(100_000.0, 500_000.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(calculate_cost_overlap(&a, &b), calculate_cost_overlap(&b, &a));
        }
    }

    #[test]
    fn test_similarity_score() {
        let a = hobby("a", Difficulty::Beginner, 0.0, 200.0, &["drawing", "art", "relax"]);
        let b = hobby("b", Difficulty::Beginner, 100.0, 400.0, &["art", "relax", "outdoor"]);
        let c = hobby("c", Difficulty::Advanced, 1000.0, 2000.0, &["Art"]);

        // 2 (difficulty) + 0.5 (cost) + 2 (tags)
        assert!((calculate_similarity_score(&a, &b) - 4.5).abs() < 1e-9);
        // tag comparison is exact
        assert_eq!(calculate_similarity_score(&a, &c), 0.0);
    }
}
