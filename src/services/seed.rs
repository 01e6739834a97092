use serde_json::json;

use crate::models::{CostRange, Difficulty, NewHobby, TimeRequirement};
use crate::services::CatalogService;
use crate::store::{Document, StoreError};

/// Ids created by [`seed_catalog`]
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    pub category_ids: Vec<String>,
    pub hobby_ids: Vec<String>,
}

fn sample_categories() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("예술 & 창작", "그림, 음악, 공예 등", "🎨"),
        ("운동 & 스포츠", "요가, 등산, 수영 등", "🏃"),
        ("요리 & 식문화", "한식, 베이킹, 와인 등", "🍳"),
        ("게임 & 퍼즐", "보드게임, 퍼즐, 카드게임 등", "🎮"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample_hobby(
    name: &str,
    description: &str,
    difficulty: Difficulty,
    min: f64,
    max: f64,
    frequency: &str,
    duration: &str,
    location: &[&str],
    image_url: &str,
    tags: &[&str],
) -> NewHobby {
    NewHobby {
        name: name.to_string(),
        description: description.to_string(),
        category_id: String::new(),
        difficulty,
        cost: CostRange { min, max, currency: "KRW".to_string() },
        time_required: TimeRequirement {
            frequency: frequency.to_string(),
            duration: duration.to_string(),
        },
        location: location.iter().map(|s| s.to_string()).collect(),
        image_url: image_url.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample_hobbies() -> Vec<NewHobby> {
    vec![
        sample_hobby(
            "성악",
            "클래식 음악의 정수를 경험하세요",
            Difficulty::Intermediate,
            500_000.0,
            2_000_000.0,
            "주 2-3회",
            "회당 1-2시간",
            &["연습실", "공연장"],
            "https://images.unsplash.com/photo-1516280440614-37939bbacd81",
            &["음악", "클래식", "성악"],
        ),
        sample_hobby(
            "등산",
            "자연과 함께하는 건강한 취미",
            Difficulty::Beginner,
            100_000.0,
            500_000.0,
            "주 1-2회",
            "회당 3-4시간",
            &["산", "등산로"],
            "https://images.unsplash.com/photo-1551632811-561732d1e306",
            &["운동", "자연", "건강"],
        ),
        sample_hobby(
            "그림 그리기",
            "나만의 예술 세계를 표현하세요",
            Difficulty::Beginner,
            100_000.0,
            300_000.0,
            "주 1-2회",
            "회당 2-3시간",
            &["집", "화실", "공방"],
            "https://images.unsplash.com/photo-1513364776144-60967b0f800f",
            &["예술", "창작", "드로잉"],
        ),
    ]
}

/// Populate an empty catalog with sample categories and hobbies
///
/// Hobby `i` goes to category `i % categories`; each category then records
/// the ids of its hobbies.
pub async fn seed_catalog(catalog: &CatalogService) -> Result<SeedSummary, StoreError> {
    let store = catalog.store();
    let collections = catalog.collections();
    let mut summary = SeedSummary::default();

    for (name, description, icon) in sample_categories() {
        let mut doc = Document::new();
        doc.insert("name".to_string(), json!(name));
        doc.insert("description".to_string(), json!(description));
        doc.insert("icon".to_string(), json!(icon));
        doc.insert("hobbies".to_string(), json!([]));

        let id = store.create(&collections.categories, doc).await?;
        summary.category_ids.push(id);
    }

    let mut hobbies_per_category: Vec<Vec<String>> = vec![vec![]; summary.category_ids.len()];

    for (index, mut hobby) in sample_hobbies().into_iter().enumerate() {
        let slot = index % summary.category_ids.len();
        hobby.category_id = summary.category_ids[slot].clone();

        let id = catalog.create_hobby(&hobby).await?;
        hobbies_per_category[slot].push(id.clone());
        summary.hobby_ids.push(id);
    }

    for (category_id, hobby_ids) in summary.category_ids.iter().zip(hobbies_per_category) {
        let mut patch = Document::new();
        patch.insert("hobbies".to_string(), json!(hobby_ids));
        store.update(&collections.categories, category_id, patch).await?;
    }

    tracing::info!(
        "Seeded {} categories and {} hobbies",
        summary.category_ids.len(),
        summary.hobby_ids.len()
    );

    Ok(summary)
}
