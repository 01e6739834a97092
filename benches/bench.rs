// Criterion benchmarks for Hobby Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hobby_match::core::{calculate_hobby_score, parse_weekly_frequency, Recommender};
use hobby_match::models::{
    CostRange, Difficulty, Hobby, ScoringPoints, TimeRequirement, UserPreferences, UserProfile,
};
use hobby_match::services::{CatalogService, Collections, RecommendationService};
use hobby_match::store::{encode, DocumentStore, MemoryStore};
use std::sync::Arc;

const FREQUENCIES: [&str; 4] = ["주 1-2회", "주 2-3회", "주 3-5회", "월 2회"];

fn create_hobby(id: usize) -> Hobby {
    let difficulty = match id % 3 {
        0 => Difficulty::Beginner,
        1 => Difficulty::Intermediate,
        _ => Difficulty::Advanced,
    };
    let min = (id % 20) as f64 * 25_000.0;

    Hobby {
        id: format!("hobby-{}", id),
        name: format!("Hobby {}", id),
        description: String::new(),
        category_id: format!("category-{}", id % 4),
        difficulty,
        cost: CostRange {
            min,
            max: min + 200_000.0,
            currency: "KRW".to_string(),
        },
        time_required: TimeRequirement {
            frequency: FREQUENCIES[id % FREQUENCIES.len()].to_string(),
            duration: "회당 1-2시간".to_string(),
        },
        location: vec![],
        image_url: String::new(),
        tags: vec!["art".to_string(), format!("tag-{}", id % 7)],
        created_at: None,
        updated_at: None,
    }
}

fn create_profile() -> UserProfile {
    UserProfile {
        id: "current_user".to_string(),
        display_name: "Current User".to_string(),
        email: "user@example.com".to_string(),
        interests: (0..4).map(|i| format!("category-{}", i)).collect(),
        favorite_hobbies: vec![],
        location: Default::default(),
        preferences: UserPreferences {
            difficulty: vec![Difficulty::Beginner, Difficulty::Intermediate],
            max_cost: 300_000.0,
            time_availability: vec!["sat".to_string(), "sun".to_string()],
        },
        created_at: None,
        updated_at: None,
    }
}

fn bench_parse_frequency(c: &mut Criterion) {
    c.bench_function("parse_weekly_frequency", |b| {
        b.iter(|| parse_weekly_frequency(black_box("주 2-3회")));
    });
}

fn bench_hobby_score(c: &mut Criterion) {
    let hobby = create_hobby(1);
    let profile = create_profile();
    let points = ScoringPoints::default();

    c.bench_function("calculate_hobby_score", |b| {
        b.iter(|| calculate_hobby_score(black_box(&hobby), black_box(&profile), &points));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::with_defaults();
    let profile = create_profile();

    let mut group = c.benchmark_group("recommend");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Hobby> = (0..*candidate_count).map(create_hobby).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| recommender.recommend(black_box(&profile), black_box(candidates.clone())));
            },
        );
    }

    group.finish();
}

fn bench_recommend_from_store(c: &mut Criterion) {
    let store = Arc::new(MemoryStore::new());
    let catalog = CatalogService::new(store.clone(), Collections::default());
    let service = RecommendationService::new(catalog, Recommender::with_defaults());
    let profile = create_profile();

    tokio_test::block_on(async {
        for i in 0..200 {
            let doc = encode(&create_hobby(i)).expect("encode hobby");
            store.create("hobbies", doc).await.expect("insert hobby");
        }
    });

    c.bench_function("recommend_from_memory_store_200", |b| {
        b.iter(|| tokio_test::block_on(service.recommend(black_box(&profile))));
    });
}

criterion_group!(
    benches,
    bench_parse_frequency,
    bench_hobby_score,
    bench_recommend,
    bench_recommend_from_store
);

criterion_main!(benches);
