use futures::future::try_join_all;

use crate::core::{RecommendationResult, Recommender};
use crate::models::{Hobby, SimilarityScore, UserProfile};
use crate::services::{CatalogService, ServiceError};
use crate::store::StoreError;

/// Collects candidate hobbies from the store and hands them to the [`Recommender`]
#[derive(Clone)]
pub struct RecommendationService {
    catalog: CatalogService,
    recommender: Recommender,
}

impl RecommendationService {
    pub fn new(catalog: CatalogService, recommender: Recommender) -> Self {
        Self {
            catalog,
            recommender,
        }
    }

    /// Fetch the hobbies of every interest category concurrently and concatenate
    /// them in interest order
    ///
    /// Overlapping categories are not de-duplicated. The first failed fetch
    /// fails the whole collection.
    pub async fn collect_candidates(&self, interests: &[String]) -> Result<Vec<Hobby>, StoreError> {
        if interests.is_empty() {
            return Ok(vec![]);
        }

        let fetches = interests
            .iter()
            .map(|category_id| self.catalog.hobbies_by_category(category_id));
        let per_category = try_join_all(fetches).await?;

        Ok(per_category.into_iter().flatten().collect())
    }

    /// Recommend hobbies for an already loaded profile
    pub async fn recommend(&self, profile: &UserProfile) -> Result<RecommendationResult, StoreError> {
        let candidates = self.collect_candidates(&profile.interests).await?;

        tracing::debug!(
            "Collected {} candidates for user {} from {} interests",
            candidates.len(),
            profile.id,
            profile.interests.len()
        );

        Ok(self.recommender.recommend(profile, candidates))
    }

    /// Load a user's profile and recommend hobbies for it
    pub async fn recommend_for_user(&self, user_id: &str) -> Result<RecommendationResult, ServiceError> {
        let profile = self
            .catalog
            .get_user_profile(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User profile", user_id.to_string()))?;

        Ok(self.recommend(&profile).await?)
    }

    /// Hobbies in the same category that resemble `hobby`
    pub async fn similar_hobbies(&self, hobby: &Hobby) -> Result<Vec<SimilarityScore>, StoreError> {
        let candidates = self.catalog.hobbies_by_category(&hobby.category_id).await?;
        Ok(self.recommender.similar(hobby, candidates))
    }

    pub async fn similar_to(&self, hobby_id: &str) -> Result<Vec<SimilarityScore>, ServiceError> {
        let hobby = self
            .catalog
            .get_hobby(hobby_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Hobby", hobby_id.to_string()))?;

        Ok(self.similar_hobbies(&hobby).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostRange, Difficulty, NewHobby, TimeRequirement};
    use crate::services::Collections;
    use crate::store::{Document, DocumentStore, MemoryStore, Query};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Store whose queries always fail
    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn get(&self, _: &str, _: &str) -> Result<Option<Document>, StoreError> {
            Err(StoreError::ApiError("down".into()))
        }
        async fn query(&self, _: &str, _: &Query) -> Result<Vec<Document>, StoreError> {
            Err(StoreError::ApiError("down".into()))
        }
        async fn create(&self, _: &str, _: Document) -> Result<String, StoreError> {
            Err(StoreError::ApiError("down".into()))
        }
        async fn create_with_id(&self, _: &str, _: &str, _: Document) -> Result<(), StoreError> {
            Err(StoreError::ApiError("down".into()))
        }
        async fn update(&self, _: &str, _: &str, _: Document) -> Result<(), StoreError> {
            Err(StoreError::ApiError("down".into()))
        }
        async fn delete(&self, _: &str, _: &str) -> Result<(), StoreError> {
            Err(StoreError::ApiError("down".into()))
        }
        async fn increment(&self, _: &str, _: &str, _: &str, _: i64) -> Result<(), StoreError> {
            Err(StoreError::ApiError("down".into()))
        }
    }

    fn service(store: Arc<dyn DocumentStore>) -> RecommendationService {
        RecommendationService::new(
            CatalogService::new(store, Collections::default()),
            Recommender::with_defaults(),
        )
    }

    #[tokio::test]
    async fn test_empty_interests_skip_store() {
        // A failing store proves no fetch is attempted
        let service = service(Arc::new(FailingStore));
        let candidates = service.collect_candidates(&[]).await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_fails_collection() {
        let service = service(Arc::new(FailingStore));
        let result = service.collect_candidates(&["art".to_string()]).await;
        assert!(matches!(result, Err(StoreError::ApiError(_))));
    }

    fn new_hobby(name: &str, category_id: &str) -> NewHobby {
        NewHobby {
            name: name.to_string(),
            description: String::new(),
            category_id: category_id.to_string(),
            difficulty: Difficulty::Beginner,
            cost: CostRange { min: 0.0, max: 10.0, currency: "KRW".to_string() },
            time_required: TimeRequirement {
                frequency: "주 1-2회".to_string(),
                duration: String::new(),
            },
            location: vec![],
            image_url: String::new(),
            tags: vec![],
        }
    }

    async fn populated_service() -> RecommendationService {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let catalog = CatalogService::new(store.clone(), Collections::default());
        for (name, category) in [("drawing", "art"), ("yoga", "sport"), ("pottery", "art")] {
            catalog.create_hobby(&new_hobby(name, category)).await.unwrap();
        }
        service(store)
    }

    #[tokio::test]
    async fn test_candidates_follow_interest_order() {
        let service = populated_service().await;

        let interests = vec!["sport".to_string(), "art".to_string(), "none".to_string()];
        let candidates = service.collect_candidates(&interests).await.unwrap();

        let names: Vec<_> = candidates.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["yoga", "drawing", "pottery"]);
    }

    #[tokio::test]
    async fn test_repeated_interests_keep_duplicates() {
        let service = populated_service().await;

        let interests = vec!["art".to_string(), "sport".to_string(), "art".to_string()];
        let candidates = service.collect_candidates(&interests).await.unwrap();

        let names: Vec<_> = candidates.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["drawing", "pottery", "yoga", "drawing", "pottery"]);
        assert_eq!(candidates[0].id, candidates[3].id);
    }

    #[tokio::test]
    async fn test_recommend_counts_duplicate_candidates() {
        let service = populated_service().await;
        let profile = UserProfile {
            id: "u1".to_string(),
            display_name: String::new(),
            email: String::new(),
            interests: vec!["art".to_string(), "art".to_string()],
            favorite_hobbies: vec![],
            location: Default::default(),
            preferences: Default::default(),
            created_at: None,
            updated_at: None,
        };

        let result = service.recommend(&profile).await.unwrap();
        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_profile() {
        let service = service(Arc::new(MemoryStore::new()));
        let result = service.recommend_for_user("ghost").await;
        assert!(matches!(result, Err(ServiceError::NotFound("User profile", _))));
    }

    #[tokio::test]
    async fn test_missing_hobby() {
        let service = service(Arc::new(MemoryStore::new()));
        let result = service.similar_to("ghost").await;
        assert!(matches!(result, Err(ServiceError::NotFound("Hobby", _))));
    }
}
