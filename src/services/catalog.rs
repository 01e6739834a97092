use std::sync::Arc;

use crate::models::{Category, Hobby, NewHobby, NewUserProfile, Resource, UserProfile, UserProfilePatch};
use crate::services::{stamp_created, stamp_updated, Collections, ServiceError};
use crate::store::{decode, decode_all, encode, Direction, DocumentStore, FilterOp, Query, StoreError};

/// Hobbies, categories, user profiles and resources
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
    collections: Collections,
}

impl CatalogService {
    pub fn new(store: Arc<dyn DocumentStore>, collections: Collections) -> Self {
        Self { store, collections }
    }

    pub async fn get_hobby(&self, id: &str) -> Result<Option<Hobby>, StoreError> {
        self.store
            .get(&self.collections.hobbies, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Newest hobbies first
    pub async fn list_hobbies(&self, limit: usize) -> Result<Vec<Hobby>, StoreError> {
        let query = Query::new()
            .order_by("createdAt", Direction::Desc)
            .limit(limit);
        decode_all(self.store.query(&self.collections.hobbies, &query).await?)
    }

    pub async fn hobbies_by_category(&self, category_id: &str) -> Result<Vec<Hobby>, StoreError> {
        let query = Query::new().where_eq("categoryId", category_id);
        let hobbies = decode_all(self.store.query(&self.collections.hobbies, &query).await?)?;

        tracing::debug!("Category {} has {} hobbies", category_id, hobbies.len());

        Ok(hobbies)
    }

    pub async fn create_hobby(&self, hobby: &NewHobby) -> Result<String, StoreError> {
        let doc = stamp_created(encode(hobby)?);
        let id = self.store.create(&self.collections.hobbies, doc).await?;

        tracing::info!("Created hobby {} ({})", id, hobby.name);

        Ok(id)
    }

    pub async fn get_category(&self, id: &str) -> Result<Option<Category>, StoreError> {
        self.store
            .get(&self.collections.categories, id)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        decode_all(
            self.store
                .query(&self.collections.categories, &Query::new())
                .await?,
        )
    }

    pub async fn get_user_profile(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError> {
        self.store
            .get(&self.collections.users, user_id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Store a profile under the user's own id
    pub async fn create_user_profile(
        &self,
        user_id: &str,
        profile: &NewUserProfile,
    ) -> Result<(), ServiceError> {
        let doc = stamp_created(encode(profile)?);
        match self.store.create_with_id(&self.collections.users, user_id, doc).await {
            Ok(()) => {
                tracing::info!("Created profile for user {}", user_id);
                Ok(())
            }
            Err(StoreError::Conflict(_)) => {
                Err(ServiceError::AlreadyExists("User profile", user_id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Merge the set fields of `patch` into the stored profile
    pub async fn update_user_profile(
        &self,
        user_id: &str,
        patch: &UserProfilePatch,
    ) -> Result<(), ServiceError> {
        let doc = stamp_updated(encode(patch)?);
        match self.store.update(&self.collections.users, user_id, doc).await {
            Ok(()) => Ok(()),
            Err(StoreError::NotFound(_)) => {
                Err(ServiceError::NotFound("User profile", user_id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn resources_by_hobby(&self, hobby_id: &str) -> Result<Vec<Resource>, StoreError> {
        let query = Query::new().filter("relatedHobbies", FilterOp::ArrayContains, hobby_id);
        decode_all(self.store.query(&self.collections.resources, &query).await?)
    }

    pub async fn resources_by_location(
        &self,
        city: &str,
        state: &str,
        country: &str,
    ) -> Result<Vec<Resource>, StoreError> {
        let query = Query::new()
            .where_eq("location.city", city)
            .where_eq("location.state", state)
            .where_eq("location.country", country);
        decode_all(self.store.query(&self.collections.resources, &query).await?)
    }

    pub(crate) fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    pub(crate) fn collections(&self) -> &Collections {
        &self.collections
    }
}
