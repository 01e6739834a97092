use std::sync::Arc;

use serde_json::{json, Value};

use crate::models::{
    Comment, Event, Group, NewComment, NewEvent, NewGroup, NewPost, Post, PostPatch,
};
use crate::services::{stamp_created, stamp_updated, Collections, ServiceError};
use crate::store::{decode, decode_all, encode, Direction, DocumentStore, Query, StoreError};

/// Number of posts returned by a listing
const POSTS_PAGE_SIZE: usize = 20;

/// Posts, comments, groups and events
#[derive(Clone)]
pub struct CommunityService {
    store: Arc<dyn DocumentStore>,
    collections: Collections,
}

impl CommunityService {
    pub fn new(store: Arc<dyn DocumentStore>, collections: Collections) -> Self {
        Self { store, collections }
    }

    /// Latest posts, optionally narrowed to a hobby and/or category
    pub async fn list_posts(
        &self,
        hobby_id: Option<&str>,
        category_id: Option<&str>,
    ) -> Result<Vec<Post>, StoreError> {
        let mut query = Query::new()
            .order_by("createdAt", Direction::Desc)
            .limit(POSTS_PAGE_SIZE);
        if let Some(hobby_id) = hobby_id {
            query = query.where_eq("hobbyId", hobby_id);
        }
        if let Some(category_id) = category_id {
            query = query.where_eq("categoryId", category_id);
        }

        decode_all(self.store.query(&self.collections.posts, &query).await?)
    }

    pub async fn get_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
        self.store
            .get(&self.collections.posts, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Create a post with zeroed like and comment counters
    pub async fn create_post(&self, post: &NewPost) -> Result<String, StoreError> {
        let mut doc = stamp_created(encode(post)?);
        doc.insert("likes".to_string(), json!(0));
        doc.insert("comments".to_string(), json!(0));

        let id = self.store.create(&self.collections.posts, doc).await?;
        tracing::info!("Created post {} by {}", id, post.author_id);
        Ok(id)
    }

    pub async fn update_post(&self, id: &str, patch: &PostPatch) -> Result<(), ServiceError> {
        let doc = stamp_updated(encode(patch)?);
        self.store
            .update(&self.collections.posts, id, doc)
            .await
            .map_err(|e| not_found_as("Post", id, e))
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), ServiceError> {
        self.store
            .delete(&self.collections.posts, id)
            .await
            .map_err(|e| not_found_as("Post", id, e))?;

        tracing::info!("Deleted post {}", id);
        Ok(())
    }

    /// Comments on a post, newest first
    pub async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, StoreError> {
        let query = Query::new()
            .where_eq("postId", post_id)
            .order_by("createdAt", Direction::Desc);
        decode_all(self.store.query(&self.collections.comments, &query).await?)
    }

    /// Add a comment and bump the post's comment counter
    pub async fn create_comment(
        &self,
        post_id: &str,
        comment: &NewComment,
    ) -> Result<String, ServiceError> {
        let mut doc = stamp_created(encode(comment)?);
        doc.insert("postId".to_string(), Value::String(post_id.to_string()));
        doc.insert("likes".to_string(), json!(0));

        let id = self.store.create(&self.collections.comments, doc).await?;

        self.store
            .increment(&self.collections.posts, post_id, "comments", 1)
            .await
            .map_err(|e| not_found_as("Post", post_id, e))?;

        tracing::debug!("Created comment {} on post {}", id, post_id);
        Ok(id)
    }

    /// Groups, newest first, optionally for a single hobby
    pub async fn list_groups(&self, hobby_id: Option<&str>) -> Result<Vec<Group>, StoreError> {
        let mut query = Query::new().order_by("createdAt", Direction::Desc);
        if let Some(hobby_id) = hobby_id {
            query = query.where_eq("hobbyId", hobby_id);
        }
        decode_all(self.store.query(&self.collections.groups, &query).await?)
    }

    pub async fn get_group(&self, id: &str) -> Result<Option<Group>, StoreError> {
        self.store
            .get(&self.collections.groups, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// Create a group whose only member is its leader
    pub async fn create_group(&self, group: &NewGroup) -> Result<String, StoreError> {
        let mut doc = stamp_created(encode(group)?);
        doc.insert("members".to_string(), json!([group.leader_id]));

        let id = self.store.create(&self.collections.groups, doc).await?;
        tracing::info!("Created group {} led by {}", id, group.leader_id);
        Ok(id)
    }

    /// Add `user_id` to a group's members
    ///
    /// The membership check and write are two store calls; concurrent joins
    /// can both pass the capacity check.
    pub async fn join_group(&self, group_id: &str, user_id: &str) -> Result<(), ServiceError> {
        let group = self
            .get_group(group_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Group", group_id.to_string()))?;

        if group.is_member(user_id) {
            return Err(ServiceError::AlreadyMember {
                group_id: group_id.to_string(),
                user_id: user_id.to_string(),
            });
        }
        if group.is_full() {
            return Err(ServiceError::GroupFull(group_id.to_string()));
        }

        let mut members = group.members;
        members.push(user_id.to_string());

        let mut patch = crate::store::Document::new();
        patch.insert("members".to_string(), json!(members));
        self.store
            .update(&self.collections.groups, group_id, stamp_updated(patch))
            .await?;

        tracing::info!("User {} joined group {}", user_id, group_id);
        Ok(())
    }

    /// Events ordered by start date, optionally for a single group
    pub async fn list_events(&self, group_id: Option<&str>) -> Result<Vec<Event>, StoreError> {
        let mut query = Query::new().order_by("startDate", Direction::Asc);
        if let Some(group_id) = group_id {
            query = query.where_eq("groupId", group_id);
        }
        decode_all(self.store.query(&self.collections.events, &query).await?)
    }

    pub async fn get_event(&self, id: &str) -> Result<Option<Event>, StoreError> {
        self.store
            .get(&self.collections.events, id)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn create_event(&self, event: &NewEvent) -> Result<String, StoreError> {
        let mut doc = stamp_created(encode(event)?);
        doc.insert("currentParticipants".to_string(), json!(0));

        let id = self.store.create(&self.collections.events, doc).await?;
        tracing::info!("Created event {} in group {}", id, event.group_id);
        Ok(id)
    }

    /// Reserve a place in an event
    pub async fn join_event(&self, event_id: &str) -> Result<(), ServiceError> {
        let event = self
            .get_event(event_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Event", event_id.to_string()))?;

        if event.is_full() {
            return Err(ServiceError::EventFull(event_id.to_string()));
        }

        // Counter last: a failed write leaves the participant count unchanged
        self.store
            .update(
                &self.collections.events,
                event_id,
                stamp_updated(crate::store::Document::new()),
            )
            .await?;
        self.store
            .increment(&self.collections.events, event_id, "currentParticipants", 1)
            .await?;

        tracing::info!("Participant joined event {}", event_id);
        Ok(())
    }
}

fn not_found_as(kind: &'static str, id: &str, err: StoreError) -> ServiceError {
    match err {
        StoreError::NotFound(_) => ServiceError::NotFound(kind, id.to_string()),
        other => other.into(),
    }
}
