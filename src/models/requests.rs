use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::community::{EventPrice, MeetingSchedule, PlaceLocation};
use crate::models::domain::{CostRange, Difficulty, Location, TimeRequirement, UserPreferences};

/// Request to add a hobby to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_cost_range"))]
pub struct NewHobby {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub difficulty: Difficulty,
    pub cost: CostRange,
    #[serde(rename = "timeRequired")]
    pub time_required: TimeRequirement,
    #[serde(default)]
    pub location: Vec<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn validate_cost_range(hobby: &NewHobby) -> Result<(), ValidationError> {
    if hobby.cost.min < 0.0 || hobby.cost.min > hobby.cost.max {
        return Err(ValidationError::new("cost_range"));
    }
    Ok(())
}

/// Request to create a user profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewUserProfile {
    #[validate(length(min = 1))]
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "favoriteHobbies", default)]
    pub favorite_hobbies: Vec<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub preferences: UserPreferences,
}

/// Partial update of a user profile; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserProfilePatch {
    #[validate(length(min = 1))]
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(rename = "favoriteHobbies", skip_serializing_if = "Option::is_none")]
    pub favorite_hobbies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPost {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "authorName", default)]
    pub author_name: String,
    #[validate(length(min = 1))]
    #[serde(rename = "hobbyId")]
    pub hobby_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PostPatch {
    #[validate(length(min = 1, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Comment body; the post id comes from the route
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewComment {
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "authorName", default)]
    pub author_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewGroup {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    #[serde(rename = "hobbyId")]
    pub hobby_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "leaderId")]
    pub leader_id: String,
    #[serde(rename = "leaderName", default)]
    pub leader_name: String,
    #[validate(range(min = 1))]
    #[serde(rename = "maxMembers")]
    pub max_members: u32,
    #[serde(default)]
    pub location: PlaceLocation,
    #[serde(rename = "meetingSchedule", default)]
    pub meeting_schedule: MeetingSchedule,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinGroupRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_event_dates"))]
pub struct NewEvent {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "organizerId")]
    pub organizer_id: String,
    #[serde(rename = "organizerName", default)]
    pub organizer_name: String,
    #[serde(default)]
    pub location: PlaceLocation,
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,
    #[validate(range(min = 1))]
    #[serde(rename = "maxParticipants")]
    pub max_participants: u32,
    pub price: EventPrice,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn validate_event_dates(event: &NewEvent) -> Result<(), ValidationError> {
    if event.end_date < event.start_date {
        return Err(ValidationError::new("end_before_start"));
    }
    Ok(())
}

/// Query string for `GET /hobbies`
#[derive(Debug, Clone, Deserialize)]
pub struct ListHobbiesQuery {
    #[serde(default = "default_hobby_limit")]
    pub limit: usize,
}

fn default_hobby_limit() -> usize {
    10
}

/// Query string for `GET /posts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostsQuery {
    #[serde(rename = "hobbyId")]
    pub hobby_id: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
}

/// Query string for `GET /groups`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupsQuery {
    #[serde(rename = "hobbyId")]
    pub hobby_id: Option<String>,
}

/// Query string for `GET /events`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsQuery {
    #[serde(rename = "groupId")]
    pub group_id: Option<String>,
}

/// Query string for `GET /resources`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResourcesQuery {
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub country: String,
}
