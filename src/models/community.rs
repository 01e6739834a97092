use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{Coordinates, Location};

/// Community post attached to a hobby and its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "authorName", default)]
    pub author_name: String,
    #[serde(rename = "hobbyId")]
    pub hobby_id: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "authorName", default)]
    pub author_name: String,
    #[serde(rename = "postId")]
    pub post_id: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Location of a group or event, optionally pinned to coordinates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(flatten)]
    pub area: Location,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetingSchedule {
    #[serde(default)]
    pub frequency: String,
    #[serde(rename = "dayOfWeek", default)]
    pub day_of_week: Vec<String>,
    #[serde(default)]
    pub time: String,
}

/// Hobby group with a leader and bounded membership
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "hobbyId")]
    pub hobby_id: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "leaderId")]
    pub leader_id: String,
    #[serde(rename = "leaderName", default)]
    pub leader_name: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(rename = "maxMembers")]
    pub max_members: u32,
    #[serde(default)]
    pub location: PlaceLocation,
    #[serde(rename = "meetingSchedule", default)]
    pub meeting_schedule: MeetingSchedule,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Group {
    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m == user_id)
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_members as usize
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPrice {
    pub amount: f64,
    pub currency: String,
}

/// Group event with a participant cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "groupId")]
    pub group_id: String,
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
    #[serde(rename = "maxParticipants")]
    pub max_participants: u32,
    #[serde(rename = "currentParticipants", default)]
    pub current_participants: u32,
    pub price: EventPrice,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }
}
