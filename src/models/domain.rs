use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Difficulty tier of a hobby, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Cost range of a hobby
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub currency: String,
}

/// How often and how long a hobby is practised, e.g. "주 2-3회" / "회당 1-2시간"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRequirement {
    pub frequency: String,
    #[serde(default)]
    pub duration: String,
}

/// A hobby in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
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
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Grouping of hobbies; user interests reference categories by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
}

/// City-level location of a user or group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Recommendation preferences saved on a user profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub difficulty: Vec<Difficulty>,
    #[serde(rename = "maxCost", default)]
    pub max_cost: f64,
    #[serde(rename = "timeAvailability", default)]
    pub time_availability: Vec<String>,
}

/// User profile with interests and preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    /// Category ids the user is interested in
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "favoriteHobbies", default)]
    pub favorite_hobbies: Vec<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub preferences: UserPreferences,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Space,
    Equipment,
    Mentor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricePeriod {
    Hour,
    Day,
    Month,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceLocation {
    #[serde(default)]
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePrice {
    pub amount: f64,
    pub currency: String,
    pub period: PricePeriod,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub days: Vec<String>,
    #[serde(default)]
    pub hours: Vec<String>,
}

/// A space, piece of equipment or mentor related to one or more hobbies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub description: String,
    pub location: ResourceLocation,
    #[serde(default)]
    pub contact: Contact,
    pub price: ResourcePrice,
    #[serde(default)]
    pub availability: Availability,
    #[serde(rename = "relatedHobbies", default)]
    pub related_hobbies: Vec<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-factor contributions to a recommendation score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub difficulty: u32,
    pub cost: u32,
    pub time: u32,
    pub tags: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.difficulty + self.cost + self.time + self.tags
    }
}

/// Scored recommendation result, produced per request and never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationScore {
    pub hobby: Hobby,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Scored similar-hobby result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityScore {
    pub hobby: Hobby,
    pub score: f64,
}

/// Point values awarded by the recommendation scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPoints {
    pub difficulty: u32,
    pub cost_full: u32,
    pub cost_partial: u32,
    pub time: u32,
    pub tag: u32,
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            difficulty: 3,
            cost_full: 2,
            cost_partial: 1,
            time: 2,
            tag: 1,
        }
    }
}
