// Model exports
pub mod community;
pub mod domain;
pub mod requests;
pub mod responses;

pub use community::{Comment, Event, EventPrice, Group, MeetingSchedule, PlaceLocation, Post};
pub use domain::{
    Availability, Category, Contact, Coordinates, CostRange, Difficulty, Hobby, Location,
    PricePeriod, RecommendationScore, Resource, ResourceLocation, ResourcePrice, ResourceType,
    ScoreBreakdown, ScoringPoints, SimilarityScore, TimeRequirement, UserPreferences, UserProfile,
};
pub use requests::{
    EventsQuery, GroupsQuery, JoinGroupRequest, ListHobbiesQuery, NewComment, NewEvent, NewGroup,
    NewHobby, NewPost, NewUserProfile, PostPatch, PostsQuery, ResourcesQuery, UserProfilePatch,
};
pub use responses::{
    CreatedResponse, ErrorResponse, HealthResponse, RecommendationsResponse,
    SimilarHobbiesResponse,
};
