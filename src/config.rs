use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringPoints;
use crate::services::Collections;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
    pub appwrite: Option<AppwriteSettings>,
    #[serde(default)]
    pub collection: CollectionSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Appwrite,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,
    /// Load sample categories and hobbies at startup (memory backend only)
    #[serde(default)]
    pub seed: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            seed: false,
        }
    }
}

fn default_backend() -> StoreBackend { StoreBackend::Appwrite }

#[derive(Debug, Clone, Deserialize)]
pub struct AppwriteSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    #[serde(default = "default_hobbies")]
    pub hobbies: String,
    #[serde(default = "default_categories")]
    pub categories: String,
    #[serde(default = "default_users")]
    pub users: String,
    #[serde(default = "default_resources")]
    pub resources: String,
    #[serde(default = "default_posts")]
    pub posts: String,
    #[serde(default = "default_comments")]
    pub comments: String,
    #[serde(default = "default_groups")]
    pub groups: String,
    #[serde(default = "default_events")]
    pub events: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            hobbies: default_hobbies(),
            categories: default_categories(),
            users: default_users(),
            resources: default_resources(),
            posts: default_posts(),
            comments: default_comments(),
            groups: default_groups(),
            events: default_events(),
        }
    }
}

fn default_hobbies() -> String { "hobbies".to_string() }
fn default_categories() -> String { "categories".to_string() }
fn default_users() -> String { "users".to_string() }
fn default_resources() -> String { "resources".to_string() }
fn default_posts() -> String { "posts".to_string() }
fn default_comments() -> String { "comments".to_string() }
fn default_groups() -> String { "groups".to_string() }
fn default_events() -> String { "events".to_string() }

impl From<CollectionSettings> for Collections {
    fn from(settings: CollectionSettings) -> Self {
        Self {
            hobbies: settings.hobbies,
            categories: settings.categories,
            users: settings.users,
            resources: settings.resources,
            posts: settings.posts,
            comments: settings.comments,
            groups: settings.groups,
            events: settings.events,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_similar_n")]
    pub similar_n: usize,
    #[serde(default)]
    pub points: PointsConfig,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            similar_n: default_similar_n(),
            points: PointsConfig::default(),
        }
    }
}

fn default_top_n() -> usize { crate::core::DEFAULT_TOP_N }
fn default_similar_n() -> usize { crate::core::DEFAULT_SIMILAR_N }

#[derive(Debug, Clone, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_difficulty_points")]
    pub difficulty: u32,
    #[serde(default = "default_cost_full_points")]
    pub cost_full: u32,
    #[serde(default = "default_cost_partial_points")]
    pub cost_partial: u32,
    #[serde(default = "default_time_points")]
    pub time: u32,
    #[serde(default = "default_tag_points")]
    pub tag: u32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty_points(),
            cost_full: default_cost_full_points(),
            cost_partial: default_cost_partial_points(),
            time: default_time_points(),
            tag: default_tag_points(),
        }
    }
}

fn default_difficulty_points() -> u32 { 3 }
fn default_cost_full_points() -> u32 { 2 }
fn default_cost_partial_points() -> u32 { 1 }
fn default_time_points() -> u32 { 2 }
fn default_tag_points() -> u32 { 1 }

impl From<&PointsConfig> for ScoringPoints {
    fn from(config: &PointsConfig) -> Self {
        Self {
            difficulty: config.difficulty,
            cost_full: config.cost_full,
            cost_partial: config.cost_partial,
            time: config.time,
            tag: config.tag,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    pub fn is_pretty(&self) -> bool {
        self.format.eq_ignore_ascii_case("pretty")
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HOBBY_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HOBBY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HOBBY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_conventional_env(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HOBBY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Let the conventional `APPWRITE_*` and `LOG_*` variables override their sections
fn apply_conventional_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let overrides = [
        ("APPWRITE_ENDPOINT", "appwrite.endpoint"),
        ("APPWRITE_API_KEY", "appwrite.api_key"),
        ("APPWRITE_PROJECT_ID", "appwrite.project_id"),
        ("APPWRITE_DATABASE_ID", "appwrite.database_id"),
        ("LOG_LEVEL", "logging.level"),
        ("LOG_FORMAT", "logging.format"),
    ];

    let mut builder = Config::builder().add_source(settings);
    for (var, key) in overrides {
        if let Ok(value) = env::var(var) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_points_match_scorer() {
        let points = ScoringPoints::from(&PointsConfig::default());
        assert_eq!(points, ScoringPoints::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_minimal_memory_config() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                host = "127.0.0.1"
                port = 8080

                [store]
                backend = "memory"
                seed = true

                [recommendation.points]
                tag = 5
                "#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.store.backend, StoreBackend::Memory);
        assert!(settings.store.seed);
        assert!(settings.appwrite.is_none());
        assert_eq!(settings.collection.hobbies, "hobbies");
        assert_eq!(settings.recommendation.top_n, 10);
        assert_eq!(settings.recommendation.points.tag, 5);
        assert_eq!(settings.recommendation.points.difficulty, 3);
        assert_eq!(settings.logging.level, "info");
        assert!(!settings.logging.is_pretty());
    }

    #[test]
    fn test_logging_section() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                r#"
                [server]
                host = "127.0.0.1"
                port = 8080

                [store]
                backend = "memory"

                [logging]
                level = "hobby_match=debug,actix_web=warn"
                format = "Pretty"
                "#,
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.logging.level, "hobby_match=debug,actix_web=warn");
        assert!(settings.logging.is_pretty());
    }
}
