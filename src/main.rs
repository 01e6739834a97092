use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use hobby_match::config::{LoggingSettings, Settings, StoreBackend};
use hobby_match::core::Recommender;
use hobby_match::models::ScoringPoints;
use hobby_match::routes::{self, AppState};
use hobby_match::services::{
    seed_catalog, CatalogService, Collections, CommunityService, RecommendationService,
};
use hobby_match::store::{AppwriteStore, DocumentStore, MemoryStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn build_store(settings: &Settings) -> std::io::Result<Arc<dyn DocumentStore>> {
    match settings.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory document store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Appwrite => {
            let appwrite = settings.appwrite.clone().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "appwrite settings are required for the appwrite backend",
                )
            })?;

            let store = AppwriteStore::new(
                appwrite.endpoint,
                appwrite.api_key,
                appwrite.project_id,
                appwrite.database_id,
                Duration::from_secs(appwrite.timeout_secs),
            )
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

            info!("Appwrite client initialized");
            Ok(Arc::new(store))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging is configured from the settings, so load errors go to stderr
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting Hobby Match service...");

    let store = build_store(&settings)?;
    let collections = Collections::from(settings.collection.clone());

    let catalog = CatalogService::new(store.clone(), collections.clone());
    let community = CommunityService::new(store, collections);

    if settings.store.seed {
        if settings.store.backend == StoreBackend::Memory {
            let summary = seed_catalog(&catalog).await.map_err(|e| {
                error!("Failed to seed catalog: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e)
            })?;
            info!("Seeded {} hobbies", summary.hobby_ids.len());
        } else {
            error!("Seeding is only supported with the memory backend, skipping");
        }
    }

    let points = ScoringPoints::from(&settings.recommendation.points);
    let recommender = Recommender::new(
        points,
        settings.recommendation.top_n,
        settings.recommendation.similar_n,
    );

    info!("Recommender initialized with points: {:?}", points);

    let app_state = AppState {
        recommendations: RecommendationService::new(catalog.clone(), recommender),
        catalog,
        community,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
