// Route exports
pub mod catalog;
pub mod community;

use actix_web::{web, HttpResponse, Responder};
use validator::ValidationErrors;

use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{CatalogService, CommunityService, RecommendationService, ServiceError};
use crate::store::StoreError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub community: CommunityService,
    pub recommendations: RecommendationService,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(catalog::configure)
            .configure(community::configure),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: {:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

pub(crate) fn not_found(kind: &str, id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: format!("{} not found", kind),
        message: format!("No {} with id {}", kind.to_lowercase(), id),
        status_code: 404,
    })
}

/// Log the raw store error and return a generic 500
pub(crate) fn store_failed(action: &str, err: StoreError) -> HttpResponse {
    tracing::error!("Failed to {}: {}", action, err);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: format!("Failed to {}", action),
        message: "The data store request failed, please try again later".to_string(),
        status_code: 500,
    })
}

pub(crate) fn service_failed(action: &str, err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound(kind, id) => not_found(kind, &id),
        ServiceError::AlreadyExists(..)
        | ServiceError::AlreadyMember { .. }
        | ServiceError::GroupFull(_)
        | ServiceError::EventFull(_) => {
            tracing::info!("Rejected {}: {}", action, err);
            HttpResponse::Conflict().json(ErrorResponse {
                error: format!("Cannot {}", action),
                message: err.to_string(),
                status_code: 409,
            })
        }
        ServiceError::Store(e) => store_failed(action, e),
    }
}
