use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CreatedResponse, ListHobbiesQuery, NewHobby, NewUserProfile, RecommendationsResponse,
    ResourcesQuery, SimilarHobbiesResponse, UserProfile, UserProfilePatch,
};
use crate::routes::{not_found, service_failed, store_failed, validation_failed, AppState};

/// Upper bound on `GET /hobbies?limit=`
const MAX_HOBBY_LIMIT: usize = 100;

/// Configure catalog, profile and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/hobbies", web::get().to(list_hobbies))
        .route("/hobbies", web::post().to(create_hobby))
        .route("/hobbies/{id}", web::get().to(get_hobby))
        .route("/hobbies/{id}/similar", web::get().to(similar_hobbies))
        .route("/hobbies/{id}/resources", web::get().to(hobby_resources))
        .route("/categories", web::get().to(list_categories))
        .route("/categories/{id}", web::get().to(get_category))
        .route("/categories/{id}/hobbies", web::get().to(category_hobbies))
        .route("/resources", web::get().to(resources_by_location))
        .route("/users/{id}", web::get().to(get_user))
        .route("/users/{id}", web::post().to(create_user))
        .route("/users/{id}", web::patch().to(update_user))
        .route("/users/{id}/recommendations", web::get().to(user_recommendations))
        .route("/recommendations", web::post().to(recommend_for_profile));
}

async fn list_hobbies(
    state: web::Data<AppState>,
    query: web::Query<ListHobbiesQuery>,
) -> impl Responder {
    let limit = query.limit.min(MAX_HOBBY_LIMIT);

    match state.catalog.list_hobbies(limit).await {
        Ok(hobbies) => HttpResponse::Ok().json(hobbies),
        Err(e) => store_failed("list hobbies", e),
    }
}

async fn create_hobby(state: web::Data<AppState>, req: web::Json<NewHobby>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.catalog.create_hobby(&req).await {
        Ok(id) => HttpResponse::Created().json(CreatedResponse { success: true, id }),
        Err(e) => store_failed("create hobby", e),
    }
}

async fn get_hobby(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get_hobby(&id).await {
        Ok(Some(hobby)) => HttpResponse::Ok().json(hobby),
        Ok(None) => not_found("Hobby", &id),
        Err(e) => store_failed("fetch hobby", e),
    }
}

/// Similar hobbies endpoint
///
/// GET /api/v1/hobbies/{id}/similar
///
/// Returns up to five hobbies from the same category, most similar first.
async fn similar_hobbies(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.recommendations.similar_to(&id).await {
        Ok(similar) => HttpResponse::Ok().json(SimilarHobbiesResponse { hobby_id: id, similar }),
        Err(e) => service_failed("find similar hobbies", e),
    }
}

async fn hobby_resources(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.catalog.resources_by_hobby(&path).await {
        Ok(resources) => HttpResponse::Ok().json(resources),
        Err(e) => store_failed("fetch resources", e),
    }
}

async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.list_categories().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => store_failed("list categories", e),
    }
}

async fn get_category(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get_category(&id).await {
        Ok(Some(category)) => HttpResponse::Ok().json(category),
        Ok(None) => not_found("Category", &id),
        Err(e) => store_failed("fetch category", e),
    }
}

async fn category_hobbies(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.catalog.hobbies_by_category(&path).await {
        Ok(hobbies) => HttpResponse::Ok().json(hobbies),
        Err(e) => store_failed("fetch category hobbies", e),
    }
}

async fn resources_by_location(
    state: web::Data<AppState>,
    query: web::Query<ResourcesQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    match state
        .catalog
        .resources_by_location(&query.city, &query.state, &query.country)
        .await
    {
        Ok(resources) => HttpResponse::Ok().json(resources),
        Err(e) => store_failed("fetch resources", e),
    }
}

async fn get_user(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get_user_profile(&id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => not_found("User profile", &id),
        Err(e) => store_failed("fetch user profile", e),
    }
}

async fn create_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<NewUserProfile>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let id = path.into_inner();
    match state.catalog.create_user_profile(&id, &req).await {
        Ok(()) => HttpResponse::Created().json(CreatedResponse { success: true, id }),
        Err(e) => service_failed("create user profile", e),
    }
}

async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UserProfilePatch>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let id = path.into_inner();
    match state.catalog.update_user_profile(&id, &req).await {
        Ok(()) => HttpResponse::Ok().json(CreatedResponse { success: true, id }),
        Err(e) => service_failed("update user profile", e),
    }
}

/// Recommendations for a stored user
///
/// GET /api/v1/users/{id}/recommendations
async fn user_recommendations(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();

    tracing::info!("Finding recommendations for user: {}", user_id);

    match state.recommendations.recommend_for_user(&user_id).await {
        Ok(result) => {
            tracing::info!(
                "Returning {} recommendations for user {} (from {} candidates)",
                result.recommendations.len(),
                user_id,
                result.total_candidates
            );
            HttpResponse::Ok().json(RecommendationsResponse {
                user_id,
                recommendations: result.recommendations,
                total_candidates: result.total_candidates,
            })
        }
        Err(e) => service_failed("compute recommendations", e),
    }
}

/// Recommendations for a profile sent in the request body
///
/// POST /api/v1/recommendations
async fn recommend_for_profile(
    state: web::Data<AppState>,
    req: web::Json<UserProfile>,
) -> impl Responder {
    let profile = req.into_inner();

    match state.recommendations.recommend(&profile).await {
        Ok(result) => HttpResponse::Ok().json(RecommendationsResponse {
            user_id: profile.id,
            recommendations: result.recommendations,
            total_candidates: result.total_candidates,
        }),
        Err(e) => store_failed("compute recommendations", e),
    }
}
