use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CreatedResponse, EventsQuery, GroupsQuery, JoinGroupRequest, NewComment, NewEvent, NewGroup,
    NewPost, PostPatch, PostsQuery,
};
use crate::routes::{not_found, service_failed, store_failed, validation_failed, AppState};

/// Configure post, comment, group and event routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/posts", web::get().to(list_posts))
        .route("/posts", web::post().to(create_post))
        .route("/posts/{id}", web::get().to(get_post))
        .route("/posts/{id}", web::patch().to(update_post))
        .route("/posts/{id}", web::delete().to(delete_post))
        .route("/posts/{id}/comments", web::get().to(list_comments))
        .route("/posts/{id}/comments", web::post().to(create_comment))
        .route("/groups", web::get().to(list_groups))
        .route("/groups", web::post().to(create_group))
        .route("/groups/{id}", web::get().to(get_group))
        .route("/groups/{id}/join", web::post().to(join_group))
        .route("/events", web::get().to(list_events))
        .route("/events", web::post().to(create_event))
        .route("/events/{id}", web::get().to(get_event))
        .route("/events/{id}/join", web::post().to(join_event));
}

async fn list_posts(state: web::Data<AppState>, query: web::Query<PostsQuery>) -> impl Responder {
    match state
        .community
        .list_posts(query.hobby_id.as_deref(), query.category_id.as_deref())
        .await
    {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => store_failed("list posts", e),
    }
}

async fn create_post(state: web::Data<AppState>, req: web::Json<NewPost>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.community.create_post(&req).await {
        Ok(id) => HttpResponse::Created().json(CreatedResponse { success: true, id }),
        Err(e) => store_failed("create post", e),
    }
}

async fn get_post(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.community.get_post(&id).await {
        Ok(Some(post)) => HttpResponse::Ok().json(post),
        Ok(None) => not_found("Post", &id),
        Err(e) => store_failed("fetch post", e),
    }
}

async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<PostPatch>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let id = path.into_inner();
    match state.community.update_post(&id, &req).await {
        Ok(()) => HttpResponse::Ok().json(CreatedResponse { success: true, id }),
        Err(e) => service_failed("update post", e),
    }
}

async fn delete_post(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.community.delete_post(&path).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => service_failed("delete post", e),
    }
}

async fn list_comments(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.community.list_comments(&path).await {
        Ok(comments) => HttpResponse::Ok().json(comments),
        Err(e) => store_failed("list comments", e),
    }
}

/// Add a comment to a post
///
/// POST /api/v1/posts/{id}/comments
///
/// Also increments the post's `comments` counter.
async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<NewComment>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.community.create_comment(&path, &req).await {
        Ok(id) => HttpResponse::Created().json(CreatedResponse { success: true, id }),
        Err(e) => service_failed("create comment", e),
    }
}

async fn list_groups(state: web::Data<AppState>, query: web::Query<GroupsQuery>) -> impl Responder {
    match state.community.list_groups(query.hobby_id.as_deref()).await {
        Ok(groups) => HttpResponse::Ok().json(groups),
        Err(e) => store_failed("list groups", e),
    }
}

async fn create_group(state: web::Data<AppState>, req: web::Json<NewGroup>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.community.create_group(&req).await {
        Ok(id) => HttpResponse::Created().json(CreatedResponse { success: true, id }),
        Err(e) => store_failed("create group", e),
    }
}

async fn get_group(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.community.get_group(&id).await {
        Ok(Some(group)) => HttpResponse::Ok().json(group),
        Ok(None) => not_found("Group", &id),
        Err(e) => store_failed("fetch group", e),
    }
}

/// Join a group
///
/// POST /api/v1/groups/{id}/join
///
/// Request body:
/// ```json
/// { "userId": "string" }
/// ```
async fn join_group(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<JoinGroupRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let id = path.into_inner();
    match state.community.join_group(&id, &req.user_id).await {
        Ok(()) => HttpResponse::Ok().json(CreatedResponse { success: true, id }),
        Err(e) => service_failed("join group", e),
    }
}

async fn list_events(state: web::Data<AppState>, query: web::Query<EventsQuery>) -> impl Responder {
    match state.community.list_events(query.group_id.as_deref()).await {
        Ok(events) => HttpResponse::Ok().json(events),
        Err(e) => store_failed("list events", e),
    }
}

async fn create_event(state: web::Data<AppState>, req: web::Json<NewEvent>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.community.create_event(&req).await {
        Ok(id) => HttpResponse::Created().json(CreatedResponse { success: true, id }),
        Err(e) => store_failed("create event", e),
    }
}

async fn get_event(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.community.get_event(&id).await {
        Ok(Some(event)) => HttpResponse::Ok().json(event),
        Ok(None) => not_found("Event", &id),
        Err(e) => store_failed("fetch event", e),
    }
}

async fn join_event(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.community.join_event(&id).await {
        Ok(()) => HttpResponse::Ok().json(CreatedResponse { success: true, id }),
        Err(e) => service_failed("join event", e),
    }
}
