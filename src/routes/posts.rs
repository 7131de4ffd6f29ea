use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::extractors::current_publisher::CurrentPublisher;
use crate::services::posts::Post;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// Create a post. The author is the authenticated publisher; the client
/// cannot choose an author id.
async fn create_post(
    publisher: CurrentPublisher,
    req: web::Json<CreatePostRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::bad_request(
            "MISSING_TITLE",
            "Post title cannot be empty".to_string(),
        ));
    }
    if req.content.trim().is_empty() {
        return Err(AppError::bad_request(
            "MISSING_CONTENT",
            "Post content cannot be empty".to_string(),
        ));
    }

    let req = req.into_inner();
    let post = app_state
        .posts
        .insert(req.title, req.content, publisher.id);

    info!(post_id = %post.id, author_id = %post.author_id, "post created");

    Ok(HttpResponse::Created().json(CreatePostResponse { post }))
}

/// List all posts in insertion order. Public.
async fn list_posts(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(PostsResponse {
        posts: app_state.posts.list(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_posts))
            .route(web::post().to(create_post)),
    );
}
