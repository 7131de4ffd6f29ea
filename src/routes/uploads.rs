use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractors::current_publisher::CurrentPublisher;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    #[serde(default)]
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Simulated image upload.
///
/// No bytes are received or stored; the handler fabricates the URL a real
/// upload would have produced. Protected, same as post creation.
async fn create_upload(
    publisher: CurrentPublisher,
    req: web::Json<UploadRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filename = req.filename.trim();
    if filename.is_empty() || filename.contains('/') {
        return Err(AppError::bad_request(
            "INVALID_FILENAME",
            "Filename must be non-empty and contain no path separators".to_string(),
        ));
    }

    let url = format!(
        "{}/{}/{}",
        app_state.uploads_base_url.trim_end_matches('/'),
        Uuid::new_v4(),
        filename
    );

    info!(publisher_id = %publisher.id, filename, "simulated upload");

    Ok(HttpResponse::Created().json(UploadResponse { url }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_upload)));
}
