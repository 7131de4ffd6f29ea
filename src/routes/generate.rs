use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::current_publisher::CurrentPublisher;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub text: String,
}

/// Proxy a prompt to the configured generative-text API.
async fn generate(
    _publisher: CurrentPublisher,
    req: web::Json<GenerateRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.prompt.trim().is_empty() {
        return Err(AppError::bad_request(
            "MISSING_PROMPT",
            "Prompt cannot be empty".to_string(),
        ));
    }

    let client = app_state
        .generate
        .as_ref()
        .ok_or_else(|| AppError::upstream("generate endpoint not configured".to_string()))?;

    let text = client.complete(&req.prompt).await?;

    Ok(HttpResponse::Ok().json(GenerateResponse { text }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(generate)));
}
