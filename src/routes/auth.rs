use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub subject_id: String,
    pub email: String,
}

/// Handle publisher sign-in.
///
/// Unknown email and wrong password both surface as the same
/// `INVALID_CREDENTIALS` 401; the response never reveals whether the email
/// is registered.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let principal = app_state
        .publishers
        .authenticate(&req.email, &req.password)
        .map_err(AppError::unauthorized)?;

    let token = mint_access_token(
        &principal.id,
        &principal.email,
        SystemTime::now(),
        &app_state.security,
    )?;

    info!(subject_id = %principal.id, "publisher signed in");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        subject_id: principal.id.clone(),
        email: principal.email.clone(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)));
}
