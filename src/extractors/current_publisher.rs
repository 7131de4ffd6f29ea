use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{verify_access_token, Claims};
use crate::error::AppError;
use crate::middleware::auth_gate::extract_bearer;
use crate::state::app_state::AppState;

/// The authenticated publisher for the current request.
///
/// Populated from claims stored in request extensions by the `AuthGate`
/// middleware. On routes not wrapped by the middleware (mixed public/private
/// resources), the extractor runs the same gate inline, so the contract is
/// identical either way: no valid bearer token, no handler.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentPublisher {
    pub id: String,
    pub email: String,
}

impl From<Claims> for CurrentPublisher {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
        }
    }
}

impl FromRequest for CurrentPublisher {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // Claims already verified by the AuthGate middleware, if present.
            let cached = req.extensions().get::<Claims>().cloned();
            if let Some(claims) = cached {
                return Ok(CurrentPublisher::from(claims));
            }

            let token = extract_bearer(req.headers().get(header::AUTHORIZATION))
                .map_err(AppError::unauthorized)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

            let claims = verify_access_token(&token, &app_state.security)
                .map_err(AppError::unauthorized)?;

            Ok(CurrentPublisher::from(claims))
        })
    }
}
