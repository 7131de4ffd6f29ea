//! Authorization gate middleware.
//!
//! Wraps protected scopes: extracts the bearer token from the Authorization
//! header, verifies it, and stores the claims in request extensions before
//! the wrapped service runs. Every failure is a terminal 401 for that
//! request; only a verified token proceeds.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::error::AuthError;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware { service }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let auth_header = req.headers().get(header::AUTHORIZATION).cloned();
        let app_state = req.app_data::<web::Data<AppState>>().cloned();

        let token = match extract_bearer(auth_header.as_ref()) {
            Ok(token) => token,
            Err(kind) => {
                return Box::pin(async move { Err(AppError::unauthorized(kind).into()) });
            }
        };

        let app_state = match app_state {
            Some(state) => state,
            None => {
                return Box::pin(async {
                    Err(AppError::internal("AppState not available".to_string()).into())
                });
            }
        };

        match verify_access_token(&token, &app_state.security) {
            Ok(claims) => {
                // Store claims in request extensions BEFORE calling the service
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(fut)
            }
            Err(kind) => Box::pin(async move { Err(AppError::unauthorized(kind).into()) }),
        }
    }
}

/// Parse `Bearer <token>` out of an Authorization header value.
///
/// Distinguishes a missing header from one that is present but not in bearer
/// shape; callers surface the distinction to the client. The shape is exact:
/// one space between scheme and token, non-empty token, no other whitespace.
pub fn extract_bearer(
    header_value: Option<&header::HeaderValue>,
) -> Result<String, AuthError> {
    let auth_value = header_value.ok_or(AuthError::MissingHeader)?;

    let auth_str = auth_value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let (scheme, token) = auth_str.split_once(' ').ok_or(AuthError::MalformedHeader)?;
    if scheme != "Bearer" || token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token.to_string())
}
