use actix_web::web;

use crate::middleware::auth_gate::AuthGate;

pub mod auth;
pub mod generate;
pub mod health;
pub mod posts;
pub mod uploads;

/// Configure application routes.
///
/// Fully-protected scopes are wrapped with the `AuthGate` middleware. The
/// posts resource mixes a public GET with a protected POST, so protection
/// there runs through the `CurrentPublisher` extractor instead, which
/// enforces the same gate.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Posts: GET public, POST protected via extractor
    cfg.service(web::scope("/api/posts").configure(posts::configure_routes));

    // Simulated uploads: /api/uploads (protected)
    cfg.service(
        web::scope("/api/uploads")
            .wrap(AuthGate)
            .configure(uploads::configure_routes),
    );

    // Generative-text proxy: /api/generate (protected)
    cfg.service(
        web::scope("/api/generate")
            .wrap(AuthGate)
            .configure(generate::configure_routes),
    );
}
