use actix_web::{web, App, HttpServer};
use blog_backend::middleware::cors::cors_middleware;
use blog_backend::middleware::request_trace::RequestTrace;
use blog_backend::routes;
use blog_backend::services::generate::GenerateClient;
use blog_backend::state::app_state::AppState;
use blog_backend::state::security_config::SecurityConfig;
use blog_backend::{CredentialStore, Principal};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    blog_backend::telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let jwt = match std::env::var("BACKEND_JWT_SECRET") {
        Ok(jwt) => jwt,
        Err(_) => {
            eprintln!("❌ BACKEND_JWT_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(jwt.as_bytes());

    let publishers = CredentialStore::new([publisher_from_env()]);

    let mut app_state = AppState::new(security_config, publishers);

    if let Ok(base_url) = std::env::var("UPLOADS_BASE_URL") {
        app_state = app_state.with_uploads_base_url(base_url);
    }

    // The generative-text proxy is optional; without an endpoint the
    // /api/generate route answers 502.
    if let Ok(endpoint) = std::env::var("GENERATE_API_URL") {
        let api_key = std::env::var("GENERATE_API_KEY").ok();
        app_state = app_state.with_generate(GenerateClient::new(endpoint, api_key));
    }

    println!("🚀 Starting blog backend on http://{}:{}", host, port);

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

/// Read the static publisher principal from the environment.
///
/// The password is configured as its BLAKE3 digest (hex); the plaintext is
/// never part of the configuration surface.
fn publisher_from_env() -> Principal {
    let id = std::env::var("PUBLISHER_ID").unwrap_or_else(|_| {
        eprintln!("❌ PUBLISHER_ID must be set");
        std::process::exit(1);
    });
    let email = std::env::var("PUBLISHER_EMAIL").unwrap_or_else(|_| {
        eprintln!("❌ PUBLISHER_EMAIL must be set");
        std::process::exit(1);
    });
    let digest_hex = std::env::var("PUBLISHER_PASSWORD_DIGEST").unwrap_or_else(|_| {
        eprintln!("❌ PUBLISHER_PASSWORD_DIGEST must be set (hex BLAKE3 of the password)");
        std::process::exit(1);
    });
    let digest = blake3::Hash::from_hex(digest_hex.trim()).unwrap_or_else(|_| {
        eprintln!("❌ PUBLISHER_PASSWORD_DIGEST must be a 64-char hex BLAKE3 digest");
        std::process::exit(1);
    });

    Principal::new(id, email, digest)
}
