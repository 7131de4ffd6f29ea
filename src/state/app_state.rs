use crate::auth::credentials::CredentialStore;
use crate::services::generate::GenerateClient;
use crate::services::posts::PostStore;

use super::security_config::SecurityConfig;

/// Application state containing shared resources.
///
/// Built once at startup and handed to actix wrapped in `web::Data`.
/// Everything here is read-only after construction except the post store,
/// which carries its own lock.
#[derive(Debug)]
pub struct AppState {
    /// Security configuration including token signing settings
    pub security: SecurityConfig,
    /// Registered publishers (static, no registration flow)
    pub publishers: CredentialStore,
    /// In-memory post storage
    pub posts: PostStore,
    /// Generative-text proxy client (optional: routes 502 when unconfigured)
    pub generate: Option<GenerateClient>,
    /// Base URL fabricated upload links point at
    pub uploads_base_url: String,
}

impl AppState {
    pub fn new(security: SecurityConfig, publishers: CredentialStore) -> Self {
        Self {
            security,
            publishers,
            posts: PostStore::new(),
            generate: None,
            uploads_base_url: "https://uploads.example.com".to_string(),
        }
    }

    pub fn with_generate(mut self, generate: GenerateClient) -> Self {
        self.generate = Some(generate);
        self
    }

    pub fn with_uploads_base_url(mut self, uploads_base_url: impl Into<String>) -> Self {
        self.uploads_base_url = uploads_base_url.into();
        self
    }
}
