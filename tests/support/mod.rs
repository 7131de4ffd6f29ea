//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::time::{Duration, SystemTime};

use blog_backend::{
    mint_access_token, password_digest, AppState, CredentialStore, Principal, SecurityConfig,
};

pub const TEST_PUBLISHER_ID: &str = "publisher-001";
pub const TEST_EMAIL: &str = "u@x.com";
pub const TEST_PASSWORD: &str = "p";
pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// AppState with a single registered publisher and no generate endpoint.
pub fn test_state() -> AppState {
    let publishers = CredentialStore::new([Principal::new(
        TEST_PUBLISHER_ID,
        TEST_EMAIL,
        password_digest(TEST_PASSWORD),
    )]);
    AppState::new(test_security(), publishers)
}

/// A token for the test publisher, freshly issued.
pub fn valid_token() -> String {
    mint_access_token(
        TEST_PUBLISHER_ID,
        TEST_EMAIL,
        SystemTime::now(),
        &test_security(),
    )
    .expect("token should mint")
}

/// A token for the test publisher whose 24h lifetime has already elapsed.
pub fn expired_token() -> String {
    let issued = SystemTime::now() - Duration::from_secs(24 * 60 * 60 + 60);
    mint_access_token(TEST_PUBLISHER_ID, TEST_EMAIL, issued, &test_security())
        .expect("token should mint")
}

#[ctor::ctor]
fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
