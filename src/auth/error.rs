use thiserror::Error;

/// Terminal authentication failures.
///
/// Every variant maps to HTTP 401 at the web boundary. None is retryable and
/// none is fatal to the process; each is scoped to the request that produced
/// it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. Deliberately a single variant so the
    /// response cannot be used to probe which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Missing Authorization header")]
    MissingHeader,
    #[error("Malformed Authorization header, expected 'Bearer <token>'")]
    MalformedHeader,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token claims")]
    MalformedClaims,
    #[error("Token expired")]
    Expired,
}

impl AuthError {
    /// Stable machine-readable code surfaced in problem responses.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::MissingHeader => "UNAUTHORIZED_MISSING_HEADER",
            AuthError::MalformedHeader => "UNAUTHORIZED_MALFORMED_HEADER",
            AuthError::InvalidSignature => "UNAUTHORIZED_INVALID_SIGNATURE",
            AuthError::MalformedClaims => "UNAUTHORIZED_MALFORMED_CLAIMS",
            AuthError::Expired => "UNAUTHORIZED_EXPIRED_TOKEN",
        }
    }
}
