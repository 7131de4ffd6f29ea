//! Read-only store of publisher credentials.
//!
//! Principals are constructed once at process start from configuration and
//! never mutated; there is no registration or password-change flow.

use std::collections::HashMap;

use crate::auth::error::AuthError;

/// A registered publisher identity.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: String,
    pub email: String,
    /// BLAKE3 digest of the plaintext password. The plaintext is never held.
    password_digest: blake3::Hash,
}

impl Principal {
    pub fn new(id: impl Into<String>, email: impl Into<String>, password_digest: blake3::Hash) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            password_digest,
        }
    }

    /// Recompute the digest of `plaintext` and compare against the stored
    /// verifier. `blake3::Hash` equality is constant-time.
    pub fn verify_password(&self, plaintext: &str) -> bool {
        blake3::hash(plaintext.as_bytes()) == self.password_digest
    }
}

/// Compute the password verifier stored for a principal.
pub fn password_digest(plaintext: &str) -> blake3::Hash {
    blake3::hash(plaintext.as_bytes())
}

/// Immutable principal set, keyed by email.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    principals: HashMap<String, Principal>,
}

impl CredentialStore {
    pub fn new(principals: impl IntoIterator<Item = Principal>) -> Self {
        Self {
            principals: principals
                .into_iter()
                .map(|p| (p.email.clone(), p))
                .collect(),
        }
    }

    pub fn lookup(&self, email: &str) -> Option<&Principal> {
        self.principals.get(email)
    }

    /// Resolve a sign-in attempt to a principal.
    ///
    /// Unknown email and wrong password both collapse into
    /// `AuthError::InvalidCredentials` so the two cases are not
    /// distinguishable externally.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&Principal, AuthError> {
        match self.lookup(email) {
            Some(principal) if principal.verify_password(password) => Ok(principal),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}
