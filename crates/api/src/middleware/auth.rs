//! # Admin Gate
//!
//! The dashboard has a single shared admin password. Mutating endpoints
//! require it in the `X-Admin-Password` header; it is checked against an
//! Argon2 hash held in [`ApiState`]. There are no user accounts.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use eyre::Result;
use japri_core::errors::ScheduleError;

use crate::{middleware::error_handling::AppError, ApiState};

/// Header carrying the admin password on mutating requests.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Hashes a password using the Argon2 algorithm
///
/// Returns the hash in PHC string format, with a fresh random salt.
///
/// # Example
///
/// ```rust
/// let hashed = japri_api::middleware::auth::hash_password("admin123").unwrap();
/// assert!(hashed.starts_with("$argon2"));
/// ```
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// The shared admin credential.
#[derive(Debug, Clone, Default)]
pub struct AdminCredential {
    hash: Option<String>,
}

impl AdminCredential {
    pub fn new(hash: Option<String>) -> Self {
        Self { hash }
    }

    pub fn is_configured(&self) -> bool {
        self.hash.is_some()
    }

    /// Checks `password` against the stored hash. Always false when no
    /// credential is configured or the hash cannot be parsed.
    pub fn verify(&self, password: &str) -> bool {
        let Some(hash) = &self.hash else {
            return false;
        };
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored admin password hash is unreadable: {}", e);
                false
            }
        }
    }
}

/// Extractor that admits the request only with a valid admin password.
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

#[axum::async_trait]
impl FromRequestParts<Arc<ApiState>> for AdminGuard {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<ApiState>) -> Result<Self, Self::Rejection> {
        if !state.admin.is_configured() {
            return Err(AppError(ScheduleError::Authentication(
                "Admin access is not configured".to_string(),
            )));
        }

        let password = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError(ScheduleError::Authentication(
                    "Admin password required".to_string(),
                ))
            })?;

        if state.admin.verify(password) {
            Ok(AdminGuard)
        } else {
            tracing::warn!("Rejected admin request to {}", parts.uri.path());
            Err(AppError(ScheduleError::Authentication(
                "Invalid admin password".to_string(),
            )))
        }
    }
}
