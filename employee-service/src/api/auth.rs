//! HTTP Basic authentication gate.
//!
//! One credential pair is accepted. The password is hashed with Argon2 when
//! [`BasicAuthCredentials`] is built and only the PHC hash is kept in memory.

use std::sync::Arc;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::{
    extract::{Request, State},
    http::{Method, header},
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::error::EmployeeServiceError;

pub struct BasicAuthCredentials {
    username: String,
    password_hash: String,
}

impl BasicAuthCredentials {
    pub fn new(username: &str, password: &str) -> Result<Self, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        Ok(Self {
            username: username.to_owned(),
            password_hash,
        })
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        let password_ok = Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok();

        password_ok && username == self.username
    }

    /// Runs [`verify`](Self::verify) on the blocking pool; Argon2 is CPU bound.
    pub async fn verify_off_runtime(
        self: &Arc<Self>,
        username: String,
        password: String,
    ) -> Result<bool, EmployeeServiceError> {
        let credentials = Arc::clone(self);

        tokio::task::spawn_blocking(move || credentials.verify(&username, &password))
            .await
            .map_err(|e| {
                tracing::error!("Basic auth verification task failed: {e}");
                EmployeeServiceError::Internal(format!("Basic auth verification failed: {e}"))
            })
    }
}

/// Decodes `Authorization: Basic <base64(user:pass)>` into its two parts.
pub fn parse_basic_header(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_owned(), password.to_owned()))
}

/// Rejects requests without valid Basic credentials.
///
/// `OPTIONS` requests pass through untouched so CORS preflights never need
/// credentials.
pub async fn require_basic_auth(
    State(credentials): State<Arc<BasicAuthCredentials>>,
    req: Request,
    next: Next,
) -> Result<Response, EmployeeServiceError> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let supplied = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_basic_header);

    match supplied {
        Some((username, password)) => {
            if credentials
                .verify_off_runtime(username.clone(), password)
                .await?
            {
                return Ok(next.run(req).await);
            }

            tracing::warn!(%username, uri = %req.uri(), "Basic auth rejected");
            Err(EmployeeServiceError::Unauthorized)
        }
        None => {
            tracing::warn!(uri = %req.uri(), "Missing Basic auth credentials");
            Err(EmployeeServiceError::Unauthorized)
        }
    }
}
