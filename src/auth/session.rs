//! Session tokens
//!
//! A successful login is handed to the client as an HS256 JWT whose subject
//! carries the sanitized [`User`]. Nothing here gates routes.

use anyhow::Result;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::User;

pub const SESSION_COOKIE: &str = "academy_session";
pub const SESSION_MAX_AGE: i64 = 7 * 24 * 3600; // 7 days in seconds

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// username
    pub sub: String,
    pub user: User,
    pub exp: usize,
}

/// create a session token valid for `expires_in` seconds
pub fn create_session_token(user: &User, secret: &str, expires_in: u64) -> Result<String> {
    let expiration = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() + expires_in;

    let claims = Claims {
        sub: user.username.clone(),
        user: user.clone(),
        exp: expiration as usize,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// verify a session token and return its user
pub fn verify_session_token(token: &str, secret: &str) -> Result<User> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.sub = None;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims.user)
}
