//! REST API routes

pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod payments;
pub mod records;

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::auth::CredentialStore;
use crate::models::{Student, Teacher};
use crate::storage::{Repositories, StoreError};

/// Shared state handed to every handler
pub struct AppState {
    pub repos: Repositories,
    pub credentials: Arc<dyn CredentialStore>,
    pub session_secret: String,
}

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Auth routes
        .service(web::scope("/auth").configure(auth::configure))
        // Dashboard summary
        .service(web::scope("/dashboard").configure(dashboard::configure))
        // Student routes
        .service(web::scope("/students").configure(records::configure::<Student>))
        // Teacher routes
        .service(web::scope("/teachers").configure(records::configure::<Teacher>))
        // Class routes (listing carries participant names)
        .service(web::scope("/classes").configure(classes::configure))
        // Payment routes (listing carries student names)
        .service(web::scope("/payments").configure(payments::configure));
}

/// Map a storage failure onto a response
pub(crate) fn store_error_response(err: &StoreError) -> HttpResponse {
    let body = serde_json::json!({ "msg": err.to_string() });
    match err {
        StoreError::NotFound { .. } => HttpResponse::NotFound().json(body),
        StoreError::Configuration(_) => HttpResponse::InternalServerError().json(body),
        StoreError::RemoteFetch { .. } | StoreError::RemoteWrite { .. } => {
            HttpResponse::BadGateway().json(body)
        }
    }
}
