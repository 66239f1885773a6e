//! Generic create / list / update / delete routes for an entity list

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::info;

use super::{store_error_response, AppState};
use crate::models::Entity;
use crate::storage::Collection;

#[derive(Debug, Deserialize)]
pub struct RecordPath {
    pub id: i64,
}

/// Configure list + item routes for `T`
pub fn configure<T: Collection + Entity>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list::<T>))
            .route(web::post().to(create::<T>)),
    );
    configure_item::<T>(cfg);
}

/// Configure the `/{id}` update and delete routes for `T`
pub fn configure_item<T: Collection + Entity>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{id}")
            .route(web::put().to(update::<T>))
            .route(web::delete().to(delete::<T>)),
    );
}

/// list every record; an unreadable document lists as empty
pub async fn list<T: Collection>(state: web::Data<AppState>) -> impl Responder {
    let records = T::repository(&state.repos).get_all().await;
    HttpResponse::Ok().json(records)
}

/// add a record; the id is assigned on write
pub async fn create<T: Collection + Entity>(
    state: web::Data<AppState>,
    body: web::Json<T>,
) -> HttpResponse {
    let mut record = body.into_inner();
    record.normalize();
    if let Some(resp) = reject_invalid(&record) {
        return resp;
    }

    match T::repository(&state.repos).create(record).await {
        Ok(saved) => {
            info!("Created {} {}", T::LABEL, saved.id());
            HttpResponse::Created().json(saved)
        }
        Err(e) => store_error_response(&e),
    }
}

/// replace the record at `/{id}`
pub async fn update<T: Collection + Entity>(
    state: web::Data<AppState>,
    path: web::Path<RecordPath>,
    body: web::Json<T>,
) -> HttpResponse {
    let mut record = body.into_inner();
    record.set_id(path.id);
    record.normalize();
    if let Some(resp) = reject_invalid(&record) {
        return resp;
    }

    match T::repository(&state.repos).update(record).await {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(e) => store_error_response(&e),
    }
}

/// remove the record at `/{id}`
pub async fn delete<T: Collection>(
    state: web::Data<AppState>,
    path: web::Path<RecordPath>,
) -> HttpResponse {
    match T::repository(&state.repos).delete(path.id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "msg": format!("Deleted {} {}", T::LABEL, path.id)
        })),
        Err(e) => store_error_response(&e),
    }
}

fn reject_invalid<T: Entity>(record: &T) -> Option<HttpResponse> {
    let invalid = record.invalid_fields();
    if invalid.is_empty() {
        return None;
    }
    Some(HttpResponse::BadRequest().json(serde_json::json!({
        "msg": "Required fields are missing or invalid",
        "invalid": invalid,
    })))
}
