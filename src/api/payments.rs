//! Payment routes

use actix_web::{web, HttpResponse, Responder};

use super::{records, AppState};
use crate::core::lookup::PaymentView;
use crate::models::Payment;

/// list payments with the paying student's name
pub async fn list(state: web::Data<AppState>) -> impl Responder {
    let repos = &state.repos;
    let (payments, students) = tokio::join!(repos.payments.get_all(), repos.students.get_all());

    let views: Vec<PaymentView> = payments
        .into_iter()
        .map(|p| PaymentView::new(p, &students))
        .collect();

    HttpResponse::Ok().json(views)
}

/// configure payment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(records::create::<Payment>)),
    );
    records::configure_item::<Payment>(cfg);
}
