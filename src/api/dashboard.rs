//! Dashboard route

use actix_web::{get, web, HttpResponse, Responder};

use super::AppState;
use crate::core::dashboard;
use crate::utils::dates::today;

/// totals, this month's revenue, today's classes and the latest payments
#[get("")]
pub async fn get_dashboard(state: web::Data<AppState>) -> impl Responder {
    let data = state.repos.load_all().await;
    HttpResponse::Ok().json(dashboard::build(&data, today()))
}

/// configure dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_dashboard);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::memory_state;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_empty_dashboard() {
        let (_, state) = memory_state();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/dashboard").configure(configure)),
        )
        .await;

        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["stats"]["totalStudents"], 0);
        assert_eq!(body["stats"]["monthlyRevenue"], 0);
        assert_eq!(body["recentPayments"], Value::Array(vec![]));
    }
}
