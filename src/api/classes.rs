//! Class session routes

use actix_web::{web, HttpResponse, Responder};

use super::{records, AppState};
use crate::core::lookup::ClassView;
use crate::models::ClassSession;

/// list classes with student and teacher names resolved
pub async fn list(state: web::Data<AppState>) -> impl Responder {
    let repos = &state.repos;
    let (classes, students, teachers) = tokio::join!(
        repos.classes.get_all(),
        repos.students.get_all(),
        repos.teachers.get_all(),
    );

    let views: Vec<ClassView> = classes
        .into_iter()
        .map(|c| ClassView::new(c, &students, &teachers))
        .collect();

    HttpResponse::Ok().json(views)
}

/// configure class routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list))
            .route(web::post().to(records::create::<ClassSession>)),
    );
    records::configure_item::<ClassSession>(cfg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::memory_state;
    use crate::models::Student;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_create_derives_weekday_and_lists_names() {
        let (_, state) = memory_state();
        state
            .repos
            .students
            .save(&[Student {
                id: 1,
                name: "김하늘".to_string(),
                ..Default::default()
            }])
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(web::scope("/classes").configure(configure)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/classes")
            .set_json(json!({
                "date": "2024-01-01",
                "dayOfWeek": "",
                "time": "16:00",
                "studentId": 1,
                "teacherId": 3,
                "instrument": "피아노",
                "duration": "60분",
                "content": "스케일 연습"
            }))
            .to_request();
        let created: ClassSession = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.id, 1);
        assert_eq!(created.day_of_week, "월");

        let req = test::TestRequest::get().uri("/classes").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed[0]["studentName"], "김하늘");
        assert_eq!(listed[0]["teacherName"], "알 수 없음");
        assert_eq!(listed[0]["duration"], "60분");
    }
}
