//! authentication api routes cookie based jwt session

use actix_web::cookie::{time::Duration as CookieDuration, Cookie};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};

use super::AppState;
use crate::auth::session::{
    create_session_token, verify_session_token, SESSION_COOKIE, SESSION_MAX_AGE,
};
use crate::auth::login as check_login;

/// login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// login endpoint
#[post("/login")]
pub async fn login(state: web::Data<AppState>, body: web::Json<LoginRequest>) -> impl Responder {
    let user = match check_login(state.credentials.as_ref(), &body.username, &body.password) {
        Some(user) => user,
        None => {
            return HttpResponse::Unauthorized().json(serde_json::json!({
                "msg": "Invalid username or password"
            }))
        }
    };

    match create_session_token(&user, &state.session_secret, SESSION_MAX_AGE as u64) {
        Ok(token) => {
            info!("{} logged in as {}", user.username, user.role.as_str());
            HttpResponse::Ok()
                .cookie(build_session_cookie(&token))
                .json(user)
        }
        Err(e) => {
            error!("Failed to create session token: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "msg": "Failed to create session"
            }))
        }
    }
}

/// get logged in user empty object if not logged in
#[get("/user")]
pub async fn get_logged_in_user(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user = req
        .cookie(SESSION_COOKIE)
        .and_then(|c| verify_session_token(c.value(), &state.session_secret).ok());

    match user {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::Ok().json(serde_json::json!({})),
    }
}

/// logout
#[get("/logout")]
pub async fn logout() -> impl Responder {
    let cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .max_age(CookieDuration::seconds(0))
        .http_only(true)
        .finish();

    HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
        "msg": "Logged out"
    }))
}

fn build_session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::seconds(SESSION_MAX_AGE))
        .finish()
}

/// configure auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login)
        .service(get_logged_in_user)
        .service(logout);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::memory_state;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_login_sets_session() {
        let (_, state) = memory_state();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/auth").configure(configure)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "username": "sogon", "password": "sogonsogon" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.into_owned())
            .unwrap();
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["role"], "admin");
        assert!(body.get("password").is_none());

        let req = test::TestRequest::get()
            .uri("/auth/user")
            .cookie(cookie)
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["username"], "sogon");

        let req = test::TestRequest::get().uri("/auth/user").to_request();
        let anonymous: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(anonymous, json!({}));
    }

    #[actix_web::test]
    async fn test_bad_credentials() {
        let (_, state) = memory_state();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/auth").configure(configure)),
        )
        .await;

        for (username, password) in [("sogon", "wrong"), ("nobody", "x")] {
            let req = test::TestRequest::post()
                .uri("/auth/login")
                .set_json(json!({ "username": username, "password": password }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401);
            assert!(resp.response().cookies().next().is_none());
        }
    }
}
