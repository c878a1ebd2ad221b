use actix_web::http::header;
use actix_web::{test, web, HttpResponse};
use serde_json::Value;
use todo_backend::{AppState, AuthUser, PathPolicy, UserRole};

use crate::common::assert_problem_details_structure;
use crate::support::app_builder::no_extra_routes;
use crate::support::auth::{amy_claims, bearer_header, now_secs, sign_payload, test_security};
use crate::support::{init_app, send, test_state};

#[actix_web::test]
async fn test_admin_example_is_forwarded() {
    let app = init_app(test_state(), no_extra_routes).await;
    let token = sign_payload(&amy_claims("ADMIN", now_secs() + 3600), &test_security());

    let req = test::TestRequest::get()
        .uri("/admin/reports")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = send(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["requestedBy"]["id"], 42);
    assert_eq!(body["requestedBy"]["role"], "ADMIN");
    assert_eq!(body["requestedBy"]["email"], "a@x.com");
    assert_eq!(body["requestedBy"]["nickname"], "amy");
}

#[actix_web::test]
async fn test_user_on_admin_path_is_forbidden() {
    let app = init_app(test_state(), no_extra_routes).await;
    let token = sign_payload(&amy_claims("USER", now_secs() + 3600), &test_security());

    let req = test::TestRequest::get()
        .uri("/admin/reports")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = send(&app, req).await;

    assert_problem_details_structure(resp, 403, "FORBIDDEN", "Access denied").await;
}

#[actix_web::test]
async fn test_encoded_admin_path_is_still_gated() {
    let app = init_app(test_state(), no_extra_routes).await;
    let sec = test_security();

    let req = test::TestRequest::get()
        .uri("/%61dmin/reports")
        .insert_header((header::AUTHORIZATION, bearer_header(3, UserRole::User, &sec)))
        .to_request();
    let resp = send(&app, req).await;

    assert_problem_details_structure(resp, 403, "FORBIDDEN", "Access denied").await;
}

#[actix_web::test]
async fn test_admin_may_use_authenticated_paths() {
    let app = init_app(test_state(), no_extra_routes).await;
    let sec = test_security();

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, bearer_header(1, UserRole::Admin, &sec)))
        .to_request();
    let resp = send(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
}

async fn ops_handler(user: AuthUser) -> HttpResponse {
    HttpResponse::Ok().body(user.principal.role.to_string())
}

fn ops_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/ops/run", web::get().to(ops_handler))
        .route(
            "/public/info",
            web::get().to(|| async { HttpResponse::Ok().finish() }),
        );
}

#[actix_web::test]
async fn test_configured_policy_is_the_only_source_of_gating() {
    let policy = PathPolicy::from_patterns(["/public/**"], ["/ops/**"]).unwrap();
    let app = init_app(AppState::new(test_security(), policy), ops_routes).await;
    let sec = test_security();

    // Admin patterns come from the policy, not the route layout
    let req = test::TestRequest::get()
        .uri("/ops/run")
        .insert_header((header::AUTHORIZATION, bearer_header(2, UserRole::User, &sec)))
        .to_request();
    assert_eq!(send(&app, req).await.status().as_u16(), 403);

    let req = test::TestRequest::get()
        .uri("/ops/run")
        .insert_header((header::AUTHORIZATION, bearer_header(2, UserRole::Admin, &sec)))
        .to_request();
    let resp = send(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(test::read_body(resp).await, "ADMIN");

    // The default exemptions no longer apply
    let req = test::TestRequest::get().uri("/health").to_request();
    assert_eq!(send(&app, req).await.status().as_u16(), 400);

    let req = test::TestRequest::get().uri("/public/info").to_request();
    assert_eq!(send(&app, req).await.status().as_u16(), 200);
}
