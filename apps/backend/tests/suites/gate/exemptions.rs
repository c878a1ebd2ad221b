use actix_web::http::header;
use actix_web::{test, web, HttpMessage, HttpRequest, HttpResponse};
use serde_json::{json, Value};
use todo_backend::identity::scoped_principal;
use todo_backend::{Identity, UserRole};

use crate::support::auth::{bearer_header, mint_expired_token, test_security, unsigned_token};
use crate::support::{init_app, send, test_state};

/// Reports whether any identity is visible on an exempt route.
async fn exempt_echo(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "in_extensions": req.extensions().get::<Identity>().is_some(),
        "in_scope": scoped_principal().is_some(),
    }))
}

fn exempt_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/echo", web::get().to(exempt_echo));
}

fn header_variants() -> Vec<Option<String>> {
    let sec = test_security();
    vec![
        None,
        Some("Bear token".to_string()),
        Some("Bearer not.a.jwt".to_string()),
        Some(format!("Bearer {}", mint_expired_token(&sec))),
        Some(format!("Bearer {}", unsigned_token())),
        Some(bearer_header(1, UserRole::User, &sec)),
    ]
}

#[actix_web::test]
async fn test_health_forwards_regardless_of_credential() {
    let app = init_app(test_state(), exempt_routes).await;

    for auth in header_variants() {
        let mut req = test::TestRequest::get().uri("/health");
        if let Some(value) = &auth {
            req = req.insert_header((header::AUTHORIZATION, value.as_str()));
        }
        let resp = send(&app, req.to_request()).await;
        assert_eq!(resp.status().as_u16(), 200, "header {auth:?}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }
}

#[actix_web::test]
async fn test_error_page_is_exempt() {
    let app = init_app(test_state(), exempt_routes).await;

    let req = test::TestRequest::get()
        .uri("/error")
        .insert_header((header::AUTHORIZATION, "Bear token"))
        .to_request();
    let resp = send(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "An unexpected error occurred");
    assert_eq!(body["trace_id"], trace_id);
}

#[actix_web::test]
async fn test_exempt_route_has_no_identity_even_with_valid_token() {
    let app = init_app(test_state(), exempt_routes).await;
    let sec = test_security();

    for auth in [None, Some(bearer_header(9, UserRole::Admin, &sec))] {
        let mut req = test::TestRequest::get().uri("/auth/echo");
        if let Some(value) = &auth {
            req = req.insert_header((header::AUTHORIZATION, value.as_str()));
        }
        let resp = send(&app, req.to_request()).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"in_extensions": false, "in_scope": false}));
    }
}

#[actix_web::test]
async fn test_unrouted_exempt_path_reaches_routing() {
    let app = init_app(test_state(), exempt_routes).await;

    // Forwarded past the gate, so routing answers 404 rather than the gate 400
    let req = test::TestRequest::get().uri("/auth/signin").to_request();
    let resp = send(&app, req).await;

    crate::common::assert_problem_details_structure(
        resp,
        404,
        "NOT_FOUND",
        "No route for /auth/signin",
    )
    .await;
}
