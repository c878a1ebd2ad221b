use actix_web::http::header;
use actix_web::test;
use serde_json::{json, Value};
use todo_backend::UserRole;

use crate::support::app_builder::no_extra_routes;
use crate::support::auth::{amy_claims, bearer_header, now_secs, sign_payload, test_security};
use crate::support::{init_app, send, test_state};

#[actix_web::test]
async fn test_principal_equals_claims() {
    let app = init_app(test_state(), no_extra_routes).await;
    let token = sign_payload(&amy_claims("ADMIN", now_secs() + 3600), &test_security());

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = send(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.headers().contains_key("x-trace-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"id": 42, "email": "a@x.com", "nickname": "amy", "role": "ADMIN"})
    );
}

#[actix_web::test]
async fn test_authority_set_derived_from_role() {
    let app = init_app(test_state(), no_extra_routes).await;
    let sec = test_security();

    for (role, authority) in [(UserRole::User, "ROLE_USER"), (UserRole::Admin, "ROLE_ADMIN")] {
        let req = test::TestRequest::get()
            .uri("/me/authorities")
            .insert_header((header::AUTHORIZATION, bearer_header(11, role, &sec)))
            .to_request();
        let resp = send(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"userId": 11, "authorities": [authority]}));
    }
}

#[actix_web::test]
async fn test_token_with_issued_at_is_accepted() {
    let app = init_app(test_state(), no_extra_routes).await;
    let now = now_secs();
    let mut claims = amy_claims("USER", now + 60);
    claims["iat"] = now.into();
    let token = sign_payload(&claims, &test_security());

    let req = test::TestRequest::get()
        .uri("/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = send(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
}
