use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::extractors::auth_user::{current_identity, AuthUser};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthoritiesResponse {
    user_id: i64,
    authorities: Vec<String>,
}

/// GET /me
async fn me(user: AuthUser) -> HttpResponse {
    HttpResponse::Ok().json(user.principal)
}

/// GET /me/authorities
async fn authorities(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&req)?;
    Ok(HttpResponse::Ok().json(AuthoritiesResponse {
        user_id: identity.principal.id,
        authorities: identity.authorities.iter().map(str::to_string).collect(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(me))
        .route("/authorities", web::get().to(authorities));
}
