//! Landing route for clients redirected after a failure.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::trace_ctx;

#[derive(Debug, Serialize)]
struct ErrorPage {
    message: &'static str,
    trace_id: String,
}

async fn error_page() -> HttpResponse {
    HttpResponse::Ok().json(ErrorPage {
        message: "An unexpected error occurred",
        trace_id: trace_ctx::trace_id(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/error", web::get().to(error_page));
}
