use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::auth::principal::Principal;
use crate::error::AppError;
use crate::identity;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportsResponse {
    requested_by: Principal,
    reports: Vec<String>,
}

/// GET /admin/reports
///
/// Reads the caller from the task scope rather than the request, so this
/// also covers the scoped accessor end to end.
async fn reports() -> Result<HttpResponse, AppError> {
    let requested_by = identity::scoped_principal()
        .ok_or_else(|| AppError::internal("no scoped identity for admin route"))?;

    Ok(HttpResponse::Ok().json(ReportsResponse {
        requested_by,
        reports: Vec::new(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reports", web::get().to(reports));
}
