use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;

pub mod admin;
pub mod error_page;
pub mod health;
pub mod me;

/// Register every route. Path-level protection comes from the `AuthGate`
/// middleware and its policy, not from how routes are grouped here.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(error_page::configure_routes)
        .service(web::scope("/me").configure(me::configure_routes))
        .service(web::scope("/admin").configure(admin::configure_routes));
}

/// Fallback for unmatched paths, installed with `App::default_service`.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(format!("No route for {}", req.path())))
}
