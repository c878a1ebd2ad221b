use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};

use crate::middleware::{cors_middleware, AuthGate, RequestTrace};
use crate::routes;
use crate::state::app_state::AppState;

/// The full application: routes behind CORS → RequestTrace → AuthGate.
///
/// `main` and the integration tests both build the service through here so
/// that they exercise the same middleware order.
pub fn build_app(
    state: web::Data<AppState>,
    cors_allowed_origins: &[String],
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(AuthGate)
        .wrap(RequestTrace)
        .wrap(cors_middleware(cors_allowed_origins))
        .configure(routes::configure)
        .default_service(web::to(routes::not_found))
}
