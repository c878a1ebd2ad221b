//! Authentication gate middleware.
//!
//! Runs once per request, inside `RequestTrace` so rejections carry the
//! request's trace id:
//!
//! 1. exempt paths are forwarded untouched, without an identity
//! 2. the `Authorization` header is required and must be `Bearer <token>`
//! 3. the token is verified and decoded, then turned into a [`Principal`]
//! 4. the identity is installed for this request only: in the request
//!    extensions and in a task-local scope around the downstream future
//! 5. the path's role requirement is checked
//! 6. the request is forwarded, or rejected with a Problem Details body
//!
//! Rejections are written here; no failure is passed on as an error for
//! generic handling. The installed identity is removed once the downstream
//! response is produced, and never outlives the request it belongs to.
//!
//! [`Principal`]: crate::auth::principal::Principal

use std::future::{ready, Ready};
use std::rc::Rc;
use std::time::SystemTime;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, Span};

use crate::auth::error::AuthError;
use crate::auth::gate::{authenticate, authorize, CredentialHeader};
use crate::auth::principal::Identity;
use crate::config::path_policy::Requirement;
use crate::error::AppError;
use crate::identity::with_identity;
use crate::logging::security;
use crate::state::app_state::AppState;

#[derive(Clone, Default)]
pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                return Ok(reject(req, AuthError::internal("AppState not available")));
            };

            // Decide on the routing view of the path (percent-decoded)
            let requirement = state.policy.requirement_for(req.match_info().as_str());
            if requirement == Requirement::Exempt {
                debug!(path = %req.path(), "exempt path, forwarding without identity");
                return service.call(req).await.map(ServiceResponse::map_into_left_body);
            }

            let credential = CredentialHeader::from_header(req.headers().get(header::AUTHORIZATION));
            let identity = match authenticate(credential, &state.security, SystemTime::now()) {
                Ok(identity) => Rc::new(identity),
                Err(err) => return Ok(reject(req, err)),
            };

            Span::current().record("user_id", identity.principal.id);
            req.extensions_mut().insert(Identity::clone(&identity));

            if let Err(err) = authorize(requirement, &identity) {
                req.extensions_mut().remove::<Identity>();
                return Ok(reject(req, err));
            }

            debug!(
                user_id = identity.principal.id,
                role = %identity.principal.role,
                "request authenticated"
            );

            // The router needs sole ownership of the request, so nothing here may
            // hold a clone of it while downstream runs. On error or cancellation
            // the task-local scope ends with the future and actix clears the
            // extensions when it recycles the request.
            let res = with_identity(identity, service.call(req)).await?;
            res.request().extensions_mut().remove::<Identity>();
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, err: AuthError) -> ServiceResponse<EitherBody<B>> {
    security::auth_rejected(&err, req.path());
    let response = AppError::from(err).error_response();
    req.into_response(response).map_into_right_body()
}
