//! Authentication middleware

use crate::auth::AuthMethod;
use crate::locale::{Locale, t};
use crate::server::AppState;
use crate::server::middleware::helpers::{extract_auth_method, is_public_route};
use crate::utils::error::AdminError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, ResponseError, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, warn};

/// Auth middleware for Actix-web
///
/// Resolves the session token into an [`AuthenticatedSession`](crate::auth::AuthenticatedSession)
/// stored in request extensions, and answers 401 for protected routes without one.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let path = req.path().to_string();
            let mut authenticated = None;
            let mut lookup_error = None;

            if let Some(state) = req.app_data::<web::Data<AppState>>().cloned() {
                let cookie_name = &state.config.auth().session_cookie;
                if let AuthMethod::Session(token) = extract_auth_method(req.headers(), cookie_name)
                {
                    match state.auth.authenticate_session(&token).await {
                        Ok(found) => authenticated = found,
                        Err(e) => {
                            warn!("Session lookup failed: {}", e);
                            lookup_error = Some(e);
                        }
                    }
                }
            }

            match authenticated {
                Some(session) => {
                    debug!("Authenticated user {}", session.subject.id());
                    req.extensions_mut().insert(session);
                }
                // A failed lookup is not the same as no session
                None if !is_public_route(&path) => {
                    let response = match lookup_error {
                        Some(e) => e.error_response(),
                        None => {
                            debug!("Rejecting unauthenticated request to {}", path);
                            AdminError::auth(t(Locale::DEFAULT, "auth.unauthenticated"))
                                .error_response()
                        }
                    };
                    return Ok(req.into_response(response).map_into_right_body());
                }
                None => {}
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
