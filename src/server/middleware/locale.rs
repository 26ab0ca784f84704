//! Locale middleware

use crate::auth::AuthenticatedSession;
use crate::locale::{LocaleContext, LocaleResolver};
use actix_web::HttpMessage;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{CONTENT_LANGUAGE, HeaderValue};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Establishes the [`LocaleContext`] of every request, authenticated or not
///
/// Must run inside the auth middleware so the session is already known.
pub struct LocaleMiddleware;

impl<S, B> Transform<S, ServiceRequest> for LocaleMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = LocaleMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LocaleMiddlewareService { service }))
    }
}

/// Service implementation for locale middleware
pub struct LocaleMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for LocaleMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let context = {
            let extensions = req.extensions();
            let auth = extensions.get::<AuthenticatedSession>();
            LocaleResolver::resolve_for_request(
                auth.and_then(|a| a.session.locale.as_deref()),
                auth.and_then(|a| a.subject.stored_locale()),
            )
        };
        debug!(locale = %context.locale, source = ?context.source, "Resolved request locale");
        req.extensions_mut().insert(context);

        let fut = self.service.call(req);
        Box::pin(async move {
            let mut res = fut.await?;

            // A language change during the request replaces the context
            let locale = res
                .request()
                .extensions()
                .get::<LocaleContext>()
                .map(|c| c.locale)
                .unwrap_or_default();
            res.headers_mut()
                .insert(CONTENT_LANGUAGE, HeaderValue::from_static(locale.code()));

            Ok(res)
        })
    }
}
