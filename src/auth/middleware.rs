use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::HeaderValue,
    web, Error, ResponseError,
};
use futures::future::LocalBoxFuture;
use secrecy::{ExposeSecret, SecretString};

use crate::{app_state::AppState, errors::AppError};

pub const INTERNAL_SECRET_HEADER: &str = "x-internal-secret";

/// Rejects requests whose `x-internal-secret` header does not match the
/// configured shared secret. The wrapped handler is never invoked for them.
pub struct InternalSecretAuth;

impl<S, B> Transform<S, ServiceRequest> for InternalSecretAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = InternalSecretAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(InternalSecretAuthService {
            service: Rc::new(service),
        }))
    }
}

pub struct InternalSecretAuthService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for InternalSecretAuthService<S>
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
            let authorized = req
                .app_data::<web::Data<AppState>>()
                .is_some_and(|state| {
                    secret_matches(
                        req.headers().get(INTERNAL_SECRET_HEADER),
                        &state.config.internal_secret,
                    )
                });

            if !authorized {
                log::warn!(
                    "Rejected {} {}: missing or invalid internal secret",
                    req.method(),
                    req.path()
                );
                let response =
                    AppError::Unauthorized("invalid internal secret".to_string()).error_response();
                return Ok(req.into_response(response).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

pub fn secret_matches(provided: Option<&HeaderValue>, expected: &SecretString) -> bool {
    provided
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected.expose_secret())
}
