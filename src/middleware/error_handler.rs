use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::JsonPayloadError,
    Error, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;

use crate::core::AppError;
use crate::middleware::request_id::RequestIdValue;

/// Logs every error response leaving the service
pub struct ErrorHandler;

impl<S, B> Transform<S, ServiceRequest> for ErrorHandler
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct ErrorHandlerMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let result = service.call(req).await;

            match &result {
                Ok(res) => {
                    if let Some(err) = res.response().error() {
                        let request_id = RequestIdValue::of(res.request());
                        log_error(res.status().as_u16(), err, request_id.as_deref());
                    }
                }
                Err(err) => tracing::error!("Request error: {:?}", err),
            }

            result
        })
    }
}

/// Client mistakes log at warn, server faults at error
pub fn log_error(status: u16, err: &Error, request_id: Option<&str>) {
    let request_id = request_id.unwrap_or("-");
    if status >= 500 {
        tracing::error!(request_id, status, error = %err, "Request failed");
    } else {
        tracing::warn!(request_id, status, error = %err, "Request rejected");
    }
}

/// Renders malformed JSON bodies in the standard error envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let app_error = match err {
        JsonPayloadError::Deserialize(source) => AppError::Json(source),
        other => AppError::validation(other.to_string()),
    };
    app_error.into()
}
