use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::error::ServiceError;

pub type ApiResult<T> = Result<T, ServiceError>;

/// Every failure collapses to `400 Bad Request` carrying the message text.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match &self {
            ServiceError::Store(e) => error!(error = %e, "Store failure"),
            other => warn!(error = %other, "Request failed"),
        }
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ServiceError::Validation(rejection.body_text())
    }
}
