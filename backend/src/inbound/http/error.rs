//! HTTP error payloads and mapping from domain errors.
//!
//! Keeps the domain free of transport concerns by translating
//! [`domain::Error`](crate::domain::Error) into Actix responses here.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::trace::{TraceId, TRACE_ID_HEADER};

/// Standard error envelope returned by the HTTP adapter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "ApiErrorDto", into = "ApiErrorDto")]
pub struct ApiError {
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    #[schema(example = "Something went wrong")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(alias = "trace_id")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

/// Validation failures raised when constructing an [`ApiError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorValidationError {
    EmptyMessage,
    EmptyTraceId,
}

impl std::fmt::Display for ApiErrorValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "error message must not be empty"),
            Self::EmptyTraceId => write!(f, "trace identifier must not be empty"),
        }
    }
}

impl std::error::Error for ApiErrorValidationError {}

impl ApiError {
    /// Construct an API error from a domain failure, capturing any ambient
    /// trace identifier.
    pub fn from_domain(error: Error) -> Self {
        Self {
            code: error.code(),
            message: error.message().to_owned(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: error.details().cloned(),
        }
    }

    /// Fallible constructor used by the serde conversions.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ApiErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ApiErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier propagated into the response header.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details for clients.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        ApiError::from_domain(value)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        // Internal faults keep their cause in the logs, not on the wire.
        if matches!(self.code, ErrorCode::InternalError) {
            let mut redacted = self.clone();
            redacted.message = "Internal server error".to_owned();
            redacted.details = None;
            return builder.json(redacted);
        }
        builder.json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wire-shape DTO backing the validated [`ApiError`] serde round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(alias = "trace_id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<ApiError> for ApiErrorDto {
    fn from(value: ApiError) -> Self {
        Self {
            code: value.code,
            message: value.message,
            trace_id: value.trace_id,
            details: value.details,
        }
    }
}

impl TryFrom<ApiErrorDto> for ApiError {
    type Error = ApiErrorValidationError;

    fn try_from(value: ApiErrorDto) -> Result<Self, Self::Error> {
        let ApiErrorDto {
            code,
            message,
            trace_id,
            details,
        } = value;

        let mut error = ApiError::try_new(code, message)?;
        if let Some(trace_id) = trace_id {
            if trace_id.trim().is_empty() {
                return Err(ApiErrorValidationError::EmptyTraceId);
            }
            error.trace_id = Some(trace_id);
        } else {
            error.trace_id = None;
        }
        error.details = details;
        Ok(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::json;

    #[test]
    fn from_domain_preserves_code_message_and_details() {
        let api_error = ApiError::from(
            Error::invalid_request("bad").with_details(json!({ "fieldErrors": { "title": "x" } })),
        );

        assert_eq!(api_error.code(), ErrorCode::InvalidRequest);
        assert_eq!(api_error.message(), "bad");
        assert_eq!(
            api_error.details(),
            Some(&json!({ "fieldErrors": { "title": "x" } }))
        );
    }

    #[test]
    fn envelopes_with_blank_messages_fail_to_deserialise() {
        let result: Result<ApiError, _> =
            serde_json::from_value(json!({ "code": "not_found", "message": "   " }));
        let error = result.expect_err("blank message rejected");
        assert!(error.to_string().contains("must not be empty"));
    }

    #[test]
    fn envelopes_with_blank_trace_ids_fail_to_deserialise() {
        let result: Result<ApiError, _> = serde_json::from_value(json!({
            "code": "not_found",
            "message": "missing",
            "traceId": "",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn envelopes_round_trip_through_the_wire_shape() {
        let original = ApiError::from(
            Error::invalid_request("bad").with_details(json!({ "fieldErrors": { "title": "x" } })),
        );

        let encoded = serde_json::to_value(original.clone()).expect("encodes");
        let decoded: ApiError = serde_json::from_value(encoded).expect("decodes");
        assert_eq!(decoded.code(), original.code());
        assert_eq!(decoded.message(), original.message());
        assert_eq!(decoded.details(), original.details());
    }

    #[test]
    fn status_codes_follow_the_coarse_mapping() {
        assert_eq!(
            ApiError::from(Error::invalid_request("x")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(Error::not_found("x")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(Error::internal("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_rt::test]
    async fn internal_errors_are_redacted_on_the_wire() {
        let api_error =
            ApiError::from(Error::internal("lock poisoned").with_details(json!({ "table": "x" })));

        let response = api_error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body())
            .await
            .expect("response body to bytes");
        let payload: ApiError = serde_json::from_slice(&bytes).expect("payload deserialises");
        assert_eq!(payload.message(), "Internal server error");
        assert!(payload.details().is_none());
    }

    #[actix_rt::test]
    async fn trace_id_is_included_when_scoped() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
            .parse()
            .expect("valid UUID literal");

        let api_error =
            TraceId::scope(trace_id, async move { ApiError::from(Error::not_found("x")) }).await;

        let response = api_error.error_response();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace header present");
        assert_eq!(
            header.to_str().expect("ASCII header"),
            trace_id.to_string()
        );
    }
}
