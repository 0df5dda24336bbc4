//! Mapping from domain errors to HTTP responses

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use otp_core::errors::OtpError;
use otp_shared::types::ErrorResponse;

/// Build the HTTP response for a domain error
///
/// Every expected lifecycle outcome is a `400` whose `error` field
/// carries the kind (`invalid_input`, `not_found`, `expired`,
/// `exhausted`, `invalid_code`, `consumed`) so clients can give
/// distinct UX per failure. Only system faults map above 400.
pub fn to_http_response(error: &OtpError, request_id: &str) -> HttpResponse {
    let status = match error {
        OtpError::InvalidInput { .. }
        | OtpError::NotFound
        | OtpError::Expired
        | OtpError::Exhausted
        | OtpError::InvalidCode { .. }
        | OtpError::Consumed => StatusCode::BAD_REQUEST,
        OtpError::Delivery { .. } => StatusCode::SERVICE_UNAVAILABLE,
        OtpError::RandomSource { .. } | OtpError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    // Internal details stay in the logs, not in the response body
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal server error".to_string()
    } else {
        error.to_string()
    };

    HttpResponse::build(status)
        .json(ErrorResponse::new(error.kind(), message).with_request_id(request_id))
}

/// Build a `400` for a request that failed DTO validation
pub fn validation_error_response(message: &str, request_id: &str) -> HttpResponse {
    HttpResponse::BadRequest()
        .json(ErrorResponse::new("invalid_input", message).with_request_id(request_id))
}
