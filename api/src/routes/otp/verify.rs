//! Handler for POST /verify-otp

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_core::services::otp::{OtpStore, SmsSender};
use otp_shared::types::ApiResponse;
use otp_shared::utils::phone::{mask_phone_number, normalize_phone_number};

use crate::dto::otp::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::{to_http_response, validation_error_response};

use super::AppState;

/// Verify a submitted passcode
///
/// # Request Body
///
/// ```json
/// { "phone": "+15551234567", "otp": "004821" }
/// ```
///
/// # Response
///
/// `200 {message}` on success. `400 {error, message}` otherwise,
/// with `error` one of `invalid_input`, `not_found`, `expired`,
/// `exhausted`, `invalid_code`, `consumed`.
pub async fn verify_otp<S, R>(
    state: web::Data<AppState<S, R>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    S: SmsSender + 'static,
    R: OtpStore + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    if let Err(errors) = request.0.validate() {
        log::warn!(
            "[{}] verify-otp request failed validation: {}",
            request_id,
            errors
        );
        return validation_error_response(
            "Phone number and verification code are required",
            &request_id,
        );
    }

    // Normalized to match the key chosen at issuance, so any
    // equivalent spelling of the number reaches the same record.
    let phone = normalize_phone_number(&request.phone);

    match state.otp_service.verify(&phone, &request.otp).await {
        Ok(()) => {
            log::info!(
                "[{}] Verification succeeded for {}",
                request_id,
                mask_phone_number(&phone)
            );

            HttpResponse::Ok().json(
                ApiResponse::new(VerifyOtpResponse {
                    message: "OTP verified successfully".to_string(),
                })
                .with_request_id(request_id),
            )
        }
        Err(error) => {
            log::warn!(
                "[{}] Verification failed for {}: {}",
                request_id,
                mask_phone_number(&phone),
                error
            );
            to_http_response(&error, &request_id)
        }
    }
}
