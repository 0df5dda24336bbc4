//! Handler for POST /send-otp

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_core::services::otp::{OtpStore, SmsSender};
use otp_shared::types::ApiResponse;
use otp_shared::utils::phone::{is_valid_e164, mask_phone_number, normalize_phone_number};

use crate::dto::otp::{SendOtpRequest, SendOtpResponse};
use crate::handlers::error::{to_http_response, validation_error_response};

use super::AppState;

/// Issue a verification code for a phone number
///
/// # Request Body
///
/// ```json
/// { "phone": "+15551234567" }
/// ```
///
/// # Response
///
/// `200` with `{message, expires_in}` on success; the code itself
/// goes to the delivery channel and is never part of the body.
/// `400 {error, message}` for invalid input.
pub async fn send_otp<S, R>(
    state: web::Data<AppState<S, R>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    S: SmsSender + 'static,
    R: OtpStore + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    if let Err(errors) = request.0.validate() {
        log::warn!(
            "[{}] send-otp request failed validation: {}",
            request_id,
            errors
        );
        return validation_error_response("Phone number is required", &request_id);
    }

    // Store records under the normalized spelling so "+1 (555) 123-4567"
    // and "+15551234567" key the same challenge.
    let phone = normalize_phone_number(&request.phone);
    if !is_valid_e164(&phone) {
        log::warn!(
            "[{}] send-otp rejected non-E.164 phone: {}",
            request_id,
            mask_phone_number(&request.phone)
        );
        return validation_error_response(
            "Phone number must be in E.164 format (e.g. +15551234567)",
            &request_id,
        );
    }

    log::info!(
        "[{}] Issuing verification code for {}",
        request_id,
        mask_phone_number(&phone)
    );

    match state.otp_service.issue(&phone).await {
        Ok(receipt) => {
            let expires_in = (receipt.expires_at - chrono::Utc::now())
                .num_seconds()
                .max(0);

            log::info!(
                "[{}] Issued challenge {} for {}",
                request_id,
                receipt.challenge_id,
                mask_phone_number(&phone)
            );

            HttpResponse::Ok().json(
                ApiResponse::new(SendOtpResponse {
                    message: "OTP sent successfully".to_string(),
                    expires_in,
                })
                .with_request_id(request_id),
            )
        }
        Err(error) => {
            log::error!(
                "[{}] Failed to issue code for {}: {}",
                request_id,
                mask_phone_number(&phone),
                error
            );
            to_http_response(&error, &request_id)
        }
    }
}
