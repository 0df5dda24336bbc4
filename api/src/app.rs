//! Application factory
//!
//! Builds the actix-web application with routes, CORS, and logging
//! middleware wired to a concrete service composition.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use otp_core::services::otp::{OtpStore, SmsSender};

use crate::middleware::cors::create_cors;
use crate::routes::otp::{send_otp, verify_otp, AppState};

/// Create and configure the application
pub fn create_app<S, R>(
    app_state: web::Data<AppState<S, R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: SmsSender + 'static,
    R: OtpStore + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(create_cors())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // OTP lifecycle endpoints
        .route("/send-otp", web::post().to(send_otp::<S, R>))
        .route("/verify-otp", web::post().to(verify_otp::<S, R>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
