use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;
use otp_core::services::otp::{OtpService, OtpServiceConfig, OtpSweeper, SweeperConfig};
use otp_infra::sms::create_sms_sender;
use otp_infra::store::MemoryOtpStore;
use otp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting OTP API Server");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(message) => {
            error!("Invalid configuration: {}", message);
            std::process::exit(1);
        }
    };

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Wire up the service composition
    let sms_sender = Arc::new(create_sms_sender(&config.sms));
    let store = Arc::new(MemoryOtpStore::new());

    let otp_service = match OtpService::new(
        sms_sender,
        Arc::clone(&store),
        OtpServiceConfig::from(&config.otp),
    ) {
        Ok(service) => Arc::new(service),
        Err(err) => {
            // A service without a working CSPRNG must not start.
            error!("Failed to initialize OTP service: {}", err);
            std::process::exit(1);
        }
    };

    // Background sweep of dead records
    let sweeper = Arc::new(OtpSweeper::new(
        Arc::clone(&store),
        SweeperConfig {
            interval_seconds: config.otp.sweep_interval_seconds,
            enabled: config.otp.sweep_enabled,
        },
    ));
    let sweeper_handle = sweeper.start_background_task();

    let app_state = web::Data::new(AppState {
        otp_service: Arc::clone(&otp_service),
    });

    let server = HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await;

    sweeper_handle.stop();

    server
}
