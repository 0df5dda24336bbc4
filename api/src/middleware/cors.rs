//! CORS middleware configuration
//!
//! The service is called directly from browser frontends, so CORS is
//! open by default. Set `ALLOWED_ORIGINS` (comma-separated) to
//! restrict origins in deployments that need it.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance for the current environment
pub fn create_cors() -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|raw| raw.parse::<usize>().ok())
        .unwrap_or(3600);

    let base = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(max_age);

    match env::var("ALLOWED_ORIGINS") {
        Ok(origins) if !origins.trim().is_empty() => {
            let mut cors = base;
            for origin in origins.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                cors = cors.allowed_origin(origin);
            }
            cors
        }
        _ => base.allow_any_origin(),
    }
}
