// Route exports
pub mod dishes;

use actix_web::{middleware, web};

pub use dishes::AppState;

/// Content-Security-Policy sent when running in development mode
pub const DEV_CONTENT_SECURITY_POLICY: &str = "default-src 'self' 'unsafe-inline' 'unsafe-eval' data: blob:; \
     connect-src *; \
     img-src 'self' data: blob:; \
     style-src 'self' 'unsafe-inline';";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(dishes::configure);
}

/// JSON extractor config that turns payload errors into 400 responses
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(crate::error::handle_json_payload_error)
}

/// Development-only security headers
pub fn security_headers(development: bool) -> middleware::Condition<middleware::DefaultHeaders> {
    middleware::Condition::new(
        development,
        middleware::DefaultHeaders::new().add(("Content-Security-Policy", DEV_CONTENT_SECURITY_POLICY)),
    )
}
