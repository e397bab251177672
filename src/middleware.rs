use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};

use crate::errors::AppError;

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Without an explicit origin list every origin is allowed. With one, only
/// those origins are allowed and credentials are permitted.
pub fn cors_layer(allowed_origins: Option<&str>) -> Result<CorsLayer, AppError> {
    let Some(origins) = allowed_origins else {
        tracing::info!("CORS allowed origins: any");
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(Any)
            .max_age(Duration::from_secs(3600)));
    };

    let allowed_origins = origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|e| AppError::EnvError(format!("Invalid CORS origin '{s}': {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("CORS allowed origins: {:?}", allowed_origins);

    Ok(CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}
