use axum::Json;

use crate::models::response::HealthResponse;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        message: "INOVIX Portal API is running".into(),
    })
}
