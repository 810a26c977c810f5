use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Service is running".to_string(),
        timestamp: Utc::now(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
