use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::cart::use_cases::get_summary::GetCartSummaryUseCase;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Whether the stored cart has been loaded
    pub cart_ready: bool,
}

pub struct Api {
    summary_use_case: Arc<dyn GetCartSummaryUseCase>,
}

impl Api {
    pub fn new(summary_use_case: Arc<dyn GetCartSummaryUseCase>) -> Self {
        Self { summary_use_case }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports `healthy` as soon as the server accepts requests. `cart_ready`
    /// turns true once the stored cart has been restored.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let cart_ready = self
            .summary_use_case
            .execute()
            .await
            .map(|summary| summary.is_ready)
            .unwrap_or(false);

        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            cart_ready,
        })
    }
}
