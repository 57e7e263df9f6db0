use crate::kernel::Plugin;
use axum::{Extension, Json, Router, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    started_at: DateTime<Utc>,
    uptime_seconds: i64,
}

/// Liveness check; reports build version and process uptime.
pub struct HealthPlugin {
    started_at: DateTime<Utc>,
}

impl HealthPlugin {
    pub fn new() -> Self {
        Self { started_at: Utc::now() }
    }
}

impl Default for HealthPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[axum::debug_handler]
async fn health_handler(Extension(started_at): Extension<DateTime<Utc>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        started_at,
        uptime_seconds: (Utc::now() - started_at).num_seconds().max(0),
    })
}

#[async_trait::async_trait]
impl Plugin for HealthPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/", get(health_handler))
            .layer(Extension(self.started_at))
    }

    fn name(&self) -> &'static str {
        "health"
    }

    async fn on_start(&self) {
        tracing::info!("health plugin started at {}", self.started_at);
    }
}
