use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::time::Duration;

use crate::services::plan_store::PlanStore;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

impl ServiceStatus {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            details: None,
        }
    }

    fn error(details: String) -> Self {
        Self {
            status: "error".to_string(),
            details: Some(details),
        }
    }
}

const PING_TIMEOUT: Duration = Duration::from_secs(3);

/*
    /api/health
*/
pub async fn health_check(store: web::Data<dyn PlanStore>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let storage = match tokio::time::timeout(PING_TIMEOUT, store.ping()).await {
        Ok(Ok(())) => ServiceStatus::ok(),
        Ok(Err(e)) => ServiceStatus::error(format!("Ping failed: {}", e)),
        Err(_) => ServiceStatus::error("Ping timed out".to_string()),
    };
    health.services.insert("storage".to_string(), storage);

    if health.services.values().any(|s| s.status != "ok") {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}
