//! Health, info, and metrics endpoints. None of these touch the store.

use std::path::Path;
use std::time::Duration;

use axum::extract::State;
use axum::response::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};
use sysinfo::{Disks, System};

use crate::routes::AppState;

/// Liveness probe. Always 200 while the process is up, regardless of the
/// store's state.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "service": "backend",
    }))
}

/// API information. `database` only reflects whether a connection string is
/// configured, not whether the store is reachable.
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": "CI/CD Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs",
        "health": "/health",
        "database": state.config.database_url.is_some(),
    }))
}

pub async fn hello() -> Json<Value> {
    Json(json!({
        "message": "Hello from Raspberry Pi CI/CD Platform - Automated Deployment!",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

#[derive(Debug, Serialize)]
pub struct SystemInfoJson {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    pub hostname: String,
    pub environment: String,
}

/// Host resource utilization. The CPU figure is measured over a one second
/// interval, so this handler deliberately takes about that long to respond.
pub async fn system_info(State(state): State<AppState>) -> Json<SystemInfoJson> {
    crate::metrics::api_request("info");

    let mut sys = System::new();
    sys.refresh_cpu_usage();
    tokio::time::sleep(Duration::from_secs(1)).await;
    sys.refresh_cpu_usage();
    sys.refresh_memory();

    let total_memory = sys.total_memory() as f64;
    let memory_percent = if total_memory > 0.0 {
        sys.used_memory() as f64 / total_memory * 100.0
    } else {
        0.0
    };

    Json(SystemInfoJson {
        cpu_percent: round2(sys.global_cpu_usage() as f64),
        memory_percent: round2(memory_percent),
        disk_percent: round2(root_disk_percent()),
        hostname: state.config.hostname.clone(),
        environment: state.config.app_env.clone(),
    })
}

/// Prometheus scrape endpoint.
pub async fn metrics_export(State(state): State<AppState>) -> String {
    state.metrics.render()
}

/// Utilization of the filesystem mounted at `/`, falling back to the first
/// disk when no root mount is listed (containers).
fn root_disk_percent() -> f64 {
    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .find(|d| d.mount_point() == Path::new("/"))
        .or_else(|| disks.list().first());

    match disk {
        Some(d) if d.total_space() > 0 => {
            let total = d.total_space() as f64;
            (total - d.available_space() as f64) / total * 100.0
        }
        _ => 0.0,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
