//! HTTP routes for the CI/CD backend API.

pub mod api;
pub mod system;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use diesel_async::pooled_connection::deadpool::Pool;
use diesel_async::AsyncPgConnection;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{ApiError, Result};
use crate::models::status::{ApprovalStatus, Environment};
use crate::services::{approval_service, deployment_service};

/// Upper bound on caller-supplied `limit` values.
const MAX_LIMIT: i64 = 100;

const DEFAULT_APPROVAL_LIMIT: i64 = 10;
const DEFAULT_DEPLOYMENT_LIMIT: i64 = 20;

/// Shared state for route handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<AsyncPgConnection>,
    pub config: AppConfig,
    pub metrics: PrometheusHandle,
}

/// Build the application router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health_check))
        .route("/metrics", get(system::metrics_export))
        .route("/api/v1/hello", get(system::hello))
        .route("/api/v1/info", get(system::system_info))
        .route("/api/v1/approvals", get(list_approvals_handler))
        .route("/api/v1/approvals/{id}", get(get_approval_handler))
        .route("/api/v1/deployments", get(list_deployments_handler))
        .with_state(state)
}

fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, MAX_LIMIT)
}

// ── Approval API ──

#[derive(Debug, Deserialize)]
pub struct ListApprovalsQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

async fn list_approvals_handler(
    State(state): State<AppState>,
    Query(query): Query<ListApprovalsQuery>,
) -> Result<Json<api::ApprovalListJson>> {
    crate::metrics::api_request("approvals");

    // An unrecognized status can never match a persisted row, so it short-
    // circuits to an empty listing without touching the store.
    let status = match query.status.as_deref().map(str::parse::<ApprovalStatus>) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(_)) => return Ok(Json(api::ApprovalListJson::empty())),
    };
    let limit = clamp_limit(query.limit, DEFAULT_APPROVAL_LIMIT);

    let mut conn = state
        .pool
        .get()
        .await
        .map_err(|e| ApiError::Unavailable(e.to_string()))?;

    let approvals = approval_service::list_approvals(&mut conn, status, limit).await?;
    Ok(Json(api::ApprovalListJson::from_rows(approvals)))
}

async fn get_approval_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<api::ApprovalDetailJson>> {
    crate::metrics::api_request("approval_detail");

    let mut conn = state
        .pool
        .get()
        .await
        .map_err(|e| ApiError::Unavailable(e.to_string()))?;

    let approval = approval_service::find_approval(&mut conn, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("approval request {id}")))?;

    // Child rows are optional: an approval without test data or a scan is a
    // normal state, not a failed join.
    let summary = approval_service::latest_summary_for(&mut conn, id).await?;
    let scan = approval_service::latest_scan_for(&mut conn, id).await?;

    Ok(Json(api::ApprovalDetailJson::assemble(
        approval, summary, scan,
    )))
}

// ── Deployment API ──

#[derive(Debug, Deserialize)]
pub struct ListDeploymentsQuery {
    pub environment: Option<String>,
    pub limit: Option<i64>,
}

async fn list_deployments_handler(
    State(state): State<AppState>,
    Query(query): Query<ListDeploymentsQuery>,
) -> Result<Json<api::DeploymentListJson>> {
    crate::metrics::api_request("deployments");

    let environment = match query.environment.as_deref().map(str::parse::<Environment>) {
        None => None,
        Some(Ok(environment)) => Some(environment),
        Some(Err(_)) => return Ok(Json(api::DeploymentListJson::empty())),
    };
    let limit = clamp_limit(query.limit, DEFAULT_DEPLOYMENT_LIMIT);

    let mut conn = state
        .pool
        .get()
        .await
        .map_err(|e| ApiError::Unavailable(e.to_string()))?;

    let deployments = deployment_service::list_deployments(&mut conn, environment, limit).await?;
    Ok(Json(api::DeploymentListJson::from_rows(deployments)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::AppState;
    use crate::config::AppConfig;
    use diesel_async::pooled_connection::deadpool::Pool;
    use diesel_async::pooled_connection::AsyncDieselConnectionManager;
    use diesel_async::AsyncPgConnection;
    use metrics_exporter_prometheus::PrometheusBuilder;

    /// State for handler tests that never touch the store. The pool is lazy,
    /// so a placeholder URL is fine as long as no connection is checked out.
    pub fn state_without_store() -> AppState {
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new("postgres://unused/unused");
        let pool = Pool::builder(manager)
            .max_size(1)
            .build()
            .expect("build lazy pool");

        AppState {
            pool,
            config: AppConfig {
                database_url: None,
                app_env: "test".to_string(),
                hostname: "test-host".to_string(),
            },
            metrics: PrometheusBuilder::new().build_recorder().handle(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(clamp_limit(None, DEFAULT_APPROVAL_LIMIT), 10);
        assert_eq!(clamp_limit(None, DEFAULT_DEPLOYMENT_LIMIT), 20);
        assert_eq!(clamp_limit(Some(5), 10), 5);
        assert_eq!(clamp_limit(Some(0), 10), 0);
        assert_eq!(clamp_limit(Some(-3), 10), 0);
        assert_eq!(clamp_limit(Some(10_000), 10), MAX_LIMIT);
    }
}
