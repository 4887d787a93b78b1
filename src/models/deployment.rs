//! deployments — one attempt to put a build/version into an environment.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::deployments;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = deployments)]
pub struct Deployment {
    pub id: i64,
    pub build_number: String,
    pub job_name: String,
    pub environment: String,
    pub status: String,
    pub git_commit: String,
    pub git_branch: String,
    pub version_tag: Option<String>,
    pub image_tag: Option<String>,
    pub deployed_by: String,
    pub deployment_notes: Option<String>,
    pub is_rollback: bool,
    /// Back-reference for rollback lineage. An id to look up, never a
    /// chained in-memory link.
    pub previous_deployment_id: Option<i64>,
    pub backend_url: Option<String>,
    pub frontend_url: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub approval_id: Option<i64>,
}
