//! approval_requests — staging → production promotion gates.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::approval_requests;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = approval_requests)]
pub struct ApprovalRequest {
    pub id: i64,
    pub build_number: String,
    pub job_name: String,
    pub status: String,
    pub requested_by: String,
    pub git_commit: String,
    pub git_branch: String,
    pub version_tag: Option<String>,
    pub staging_backend_url: Option<String>,
    pub staging_frontend_url: Option<String>,
    pub staging_api_docs_url: Option<String>,
    pub approved_by: Option<String>,
    pub approval_notes: Option<String>,
    pub rejection_reason: Option<String>,
    /// JSON array of `{"name", "passed", "notes"}` checklist items.
    pub manual_tests: Option<serde_json::Value>,
    pub requested_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
}
