//! security_scans — vulnerability scan results per build (trivy etc.).

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::security_scans;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = security_scans)]
pub struct SecurityScan {
    pub id: i64,
    pub build_number: String,
    pub job_name: String,
    pub scanner: String,
    pub critical_count: i32,
    pub high_count: i32,
    pub medium_count: i32,
    pub low_count: i32,
    /// Full vulnerability list as reported by the scanner.
    pub vulnerabilities: Option<serde_json::Value>,
    pub report_url: Option<String>,
    pub scanned_at: DateTime<Utc>,
    pub approval_id: Option<i64>,
}
