//! test_summaries — aggregated test counts per build.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::test_summaries;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = test_summaries)]
pub struct TestSummary {
    pub id: i64,
    pub build_number: String,
    pub job_name: String,
    pub total_tests: i32,
    pub passed_tests: i32,
    pub failed_tests: i32,
    pub skipped_tests: i32,
    pub error_tests: i32,
    pub overall_coverage: Option<i32>,
    /// Total test duration in milliseconds.
    pub total_duration: Option<i32>,
    pub html_report_url: Option<String>,
    pub allure_report_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub approval_id: Option<i64>,
}
