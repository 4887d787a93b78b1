//! test_results — one test case execution recorded by the pipeline.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::test_results;

#[derive(Debug, Clone, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = test_results)]
pub struct TestResult {
    pub id: i64,
    pub build_number: String,
    pub job_name: String,
    pub test_suite: String,
    pub test_name: String,
    pub status: String,
    /// Duration in milliseconds.
    pub duration: Option<i32>,
    pub error_message: Option<String>,
    pub stack_trace: Option<String>,
    pub coverage_percent: Option<i32>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub approval_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unset_completion_serializes_as_null() {
        let row = TestResult {
            id: 1,
            build_number: "42".to_string(),
            job_name: "backend-deploy".to_string(),
            test_suite: "pytest".to_string(),
            test_name: "test_login".to_string(),
            status: "running".to_string(),
            duration: None,
            error_message: None,
            stack_trace: None,
            coverage_percent: None,
            started_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            completed_at: None,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            approval_id: None,
        };

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["started_at"], "2025-06-01T12:00:00Z");
        assert!(json["completed_at"].is_null());
        assert!(json["approval_id"].is_null());
    }
}
