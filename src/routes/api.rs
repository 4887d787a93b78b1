//! JSON response shapes for the approval and deployment APIs.
//!
//! Records come out of the store as full rows; these types trim them to the
//! documented wire shapes. Timestamps serialize as RFC 3339 strings, or
//! `null` when the underlying column is unset.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::approval::ApprovalRequest;
use crate::models::deployment::Deployment;
use crate::models::security_scan::SecurityScan;
use crate::models::test_summary::TestSummary;

// ── Approvals ──

/// One row of `GET /api/v1/approvals`.
#[derive(Debug, Serialize)]
pub struct ApprovalJson {
    pub id: i64,
    pub build_number: String,
    pub job_name: String,
    pub status: String,
    pub git_commit: String,
    pub requested_at: DateTime<Utc>,
    pub staging_frontend_url: Option<String>,
    pub staging_backend_url: Option<String>,
}

impl From<ApprovalRequest> for ApprovalJson {
    fn from(row: ApprovalRequest) -> Self {
        Self {
            id: row.id,
            build_number: row.build_number,
            job_name: row.job_name,
            status: row.status,
            git_commit: row.git_commit,
            requested_at: row.requested_at,
            staging_frontend_url: row.staging_frontend_url,
            staging_backend_url: row.staging_backend_url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApprovalListJson {
    pub count: usize,
    pub approvals: Vec<ApprovalJson>,
}

impl ApprovalListJson {
    pub fn empty() -> Self {
        Self {
            count: 0,
            approvals: Vec::new(),
        }
    }

    pub fn from_rows(rows: Vec<ApprovalRequest>) -> Self {
        Self {
            count: rows.len(),
            approvals: rows.into_iter().map(Into::into).collect(),
        }
    }
}

/// Test summary section of the approval detail response.
#[derive(Debug, Serialize)]
pub struct TestSummaryJson {
    pub total_tests: i32,
    pub passed_tests: i32,
    pub failed_tests: i32,
    pub skipped_tests: i32,
    pub error_tests: i32,
    pub overall_coverage: Option<i32>,
    pub total_duration: Option<i32>,
    pub html_report_url: Option<String>,
    pub allure_report_url: Option<String>,
}

impl From<TestSummary> for TestSummaryJson {
    fn from(row: TestSummary) -> Self {
        Self {
            total_tests: row.total_tests,
            passed_tests: row.passed_tests,
            failed_tests: row.failed_tests,
            skipped_tests: row.skipped_tests,
            error_tests: row.error_tests,
            overall_coverage: row.overall_coverage,
            total_duration: row.total_duration,
            html_report_url: row.html_report_url,
            allure_report_url: row.allure_report_url,
        }
    }
}

/// Security scan section of the approval detail response.
#[derive(Debug, Serialize)]
pub struct SecurityScanJson {
    pub scanner: String,
    pub critical_count: i32,
    pub high_count: i32,
    pub medium_count: i32,
    pub low_count: i32,
    pub vulnerabilities: Option<serde_json::Value>,
    pub report_url: Option<String>,
}

impl From<SecurityScan> for SecurityScanJson {
    fn from(row: SecurityScan) -> Self {
        Self {
            scanner: row.scanner,
            critical_count: row.critical_count,
            high_count: row.high_count,
            medium_count: row.medium_count,
            low_count: row.low_count,
            vulnerabilities: row.vulnerabilities,
            report_url: row.report_url,
        }
    }
}

/// Full detail object for `GET /api/v1/approvals/{id}`.
#[derive(Debug, Serialize)]
pub struct ApprovalDetailJson {
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
    pub manual_tests: Option<serde_json::Value>,
    pub requested_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    /// `null` when no test summary was recorded for this approval.
    pub test_summary: Option<TestSummaryJson>,
    /// `null` when no security scan was recorded for this approval.
    pub security_scan: Option<SecurityScanJson>,
}

impl ApprovalDetailJson {
    /// Best-effort assembly: either child may be missing and the detail is
    /// still a complete, valid response.
    pub fn assemble(
        approval: ApprovalRequest,
        summary: Option<TestSummary>,
        scan: Option<SecurityScan>,
    ) -> Self {
        Self {
            id: approval.id,
            build_number: approval.build_number,
            job_name: approval.job_name,
            status: approval.status,
            requested_by: approval.requested_by,
            git_commit: approval.git_commit,
            git_branch: approval.git_branch,
            version_tag: approval.version_tag,
            staging_backend_url: approval.staging_backend_url,
            staging_frontend_url: approval.staging_frontend_url,
            staging_api_docs_url: approval.staging_api_docs_url,
            approved_by: approval.approved_by,
            approval_notes: approval.approval_notes,
            rejection_reason: approval.rejection_reason,
            manual_tests: approval.manual_tests,
            requested_at: approval.requested_at,
            reviewed_at: approval.reviewed_at,
            test_summary: summary.map(Into::into),
            security_scan: scan.map(Into::into),
        }
    }
}

// ── Deployments ──

/// One row of `GET /api/v1/deployments`.
#[derive(Debug, Serialize)]
pub struct DeploymentJson {
    pub id: i64,
    pub build_number: String,
    pub job_name: String,
    pub environment: String,
    pub status: String,
    pub version_tag: Option<String>,
    pub deployed_by: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub is_rollback: bool,
}

impl From<Deployment> for DeploymentJson {
    fn from(row: Deployment) -> Self {
        Self {
            id: row.id,
            build_number: row.build_number,
            job_name: row.job_name,
            environment: row.environment,
            status: row.status,
            version_tag: row.version_tag,
            deployed_by: row.deployed_by,
            started_at: row.started_at,
            completed_at: row.completed_at,
            is_rollback: row.is_rollback,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeploymentListJson {
    pub count: usize,
    pub deployments: Vec<DeploymentJson>,
}

impl DeploymentListJson {
    pub fn empty() -> Self {
        Self {
            count: 0,
            deployments: Vec::new(),
        }
    }

    pub fn from_rows(rows: Vec<Deployment>) -> Self {
        Self {
            count: rows.len(),
            deployments: rows.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn approval_row() -> ApprovalRequest {
        ApprovalRequest {
            id: 1,
            build_number: "42".to_string(),
            job_name: "backend-deploy".to_string(),
            status: "pending".to_string(),
            requested_by: "jenkins".to_string(),
            git_commit: "0123456789abcdef0123456789abcdef01234567".to_string(),
            git_branch: "main".to_string(),
            version_tag: Some("v1.4.0".to_string()),
            staging_backend_url: Some("https://staging.example.com/api".to_string()),
            staging_frontend_url: Some("https://staging.example.com".to_string()),
            staging_api_docs_url: None,
            approved_by: None,
            approval_notes: None,
            rejection_reason: None,
            manual_tests: None,
            requested_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            reviewed_at: None,
        }
    }

    #[test]
    fn empty_listing_serializes_count_zero() {
        let json = serde_json::to_value(ApprovalListJson::empty()).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["approvals"], serde_json::json!([]));
    }

    #[test]
    fn missing_children_serialize_as_null_not_empty_objects() {
        let detail = ApprovalDetailJson::assemble(approval_row(), None, None);
        let json = serde_json::to_value(detail).unwrap();

        assert_eq!(json["status"], "pending");
        assert!(json["test_summary"].is_null());
        assert!(json["security_scan"].is_null());
        assert!(json["reviewed_at"].is_null());
    }

    #[test]
    fn present_summary_is_flattened_into_the_detail() {
        let summary = TestSummary {
            id: 7,
            build_number: "42".to_string(),
            job_name: "backend-deploy".to_string(),
            total_tests: 120,
            passed_tests: 118,
            failed_tests: 1,
            skipped_tests: 1,
            error_tests: 0,
            overall_coverage: Some(87),
            total_duration: Some(93_000),
            html_report_url: Some("https://ci.example.com/r/42".to_string()),
            allure_report_url: None,
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 5, 0).unwrap(),
            updated_at: None,
            approval_id: Some(1),
        };

        let detail = ApprovalDetailJson::assemble(approval_row(), Some(summary), None);
        let json = serde_json::to_value(detail).unwrap();

        assert_eq!(json["test_summary"]["total_tests"], 120);
        assert_eq!(json["test_summary"]["passed_tests"], 118);
        assert!(json["security_scan"].is_null());
    }

    #[test]
    fn timestamps_serialize_as_rfc3339() {
        let json = serde_json::to_value(ApprovalJson::from(approval_row())).unwrap();
        assert_eq!(json["requested_at"], "2025-06-01T12:00:00Z");
    }

    #[test]
    fn listing_preserves_row_order() {
        let mut newer = approval_row();
        newer.id = 2;
        newer.requested_at = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();

        let listing = ApprovalListJson::from_rows(vec![newer, approval_row()]);
        assert_eq!(listing.count, 2);
        assert_eq!(listing.approvals[0].id, 2);
        assert!(listing.approvals[0].requested_at >= listing.approvals[1].requested_at);
    }
}
