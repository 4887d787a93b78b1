//! Approval request queries: list with filters, point lookup, and the
//! best-effort child lookups used to assemble the detail response.

use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::Result;
use crate::models::approval::ApprovalRequest;
use crate::models::security_scan::SecurityScan;
use crate::models::status::ApprovalStatus;
use crate::models::test_summary::TestSummary;
use crate::schema::{approval_requests, security_scans, test_summaries};

/// List approval requests, newest first, optionally filtered by status.
pub async fn list_approvals(
    conn: &mut AsyncPgConnection,
    status: Option<ApprovalStatus>,
    limit: i64,
) -> Result<Vec<ApprovalRequest>> {
    let mut query = approval_requests::table
        .order(approval_requests::requested_at.desc())
        .limit(limit)
        .into_boxed();

    if let Some(status) = status {
        query = query.filter(approval_requests::status.eq(status.as_str()));
    }

    let results = query.load::<ApprovalRequest>(conn).await?;
    Ok(results)
}

/// Point lookup of an approval request by primary key.
pub async fn find_approval(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> Result<Option<ApprovalRequest>> {
    let result = approval_requests::table
        .find(id)
        .first::<ApprovalRequest>(conn)
        .await
        .optional()?;
    Ok(result)
}

/// Latest test summary recorded for an approval. Absence is normal: not
/// every approval has test data attached yet.
pub async fn latest_summary_for(
    conn: &mut AsyncPgConnection,
    approval_id: i64,
) -> Result<Option<TestSummary>> {
    let result = test_summaries::table
        .filter(test_summaries::approval_id.eq(approval_id))
        .order(test_summaries::created_at.desc())
        .first::<TestSummary>(conn)
        .await
        .optional()?;
    Ok(result)
}

/// Latest security scan recorded for an approval.
pub async fn latest_scan_for(
    conn: &mut AsyncPgConnection,
    approval_id: i64,
) -> Result<Option<SecurityScan>> {
    let result = security_scans::table
        .filter(security_scans::approval_id.eq(approval_id))
        .order(security_scans::scanned_at.desc())
        .first::<SecurityScan>(conn)
        .await
        .optional()?;
    Ok(result)
}
