//! Startup schema migration for the CI/CD platform tables.
//!
//! One idempotent script, executed on every boot. The external pipeline is
//! the only writer; this service just needs the tables to exist so that
//! queries against an empty store return empty results instead of errors.

use diesel_async::{AsyncPgConnection, SimpleAsyncConnection};

/// SQL migration for the six CI/CD platform tables.
///
/// Status columns carry CHECK constraints so that nothing outside the
/// enumerated values can be persisted, whichever client writes the row.
pub const MIGRATION_SQL: &str = r#"
-- ================================================================
-- CI/CD Platform Tables
-- ================================================================

CREATE TABLE IF NOT EXISTS approval_requests (
    id                   BIGSERIAL PRIMARY KEY,
    build_number         VARCHAR(50) NOT NULL,
    job_name             VARCHAR(100) NOT NULL,
    status               VARCHAR(32) NOT NULL DEFAULT 'pending'
                         CHECK (status IN ('pending', 'approved', 'rejected', 'cancelled')),
    requested_by         VARCHAR(100) NOT NULL,
    git_commit           VARCHAR(40) NOT NULL,
    git_branch           VARCHAR(100) NOT NULL,
    version_tag          VARCHAR(50),
    staging_backend_url  VARCHAR(500),
    staging_frontend_url VARCHAR(500),
    staging_api_docs_url VARCHAR(500),
    approved_by          VARCHAR(100),
    approval_notes       TEXT,
    rejection_reason     TEXT,
    manual_tests         JSONB,
    requested_at         TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    reviewed_at          TIMESTAMPTZ
);

CREATE INDEX IF NOT EXISTS idx_approval_requests_build ON approval_requests (build_number);
CREATE INDEX IF NOT EXISTS idx_approval_requests_job ON approval_requests (job_name);
CREATE INDEX IF NOT EXISTS idx_approval_requests_status ON approval_requests (status);
CREATE INDEX IF NOT EXISTS idx_approval_requests_requested ON approval_requests (requested_at DESC);

CREATE TABLE IF NOT EXISTS test_results (
    id               BIGSERIAL PRIMARY KEY,
    build_number     VARCHAR(50) NOT NULL,
    job_name         VARCHAR(100) NOT NULL,
    test_suite       VARCHAR(100) NOT NULL,
    test_name        VARCHAR(255) NOT NULL,
    status           VARCHAR(32) NOT NULL DEFAULT 'pending'
                     CHECK (status IN ('pending', 'running', 'passed', 'failed', 'skipped', 'error')),
    duration         INTEGER,
    error_message    TEXT,
    stack_trace      TEXT,
    coverage_percent INTEGER,
    started_at       TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    completed_at     TIMESTAMPTZ,
    created_at       TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    approval_id      BIGINT REFERENCES approval_requests(id)
);

CREATE INDEX IF NOT EXISTS idx_test_results_build ON test_results (build_number);
CREATE INDEX IF NOT EXISTS idx_test_results_job ON test_results (job_name);

CREATE TABLE IF NOT EXISTS test_summaries (
    id                BIGSERIAL PRIMARY KEY,
    build_number      VARCHAR(50) NOT NULL,
    job_name          VARCHAR(100) NOT NULL,
    total_tests       INTEGER NOT NULL DEFAULT 0 CHECK (total_tests >= 0),
    passed_tests      INTEGER NOT NULL DEFAULT 0 CHECK (passed_tests >= 0),
    failed_tests      INTEGER NOT NULL DEFAULT 0 CHECK (failed_tests >= 0),
    skipped_tests     INTEGER NOT NULL DEFAULT 0 CHECK (skipped_tests >= 0),
    error_tests       INTEGER NOT NULL DEFAULT 0 CHECK (error_tests >= 0),
    overall_coverage  INTEGER,
    total_duration    INTEGER,
    html_report_url   VARCHAR(500),
    allure_report_url VARCHAR(500),
    created_at        TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at        TIMESTAMPTZ,
    approval_id       BIGINT REFERENCES approval_requests(id)
);

CREATE INDEX IF NOT EXISTS idx_test_summaries_build ON test_summaries (build_number);
CREATE INDEX IF NOT EXISTS idx_test_summaries_job ON test_summaries (job_name);

CREATE TABLE IF NOT EXISTS security_scans (
    id              BIGSERIAL PRIMARY KEY,
    build_number    VARCHAR(50) NOT NULL,
    job_name        VARCHAR(100) NOT NULL,
    scanner         VARCHAR(50) NOT NULL,
    critical_count  INTEGER NOT NULL DEFAULT 0 CHECK (critical_count >= 0),
    high_count      INTEGER NOT NULL DEFAULT 0 CHECK (high_count >= 0),
    medium_count    INTEGER NOT NULL DEFAULT 0 CHECK (medium_count >= 0),
    low_count       INTEGER NOT NULL DEFAULT 0 CHECK (low_count >= 0),
    vulnerabilities JSONB,
    report_url      VARCHAR(500),
    scanned_at      TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    approval_id     BIGINT REFERENCES approval_requests(id)
);

CREATE INDEX IF NOT EXISTS idx_security_scans_build ON security_scans (build_number);

CREATE TABLE IF NOT EXISTS deployments (
    id                     BIGSERIAL PRIMARY KEY,
    build_number           VARCHAR(50) NOT NULL,
    job_name               VARCHAR(100) NOT NULL,
    environment            VARCHAR(32) NOT NULL
                           CHECK (environment IN ('staging', 'production')),
    status                 VARCHAR(32) NOT NULL DEFAULT 'pending'
                           CHECK (status IN ('pending', 'in_progress', 'success', 'failed', 'rolled_back')),
    git_commit             VARCHAR(40) NOT NULL,
    git_branch             VARCHAR(100) NOT NULL,
    version_tag            VARCHAR(50),
    image_tag              VARCHAR(100),
    deployed_by            VARCHAR(100) NOT NULL,
    deployment_notes       TEXT,
    is_rollback            BOOLEAN NOT NULL DEFAULT FALSE,
    previous_deployment_id BIGINT REFERENCES deployments(id),
    backend_url            VARCHAR(500),
    frontend_url           VARCHAR(500),
    started_at             TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    completed_at           TIMESTAMPTZ,
    approval_id            BIGINT REFERENCES approval_requests(id)
);

CREATE INDEX IF NOT EXISTS idx_deployments_build ON deployments (build_number);
CREATE INDEX IF NOT EXISTS idx_deployments_environment ON deployments (environment);
CREATE INDEX IF NOT EXISTS idx_deployments_started ON deployments (started_at DESC);

CREATE TABLE IF NOT EXISTS notification_logs (
    id                BIGSERIAL PRIMARY KEY,
    notification_type VARCHAR(50) NOT NULL,
    recipient         VARCHAR(200) NOT NULL,
    subject           VARCHAR(500),
    message           TEXT NOT NULL,
    approval_id       BIGINT REFERENCES approval_requests(id),
    deployment_id     BIGINT REFERENCES deployments(id),
    sent_successfully BOOLEAN NOT NULL DEFAULT FALSE,
    error_message     TEXT,
    sent_at           TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#;

/// Run the schema migration. Safe to call on every startup.
pub async fn run_migrations(conn: &mut AsyncPgConnection) -> anyhow::Result<()> {
    conn.batch_execute(MIGRATION_SQL).await?;
    Ok(())
}
