//! Diesel table definitions for the CI/CD platform store.
//!
//! Tables: test_results, test_summaries, security_scans, approval_requests,
//! deployments, notification_logs. All rows are written by the external
//! pipeline; this service only reads them.

diesel::table! {
    test_results (id) {
        id -> Int8,
        build_number -> Varchar,
        job_name -> Varchar,
        test_suite -> Varchar,
        test_name -> Varchar,
        status -> Varchar,
        duration -> Nullable<Int4>,
        error_message -> Nullable<Text>,
        stack_trace -> Nullable<Text>,
        coverage_percent -> Nullable<Int4>,
        started_at -> Timestamptz,
        completed_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
        approval_id -> Nullable<Int8>,
    }
}

diesel::table! {
    test_summaries (id) {
        id -> Int8,
        build_number -> Varchar,
        job_name -> Varchar,
        total_tests -> Int4,
        passed_tests -> Int4,
        failed_tests -> Int4,
        skipped_tests -> Int4,
        error_tests -> Int4,
        overall_coverage -> Nullable<Int4>,
        total_duration -> Nullable<Int4>,
        html_report_url -> Nullable<Varchar>,
        allure_report_url -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Nullable<Timestamptz>,
        approval_id -> Nullable<Int8>,
    }
}

diesel::table! {
    security_scans (id) {
        id -> Int8,
        build_number -> Varchar,
        job_name -> Varchar,
        scanner -> Varchar,
        critical_count -> Int4,
        high_count -> Int4,
        medium_count -> Int4,
        low_count -> Int4,
        vulnerabilities -> Nullable<Jsonb>,
        report_url -> Nullable<Varchar>,
        scanned_at -> Timestamptz,
        approval_id -> Nullable<Int8>,
    }
}

diesel::table! {
    approval_requests (id) {
        id -> Int8,
        build_number -> Varchar,
        job_name -> Varchar,
        status -> Varchar,
        requested_by -> Varchar,
        git_commit -> Varchar,
        git_branch -> Varchar,
        version_tag -> Nullable<Varchar>,
        staging_backend_url -> Nullable<Varchar>,
        staging_frontend_url -> Nullable<Varchar>,
        staging_api_docs_url -> Nullable<Varchar>,
        approved_by -> Nullable<Varchar>,
        approval_notes -> Nullable<Text>,
        rejection_reason -> Nullable<Text>,
        manual_tests -> Nullable<Jsonb>,
        requested_at -> Timestamptz,
        reviewed_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    deployments (id) {
        id -> Int8,
        build_number -> Varchar,
        job_name -> Varchar,
        environment -> Varchar,
        status -> Varchar,
        git_commit -> Varchar,
        git_branch -> Varchar,
        version_tag -> Nullable<Varchar>,
        image_tag -> Nullable<Varchar>,
        deployed_by -> Varchar,
        deployment_notes -> Nullable<Text>,
        is_rollback -> Bool,
        previous_deployment_id -> Nullable<Int8>,
        backend_url -> Nullable<Varchar>,
        frontend_url -> Nullable<Varchar>,
        started_at -> Timestamptz,
        completed_at -> Nullable<Timestamptz>,
        approval_id -> Nullable<Int8>,
    }
}

diesel::table! {
    notification_logs (id) {
        id -> Int8,
        notification_type -> Varchar,
        recipient -> Varchar,
        subject -> Nullable<Varchar>,
        message -> Text,
        approval_id -> Nullable<Int8>,
        deployment_id -> Nullable<Int8>,
        sent_successfully -> Bool,
        error_message -> Nullable<Text>,
        sent_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    test_results,
    test_summaries,
    security_scans,
    approval_requests,
    deployments,
    notification_logs,
);
