//! CI/CD platform data models — read-only records written by the pipeline.

pub mod approval;
pub mod deployment;
pub mod notification;
pub mod security_scan;
pub mod status;
pub mod test_result;
pub mod test_summary;
