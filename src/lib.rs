//! CI/CD backend API — read-oriented REST service over the pipeline store.
//!
//! The external build pipeline writes test results, security scans, approval
//! requests, deployments, and notification logs into PostgreSQL; this crate
//! serves them back as JSON along with health and host-info endpoints.

pub mod config;
pub mod error;
pub mod metrics;
pub mod migration;
pub mod models;
pub mod routes;
pub mod schema;
pub mod services;
