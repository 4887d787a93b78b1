//! Data-access services — parameterized read-only queries over the store.

pub mod approval_service;
pub mod deployment_service;
