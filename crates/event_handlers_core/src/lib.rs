//! Shared event handler contracts.
//!
//! This crate owns the event and response shapes, required-field checks and
//! handler configuration values. It intentionally excludes the Lambda runtime
//! and any process environment access.

pub mod config;
pub mod contract;
pub mod error;
