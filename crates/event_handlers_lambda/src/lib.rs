//! AWS Lambda handlers for storage notifications, pipeline results and
//! environment-configured greetings.
//!
//! This crate owns runtime integration details (handler entry points,
//! environment adapters and log set-up). Event and response contracts live in
//! `event_handlers_core`.

pub mod adapters;
pub mod handlers;
pub mod telemetry;
