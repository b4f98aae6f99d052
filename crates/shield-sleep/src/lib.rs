//! Shield sleep score engine and the service plumbing around it.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
