//! Candidate evaluation desk: scoring rules, dashboard aggregation, and the flat-file stores
//! shared by the command-line and HTTP front ends.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
