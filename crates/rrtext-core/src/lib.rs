//! Shared configuration, constants and error types for the rrtext workspace.

pub mod config;
pub mod constants;
pub mod error;
