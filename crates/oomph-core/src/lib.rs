//! Shared configuration, constants and error types for the oomph workspace.

pub mod config;
pub mod constants;
pub mod error;
