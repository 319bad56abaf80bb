//! Shared configuration, constants and error types for kalarchiv.

pub mod config;
pub mod constants;
pub mod error;
