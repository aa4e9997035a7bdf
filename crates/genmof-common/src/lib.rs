//! genmof-common — Shared errors and configuration used across all GenMOF crates.

pub mod config;
pub mod error;

pub use config::GenmofConfig;
pub use error::{ApiError, GenmofError, Result};
