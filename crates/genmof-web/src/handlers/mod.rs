//! HTTP handlers for all web routes.

pub mod playground;
pub mod articles;
pub mod api;
