//! HTTP middleware for request processing.

pub mod access_log;
