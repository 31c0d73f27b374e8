//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing is the observability surface; request
//!   correlation comes from the request ID middleware

pub mod logging;
