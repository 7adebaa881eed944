//! Ecotrace Client - Submission gateway port and HTTP adapter
//!
//! This crate defines the port for submitting activity batches to the
//! backend, the wire payload types, and the reqwest-based adapter.

pub mod http;
pub mod payload;
pub mod ports;

// Re-export main types
pub use http::HttpGateway;
pub use payload::{ActivityPayload, BulkActivitiesRequest};
pub use ports::ActivityGateway;
