//! Ecotrace Session - per-session orchestration
//!
//! Ties the draft builder, batch ledger, and submission gateway together
//! for one user session: a single logical thread of control whose only
//! suspension point is the network round-trip.

pub mod notice;
pub mod session;

// Re-export main types
pub use notice::SuccessNotice;
pub use session::LoggerSession;
