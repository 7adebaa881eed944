//! Gateway port definitions

use async_trait::async_trait;
use ecotrace_core::error::Result;

use crate::payload::ActivityPayload;

/// Port for persisting activity batches on the backend
#[async_trait]
pub trait ActivityGateway: Send + Sync {
    /// Submit a batch of activities in a single request
    ///
    /// The batch succeeds or fails as a whole from the client's
    /// perspective; server-side transactionality is the backend's concern.
    ///
    /// # Arguments
    /// * `activities` - Wire payloads in ledger order
    ///
    /// # Returns
    /// The number of activities submitted
    async fn submit_batch(&self, activities: &[ActivityPayload]) -> Result<usize>;
}
