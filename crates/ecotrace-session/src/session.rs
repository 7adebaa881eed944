//! One user's logging session

use ecotrace_client::payload::ActivityPayload;
use ecotrace_client::ports::ActivityGateway;
use ecotrace_core::draft::DraftActivity;
use ecotrace_core::error::{EcotraceError, Result};
use ecotrace_core::ledger::{BatchLedger, CategoryBreakdown};
use ecotrace_core::models::{EntryId, LedgerEntry};

use crate::notice::SuccessNotice;

/// Hook fired after each successful submission with the entry count
pub type ActivitiesAddedHook = Box<dyn Fn(usize) + Send + Sync>;

/// Per-session orchestrator over a draft, a batch ledger, and a gateway
///
/// All state is in-memory and scoped to the session: ending the session
/// loses unsaved drafts and batched entries. The session renders nothing
/// itself; the surrounding view reads the accessors and drives the
/// mutations.
pub struct LoggerSession<G: ActivityGateway> {
    draft: DraftActivity,
    ledger: BatchLedger,
    gateway: G,
    in_flight: bool,
    notice: Option<SuccessNotice>,
    on_activities_added: Option<ActivitiesAddedHook>,
}

impl<G: ActivityGateway> LoggerSession<G> {
    /// Create a session over a gateway
    pub fn new(gateway: G) -> Self {
        Self {
            draft: DraftActivity::new(),
            ledger: BatchLedger::new(),
            gateway,
            in_flight: false,
            notice: None,
            on_activities_added: None,
        }
    }

    /// Register the hook fired once per successful submission
    ///
    /// The surrounding view uses this to refresh aggregate summaries it
    /// fetches elsewhere.
    pub fn on_activities_added(mut self, hook: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_activities_added = Some(Box::new(hook));
        self
    }

    /// The draft entry being edited
    pub fn draft(&self) -> &DraftActivity {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftActivity {
        &mut self.draft
    }

    /// Validate the draft and append it to the batch
    ///
    /// On success the draft has been reset and the new entry's id is
    /// returned; on failure the draft is left as typed for correction.
    pub fn add_activity(&mut self) -> Result<EntryId> {
        let entry = self.draft.promote()?;
        let id = entry.id;
        self.ledger.add(entry);
        Ok(id)
    }

    /// Remove a batched entry; unknown ids are ignored
    pub fn remove_activity(&mut self, id: EntryId) {
        self.ledger.remove(id);
    }

    /// Batched entries in submission order
    pub fn entries(&self) -> &[LedgerEntry] {
        self.ledger.entries()
    }

    pub fn entry_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn total_co2(&self) -> f64 {
        self.ledger.total_co2()
    }

    pub fn eco_savings(&self) -> f64 {
        self.ledger.eco_savings()
    }

    pub fn breakdown(&self) -> CategoryBreakdown {
        self.ledger.breakdown()
    }

    /// Whether a submission is currently outstanding
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Submit every batched entry in one request
    ///
    /// The ledger is cleared only after the backend confirms the batch; on
    /// any failure it is left intact so the user can edit and retry. A
    /// second call while a submission is outstanding is rejected, and an
    /// empty batch is rejected before any network traffic.
    pub async fn submit_all(&mut self) -> Result<usize> {
        if self.in_flight {
            return Err(EcotraceError::SubmissionInFlight);
        }
        if self.ledger.is_empty() {
            return Err(EcotraceError::EmptyBatch);
        }

        let payload: Vec<ActivityPayload> =
            self.ledger.entries().iter().map(ActivityPayload::from_entry).collect();

        self.in_flight = true;
        let outcome = self.gateway.submit_batch(&payload).await;
        self.in_flight = false;

        let count = outcome?;

        self.ledger.clear();
        self.notice = Some(SuccessNotice::for_count(count));
        if let Some(hook) = &self.on_activities_added {
            hook(count);
        }

        tracing::info!(count, "activity batch submitted");
        Ok(count)
    }

    /// The success message, while its display window is open
    ///
    /// Expired notices are pruned on read.
    pub fn success_notice(&mut self) -> Option<&str> {
        if self.notice.as_ref().is_some_and(|n| n.is_expired()) {
            self.notice = None;
        }
        self.notice.as_ref().map(SuccessNotice::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ecotrace_core::models::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Gateway that records every batch it receives
    #[derive(Default, Clone)]
    struct RecordingGateway {
        batches: Arc<Mutex<Vec<Vec<ActivityPayload>>>>,
    }

    impl RecordingGateway {
        fn batch_count(&self) -> usize {
            self.batches.lock().unwrap().len()
        }

        fn last_batch(&self) -> Vec<ActivityPayload> {
            self.batches.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl ActivityGateway for RecordingGateway {
        async fn submit_batch(&self, activities: &[ActivityPayload]) -> Result<usize> {
            self.batches.lock().unwrap().push(activities.to_vec());
            Ok(activities.len())
        }
    }

    /// Gateway that always fails with a transport error
    struct FailingGateway;

    #[async_trait]
    impl ActivityGateway for FailingGateway {
        async fn submit_batch(&self, _activities: &[ActivityPayload]) -> Result<usize> {
            Err(EcotraceError::Network {
                status: None,
                message: "connection refused".to_string(),
            })
        }
    }

    fn stage_two_activities<G: ActivityGateway>(session: &mut LoggerSession<G>) {
        session.draft_mut().set_category(Category::Food);
        session.draft_mut().set_subtype("meat_meal");
        session.draft_mut().set_amount("2");
        session.add_activity().unwrap();

        session.draft_mut().set_category(Category::Transport);
        session.draft_mut().set_subtype("bike");
        session.draft_mut().set_amount("5");
        session.add_activity().unwrap();
    }

    #[tokio::test]
    async fn test_submit_empty_batch_makes_no_network_call() {
        let gateway = RecordingGateway::default();
        let mut session = LoggerSession::new(gateway.clone());

        let err = session.submit_all().await.unwrap_err();
        assert!(matches!(err, EcotraceError::EmptyBatch));
        assert_eq!(gateway.batch_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_submission_clears_ledger_and_fires_hook() {
        let gateway = RecordingGateway::default();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);

        let mut session = LoggerSession::new(gateway.clone())
            .on_activities_added(move |_| {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            });
        stage_two_activities(&mut session);

        let count = session.submit_all().await.unwrap();
        assert_eq!(count, 2);

        // One request carrying both activities, in ledger order
        assert_eq!(gateway.batch_count(), 1);
        let batch = gateway.last_batch();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].subtype, "meat_meal");
        assert_eq!(batch[1].subtype, "bike");

        assert_eq!(session.entry_count(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(session.success_notice(), Some("2 activities logged!"));
    }

    #[tokio::test]
    async fn test_failed_submission_preserves_ledger() {
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_clone = Arc::clone(&fired);

        let mut session = LoggerSession::new(FailingGateway)
            .on_activities_added(move |_| {
                fired_clone.fetch_add(1, Ordering::SeqCst);
            });
        stage_two_activities(&mut session);

        let err = session.submit_all().await.unwrap_err();
        assert!(matches!(err, EcotraceError::Network { .. }));

        // Everything stays put for a user-initiated retry
        assert_eq!(session.entry_count(), 2);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(session.success_notice(), None);
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn test_retry_after_failure_succeeds() {
        struct FlakyGateway {
            inner: RecordingGateway,
            failures_left: AtomicUsize,
        }

        #[async_trait]
        impl ActivityGateway for FlakyGateway {
            async fn submit_batch(&self, activities: &[ActivityPayload]) -> Result<usize> {
                if self.failures_left.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                    n.checked_sub(1)
                }).is_ok()
                {
                    return Err(EcotraceError::Network {
                        status: Some(503),
                        message: "service unavailable".to_string(),
                    });
                }
                self.inner.submit_batch(activities).await
            }
        }

        let recorder = RecordingGateway::default();
        let gateway = FlakyGateway {
            inner: recorder.clone(),
            failures_left: AtomicUsize::new(1),
        };
        let mut session = LoggerSession::new(gateway);
        stage_two_activities(&mut session);

        assert!(session.submit_all().await.is_err());
        assert_eq!(session.entry_count(), 2);

        let count = session.submit_all().await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(session.entry_count(), 0);
        assert_eq!(recorder.batch_count(), 1);
    }

    #[tokio::test]
    async fn test_in_flight_guard_rejects_reentry() {
        let gateway = RecordingGateway::default();
        let mut session = LoggerSession::new(gateway.clone());
        stage_two_activities(&mut session);

        session.in_flight = true;
        let err = session.submit_all().await.unwrap_err();
        assert!(matches!(err, EcotraceError::SubmissionInFlight));
        assert_eq!(gateway.batch_count(), 0);
        assert_eq!(session.entry_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_draft_does_not_reach_ledger() {
        let mut session = LoggerSession::new(RecordingGateway::default());
        session.draft_mut().set_amount("abc");

        let err = session.add_activity().unwrap_err();
        assert!(matches!(err, EcotraceError::InvalidAmount { .. }));
        assert_eq!(session.entry_count(), 0);
        // The typed input survives for correction
        assert_eq!(session.draft().amount(), "abc");
    }

    #[tokio::test]
    async fn test_remove_then_submit_sends_remaining_entries() {
        let gateway = RecordingGateway::default();
        let mut session = LoggerSession::new(gateway.clone());

        session.draft_mut().set_amount("10");
        let first = session.add_activity().unwrap();
        session.draft_mut().set_amount("20");
        session.add_activity().unwrap();

        session.remove_activity(first);
        session.submit_all().await.unwrap();

        let batch = gateway.last_batch();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].amount, 20.0);
    }
}
