use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

use crate::errors::SubmitError;
use crate::models::{Field, LeadForm, SubmissionState, ValidationErrors};
use crate::services::mapping::map_to_external_payload;
use crate::services::relay::LeadRelay;

/// One visitor's form: field values, inline errors and the submission state
/// machine.
///
/// `Idle -> Submitting -> Submitted -> (timer) -> Idle`, or
/// `Submitting -> Failed -> Submitting` on retry. The revert timer is owned
/// here and dies with the session.
pub struct LeadSession {
    id: Uuid,
    confirmation: Duration,
    inner: Arc<Mutex<SessionInner>>,
}

struct SessionInner {
    form: LeadForm,
    errors: ValidationErrors,
    state: SubmissionState,
    revert: Option<JoinHandle<()>>,
    // Bumped on every submit and teardown; a timer only reverts the
    // generation it was scheduled for.
    generation: u64,
    last_activity: Instant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    #[serde(flatten)]
    pub state: SubmissionState,
    pub form: LeadForm,
    pub errors: ValidationErrors,
}

impl SessionSnapshot {
    /// What an untouched form looks like, for a page that has no stored
    /// session yet.
    pub fn blank(id: Uuid) -> Self {
        Self {
            id,
            state: SubmissionState::Idle,
            form: LeadForm::default(),
            errors: ValidationErrors::default(),
        }
    }
}

impl LeadSession {
    pub fn new(confirmation: Duration) -> Self {
        Self::with_id(Uuid::new_v4(), confirmation)
    }

    pub fn with_id(id: Uuid, confirmation: Duration) -> Self {
        Self {
            id,
            confirmation,
            inner: Arc::new(Mutex::new(SessionInner {
                form: LeadForm::default(),
                errors: ValidationErrors::default(),
                state: SubmissionState::Idle,
                revert: None,
                generation: 0,
                last_activity: Instant::now(),
            })),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state.clone()
    }

    pub fn form(&self) -> LeadForm {
        self.lock().form.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.lock().errors.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.lock();
        SessionSnapshot {
            id: self.id,
            state: inner.state.clone(),
            form: inner.form.clone(),
            errors: inner.errors.clone(),
        }
    }

    pub fn idle_for(&self) -> Duration {
        self.lock().last_activity.elapsed()
    }

    pub fn set_form(&self, form: LeadForm) {
        let mut inner = self.lock();
        inner.form = form;
        inner.last_activity = Instant::now();
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut inner = self.lock();
        let value = value.into();
        match field {
            Field::Name => inner.form.name = value,
            Field::Phone => inner.form.phone = value,
            Field::DentalWorkType => inner.form.dental_work_type = value,
            Field::Timeframe => inner.form.timeframe = value,
        }
        inner.last_activity = Instant::now();
    }

    /// Validates the current fields and, if they are complete, relays them.
    ///
    /// Returns the state the session settled in. A transport failure is not an
    /// `Err`: it lands the session in `Failed` with the fields kept.
    pub async fn submit(&self, relay: &dyn LeadRelay) -> Result<SubmissionState, SubmitError> {
        self.run_submit(None, relay).await
    }

    /// Replaces the fields and submits them in one step. The fields are left
    /// alone when a submission is already in flight.
    pub async fn submit_form(
        &self,
        form: LeadForm,
        relay: &dyn LeadRelay,
    ) -> Result<SubmissionState, SubmitError> {
        self.run_submit(Some(form), relay).await
    }

    async fn run_submit(
        &self,
        form: Option<LeadForm>,
        relay: &dyn LeadRelay,
    ) -> Result<SubmissionState, SubmitError> {
        let (payload, generation) = {
            let mut inner = self.lock();
            inner.last_activity = Instant::now();

            if inner.state.is_submitting() {
                return Err(SubmitError::InFlight);
            }
            if let Some(form) = form {
                inner.form = form;
            }

            if let Err(errors) = inner.form.validate() {
                tracing::debug!(session = %self.id, fields = errors.len(), "lead form incomplete");
                inner.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }

            inner.errors = ValidationErrors::default();
            inner.cancel_revert();
            inner.generation += 1;
            inner.state = SubmissionState::Submitting;
            (map_to_external_payload(&inner.form), inner.generation)
        };

        tracing::info!(session = %self.id, "relaying lead");
        let pending = PendingRelay { session: self };
        let result = relay.submit(&payload).await;
        pending.settle();

        let mut inner = self.lock();
        inner.last_activity = Instant::now();
        // A teardown while the relay was in flight bumps the generation. The
        // outcome is still recorded, but no confirmation timer is started.
        let current = inner.generation == generation;

        match result {
            Ok(()) => {
                tracing::info!(session = %self.id, "lead relayed");
                inner.form.clear();
                inner.state = SubmissionState::Submitted;
                if current {
                    inner.revert = Some(schedule_revert(
                        Arc::downgrade(&self.inner),
                        generation,
                        self.confirmation,
                    ));
                }
            }
            Err(e) => {
                tracing::error!(session = %self.id, error = %e, "failed to relay lead");
                inner.state = SubmissionState::failed();
            }
        }

        Ok(inner.state.clone())
    }

    /// Cancels a pending confirmation timer. Safe to call more than once.
    pub fn teardown(&self) {
        let mut inner = self.lock();
        inner.cancel_revert();
        inner.generation += 1;
    }
}

/// Marks the session `Failed` if the submitting future is dropped before the
/// relay answers, so a dropped request never leaves it stuck in `Submitting`.
struct PendingRelay<'a> {
    session: &'a LeadSession,
}

impl PendingRelay<'_> {
    fn settle(self) {
        std::mem::forget(self);
    }
}

impl Drop for PendingRelay<'_> {
    fn drop(&mut self) {
        let mut inner = self.session.lock();
        if inner.state.is_submitting() {
            tracing::warn!(session = %self.session.id, "lead relay abandoned before it answered");
            inner.state = SubmissionState::failed();
        }
    }
}

impl SessionInner {
    fn cancel_revert(&mut self) {
        if let Some(handle) = self.revert.take() {
            handle.abort();
        }
    }
}

impl Drop for LeadSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn schedule_revert(
    inner: Weak<Mutex<SessionInner>>,
    generation: u64,
    after: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;

        let Some(inner) = inner.upgrade() else {
            return;
        };
        let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.generation == generation && inner.state == SubmissionState::Submitted {
            inner.state = SubmissionState::Idle;
            inner.revert = None;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransportError;
    use crate::services::mapping::ExternalPayload;
    use async_trait::async_trait;

    struct MockRelay {
        fail: bool,
        sent: Mutex<Vec<ExternalPayload>>,
    }

    impl MockRelay {
        fn ok() -> Self {
            Self {
                fail: false,
                sent: Mutex::new(vec![]),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                sent: Mutex::new(vec![]),
            }
        }

        fn sent(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LeadRelay for MockRelay {
        async fn submit(&self, payload: &ExternalPayload) -> Result<(), TransportError> {
            self.sent.lock().unwrap().push(payload.clone());
            if self.fail {
                Err(refused_connection().await)
            } else {
                Ok(())
            }
        }
    }

    /// A real transport error: nothing listens on loopback port 1.
    async fn refused_connection() -> TransportError {
        reqwest::Client::new()
            .post("http://127.0.0.1:1/formResponse")
            .send()
            .await
            .unwrap_err()
            .into()
    }

    /// Never answers.
    struct StalledRelay;

    #[async_trait]
    impl LeadRelay for StalledRelay {
        async fn submit(&self, _payload: &ExternalPayload) -> Result<(), TransportError> {
            std::future::pending().await
        }
    }

    /// Answers only once `release` is notified.
    struct GatedRelay {
        release: tokio::sync::Notify,
    }

    #[async_trait]
    impl LeadRelay for GatedRelay {
        async fn submit(&self, _payload: &ExternalPayload) -> Result<(), TransportError> {
            self.release.notified().await;
            Ok(())
        }
    }

    fn filled_session() -> LeadSession {
        let session = LeadSession::new(Duration::from_secs(5));
        session.set_form(LeadForm {
            name: "Dana Ruiz".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            dental_work_type: "implants".to_string(),
            timeframe: "researching".to_string(),
        });
        session
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let session = LeadSession::new(Duration::from_secs(5));
        assert_eq!(session.state(), SubmissionState::Idle);
        assert_eq!(session.form(), LeadForm::default());
    }

    #[tokio::test]
    async fn test_missing_field_blocks_relay() {
        for field in Field::ALL {
            let session = filled_session();
            session.set_field(field, "");
            let relay = MockRelay::ok();

            let err = session.submit(&relay).await.unwrap_err();
            match err {
                SubmitError::Invalid(errors) => {
                    assert_eq!(errors.len(), 1);
                    assert!(errors.get(field).is_some());
                }
                other => panic!("unexpected error: {other:?}"),
            }
            assert_eq!(relay.sent(), 0);
            assert_eq!(session.state(), SubmissionState::Idle);
            assert_eq!(session.errors().len(), 1);
        }
    }

    #[tokio::test]
    async fn test_relay_receives_mapped_payload() {
        let session = filled_session();
        let relay = MockRelay::ok();
        session.submit(&relay).await.unwrap();

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].dental_work, "Dental Implants");
        assert_eq!(sent[0].timeframe, "Just researching options");
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let session = filled_session();
        let before = session.form();
        let state = session.submit(&MockRelay::failing()).await.unwrap();

        assert_eq!(
            state,
            SubmissionState::Failed(
                "There was an error submitting your request. Please try again.".to_string()
            )
        );
        assert_eq!(session.form(), before);
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let session = filled_session();
        session.submit(&MockRelay::failing()).await.unwrap();

        let relay = MockRelay::ok();
        let state = session.submit(&relay).await.unwrap();
        assert_eq!(state, SubmissionState::Submitted);
        assert_eq!(relay.sent(), 1);
    }

    #[tokio::test]
    async fn test_errors_cleared_after_valid_submit() {
        let session = filled_session();
        session.set_field(Field::Phone, "");
        assert!(session.submit(&MockRelay::ok()).await.is_err());
        assert_eq!(session.errors().len(), 1);

        session.set_field(Field::Phone, "5551234567");
        session.submit(&MockRelay::ok()).await.unwrap();
        assert!(session.errors().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_clears_fields_and_reverts_after_confirmation() {
        let session = filled_session();
        let state = session.submit(&MockRelay::ok()).await.unwrap();

        assert_eq!(state, SubmissionState::Submitted);
        assert_eq!(session.form(), LeadForm::default());

        tokio::time::sleep(Duration::from_millis(4900)).await;
        assert_eq!(session.state(), SubmissionState::Submitted);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_cancels_revert() {
        let session = filled_session();
        session.submit(&MockRelay::ok()).await.unwrap();
        session.teardown();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(session.state(), SubmissionState::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_submission_replaces_timer() {
        let session = filled_session();
        session.submit(&MockRelay::ok()).await.unwrap();

        tokio::time::sleep(Duration::from_secs(3)).await;
        session.set_form(LeadForm {
            name: "Sam".to_string(),
            phone: "5550000000".to_string(),
            dental_work_type: "fillings".to_string(),
            timeframe: "1-3-months".to_string(),
        });
        session.submit(&MockRelay::ok()).await.unwrap();

        // The first timer would have fired here.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(session.state(), SubmissionState::Submitted);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_submit_is_recoverable() {
        let session = filled_session();
        let before = session.form();

        let cut_short =
            tokio::time::timeout(Duration::from_secs(1), session.submit(&StalledRelay)).await;
        assert!(cut_short.is_err());
        assert!(session.state().error_message().is_some());
        assert_eq!(session.form(), before);

        let relay = MockRelay::ok();
        let state = session.submit(&relay).await.unwrap();
        assert_eq!(state, SubmissionState::Submitted);
        assert_eq!(relay.sent(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_during_relay_reports_outcome() {
        let session = Arc::new(filled_session());
        let relay = Arc::new(GatedRelay {
            release: tokio::sync::Notify::new(),
        });

        let submit = {
            let session = Arc::clone(&session);
            let relay = Arc::clone(&relay);
            tokio::spawn(async move { session.submit(relay.as_ref()).await })
        };
        while !session.state().is_submitting() {
            tokio::task::yield_now().await;
        }

        session.teardown();
        relay.release.notify_one();

        let state = submit.await.unwrap().unwrap();
        assert_eq!(state, SubmissionState::Submitted);
        assert_eq!(session.state(), SubmissionState::Submitted);
        assert_eq!(session.form(), LeadForm::default());

        // No confirmation timer for a torn-down session.
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(session.state(), SubmissionState::Submitted);
    }

    #[tokio::test]
    async fn test_snapshot_serializes_state_inline() {
        let session = filled_session();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["status"], "idle");
        assert_eq!(json["form"]["dentalWorkType"], "implants");
        assert_eq!(json["errors"], serde_json::json!({}));
    }
}
