use std::{future::Future, pin::Pin, time::Duration};

use thiserror::Error;

/// How long the simulated submission takes.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
/// How long the success/failure notice stays up.
pub const NOTICE_DURATION: Duration = Duration::from_millis(5000);

pub type LocalFuture<T> = Pin<Box<dyn Future<Output = T>>>;
/// A timer, so the browser and native builds can bring their own.
pub type Sleep = fn(Duration) -> LocalFuture<()>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Succeeded => Some("✅ Message sent successfully! I'll get back to you soon."),
            Self::Failed => Some("❌ Failed to send message. Please try again."),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message was rejected: {0}")]
    Rejected(String),
}

/// Identifies one submission so late completions and dismissals from an
/// earlier one can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    phase: SubmitPhase,
    issued: u64,
}

impl ContactState {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn can_submit(&self) -> bool {
        self.phase != SubmitPhase::Submitting
    }

    pub fn begin_submit(&mut self) -> Result<Ticket, ContactError> {
        if !self.can_submit() {
            return Err(ContactError::AlreadySubmitting);
        }
        self.issued += 1;
        self.phase = SubmitPhase::Submitting;
        Ok(Ticket(self.issued))
    }

    /// Record the outcome of a submission. Returns false when `ticket` is stale.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<(), SubmitError>) -> bool {
        if ticket.0 != self.issued || self.phase != SubmitPhase::Submitting {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.phase = SubmitPhase::Succeeded;
                self.form.clear();
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.phase = SubmitPhase::Failed;
            }
        }
        true
    }

    /// Hide the notice produced by `ticket`. A newer submission keeps its own notice.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.issued || !self.phase.is_terminal() {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        true
    }
}

/// Where a contact message goes.
pub trait Submitter {
    fn submit(&self, form: ContactForm) -> LocalFuture<Result<(), SubmitError>>;
}

/// Stand-in for a real delivery backend: waits and then reports success.
#[derive(Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
    sleep: Sleep,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration, sleep: Sleep) -> Self {
        Self { delay, sleep }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, form: ContactForm) -> LocalFuture<Result<(), SubmitError>> {
        let wait = (self.sleep)(self.delay);
        Box::pin(async move {
            log::debug!("simulating submission from {}", form.email);
            wait.await;
            Ok(())
        })
    }
}

/// Somewhere a [`ContactState`] lives. `apply` returns `None` once the state
/// is gone, e.g. after the form was unmounted.
pub trait StateHandle {
    fn apply<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R>;
}

/// Send `form` for `ticket`, record the outcome, then hide the notice after
/// [`NOTICE_DURATION`]. A newer submission's notice is left alone.
pub async fn run_submission<S, H>(
    submitter: &S,
    sleep: Sleep,
    state: H,
    ticket: Ticket,
    form: ContactForm,
) where
    S: Submitter,
    H: StateHandle,
{
    let outcome = submitter.submit(form).await;
    if state.apply(|s| s.complete(ticket, outcome)) != Some(true) {
        return;
    }
    sleep(NOTICE_DURATION).await;
    if state.apply(|s| s.dismiss(ticket)) == Some(false) {
        log::debug!("notice for {ticket:?} already replaced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};
    use tokio::time::Instant;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.form.set(Field::Name, "Ada".to_string());
        state.form.set(Field::Email, "ada@example.com".to_string());
        state.form.set(Field::Message, "hello".to_string());
        state
    }

    fn tokio_sleep(d: Duration) -> LocalFuture<()> {
        Box::pin(tokio::time::sleep(d))
    }

    #[test]
    fn test_success_clears_form() {
        let mut state = filled();
        let ticket = state.begin_submit().unwrap();
        assert_eq!(state.phase(), SubmitPhase::Submitting);
        assert!(!state.can_submit());

        assert!(state.complete(ticket, Ok(())));
        assert_eq!(state.phase(), SubmitPhase::Succeeded);
        assert_eq!(state.form, ContactForm::default());
        assert!(state.phase().notice().unwrap().contains("successfully"));
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = filled();
        let before = state.form.clone();
        let ticket = state.begin_submit().unwrap();

        assert!(state.complete(ticket, Err(SubmitError::Rejected("offline".into()))));
        assert_eq!(state.phase(), SubmitPhase::Failed);
        assert_eq!(state.form, before);
        assert!(state.can_submit());
    }

    #[test]
    fn test_double_submit_is_noop() {
        let mut state = filled();
        let ticket = state.begin_submit().unwrap();
        let snapshot = state.clone();

        assert_eq!(state.begin_submit(), Err(ContactError::AlreadySubmitting));
        assert_eq!(state, snapshot);

        assert!(state.complete(ticket, Ok(())));
    }

    #[test]
    fn test_dismiss_returns_to_idle() {
        let mut state = filled();
        let ticket = state.begin_submit().unwrap();
        // nothing to dismiss while in flight
        assert!(!state.dismiss(ticket));

        state.complete(ticket, Ok(()));
        assert!(state.dismiss(ticket));
        assert_eq!(state.phase(), SubmitPhase::Idle);
        assert_eq!(state.phase().notice(), None);
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut state = filled();
        let first = state.begin_submit().unwrap();
        state.complete(first, Err(SubmitError::Rejected("nope".into())));

        // retry while the first notice is still up
        let second = state.begin_submit().unwrap();
        assert!(!state.dismiss(first));
        assert!(!state.complete(first, Ok(())));
        assert_eq!(state.phase(), SubmitPhase::Submitting);

        state.complete(second, Ok(()));
        assert!(!state.dismiss(first));
        assert_eq!(state.phase(), SubmitPhase::Succeeded);
        assert!(state.dismiss(second));
    }

    #[test]
    fn test_field_edits() {
        let mut form = ContactForm::default();
        form.set(Field::Message, "hi there".to_string());
        assert_eq!(form.get(Field::Message), "hi there");
        assert_eq!(form.get(Field::Name), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submitter_waits_then_succeeds() {
        let submitter = SimulatedSubmitter::new(SUBMIT_DELAY, tokio_sleep);
        let start = Instant::now();
        let res = submitter.submit(filled().form).await;
        assert_eq!(res, Ok(()));
        assert!(start.elapsed() >= SUBMIT_DELAY);
    }

    /// Test handle that timestamps every phase change.
    #[derive(Clone, Default)]
    struct Recorded {
        state: Rc<RefCell<ContactState>>,
        changes: Rc<RefCell<Vec<(Instant, SubmitPhase)>>>,
    }

    impl Recorded {
        fn filled() -> Self {
            Self {
                state: Rc::new(RefCell::new(filled())),
                ..Default::default()
            }
        }

        fn phase(&self) -> SubmitPhase {
            self.state.borrow().phase()
        }

        fn changed_to(&self, phase: SubmitPhase) -> Vec<Instant> {
            self.changes
                .borrow()
                .iter()
                .filter(|(_, p)| *p == phase)
                .map(|(at, _)| *at)
                .collect()
        }
    }

    impl StateHandle for Recorded {
        fn apply<R>(&self, f: impl FnOnce(&mut ContactState) -> R) -> Option<R> {
            let mut state = self.state.borrow_mut();
            let before = state.phase();
            let res = f(&mut *state);
            if state.phase() != before {
                self.changes.borrow_mut().push((Instant::now(), state.phase()));
            }
            Some(res)
        }
    }

    /// Waits like the simulated one but reports a fixed outcome.
    struct Scripted(Result<(), SubmitError>);

    impl Submitter for Scripted {
        fn submit(&self, _form: ContactForm) -> LocalFuture<Result<(), SubmitError>> {
            let outcome = self.0.clone();
            Box::pin(async move {
                tokio::time::sleep(SUBMIT_DELAY).await;
                outcome
            })
        }
    }

    fn start(handle: &Recorded) -> (Ticket, ContactForm) {
        handle
            .apply(|s| (s.begin_submit().unwrap(), s.form.clone()))
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_dismissed_after_interval() {
        let submitter = SimulatedSubmitter::new(SUBMIT_DELAY, tokio_sleep);
        let handle = Recorded::filled();
        let (ticket, form) = start(&handle);

        let watch = async {
            tokio::time::sleep(SUBMIT_DELAY + NOTICE_DURATION - Duration::from_millis(1)).await;
            assert_eq!(handle.phase(), SubmitPhase::Succeeded);
        };
        tokio::join!(
            run_submission(&submitter, tokio_sleep, handle.clone(), ticket, form),
            watch
        );

        assert_eq!(handle.phase(), SubmitPhase::Idle);
        let shown = handle.changed_to(SubmitPhase::Succeeded);
        let hidden = handle.changed_to(SubmitPhase::Idle);
        assert_eq!(shown.len(), 1);
        assert_eq!(hidden.len(), 1);
        let up_for = hidden[0] - shown[0];
        assert!(up_for >= NOTICE_DURATION);
        assert!(up_for < NOTICE_DURATION + Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_old_timer_leaves_newer_notice_up() {
        let begin = Instant::now();
        let handle = Recorded::filled();
        let (first, form) = start(&handle);

        // fails at 2s, its notice would go at 7s
        let failing = Scripted(Err(SubmitError::Rejected("offline".into())));
        let first_run = run_submission(&failing, tokio_sleep, handle.clone(), first, form);

        // retried at 4s, succeeds at 6s, notice goes at 11s
        let retry = async {
            tokio::time::sleep(Duration::from_millis(4000)).await;
            assert_eq!(handle.phase(), SubmitPhase::Failed);
            let (second, form) = start(&handle);
            run_submission(&Scripted(Ok(())), tokio_sleep, handle.clone(), second, form).await;
        };

        let watch = async {
            tokio::time::sleep(Duration::from_millis(7500)).await;
            assert_eq!(handle.phase(), SubmitPhase::Succeeded);
            tokio::time::sleep(Duration::from_millis(3499)).await;
            assert_eq!(handle.phase(), SubmitPhase::Succeeded);
        };

        tokio::join!(first_run, retry, watch);

        assert_eq!(handle.phase(), SubmitPhase::Idle);
        let hidden = handle.changed_to(SubmitPhase::Idle);
        assert_eq!(hidden.len(), 1);
        assert!(hidden[0] - begin >= Duration::from_millis(11000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_gone_state_stops_the_run() {
        struct Gone;
        impl StateHandle for Gone {
            fn apply<R>(&self, _f: impl FnOnce(&mut ContactState) -> R) -> Option<R> {
                None
            }
        }

        let begin = Instant::now();
        let submitter = SimulatedSubmitter::new(SUBMIT_DELAY, tokio_sleep);
        let mut state = filled();
        let ticket = state.begin_submit().unwrap();
        run_submission(&submitter, tokio_sleep, Gone, ticket, state.form.clone()).await;

        // no notice timer once the form is gone
        assert!(begin.elapsed() < SUBMIT_DELAY + NOTICE_DURATION);
    }
}
