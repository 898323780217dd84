use crate::{
    observer::{BoxObserver, Observer},
    outcome::{IntoOutcome, Outcome},
};
use log::debug;

/// Controls whether `notify` runs the unit of work when neither
/// observer slot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkPolicy {
    /// Run the work regardless of registered observers.
    Always,
    /// Skip the work entirely when nobody would see its outcome.
    SkipUnobserved,
}

/// Single-shot, stateless dispatcher: performs a unit of work once and
/// routes its outcome to at most one of two optional observers. No
/// state is retained between calls.
///
/// ```rust
/// use tattler::{Notifier, Outcome};
///
/// let notifier = Notifier::new()
///     .on_success(|value: i32| println!("got {}", value))
///     .on_failure(|error: String| eprintln!("failed: {}", error));
///
/// notifier.notify(|| Outcome::<i32, String>::Success(42));
/// ```
pub struct Notifier<T, E> {
    /// Observer slot for `Success` outcomes. Empty means "do not
    /// notify on success".
    on_success: Option<BoxObserver<T>>,

    /// Observer slot for `Failure` outcomes. Empty means the failure
    /// is dropped silently, so callers needing failure visibility
    /// must fill this slot.
    on_failure: Option<BoxObserver<E>>,

    policy: WorkPolicy,
}

impl<T, E> Default for Notifier<T, E> {
    fn default() -> Self {
        Self {
            on_success: None,
            on_failure: None,
            policy: WorkPolicy::Always,
        }
    }
}

impl<T, E> Notifier<T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the success observer.
    pub fn on_success<O>(mut self, observer: O) -> Self
    where
        O: Observer<T> + 'static,
    {
        self.on_success = Some(BoxObserver::new(observer));
        self
    }

    /// Registers the failure observer.
    pub fn on_failure<O>(mut self, observer: O) -> Self
    where
        O: Observer<E> + 'static,
    {
        self.on_failure = Some(BoxObserver::new(observer));
        self
    }

    /// Sets the work policy, `WorkPolicy::Always` if never called.
    pub fn policy(mut self, policy: WorkPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Indicates if at least one observer slot is filled.
    pub fn is_observed(&self) -> bool {
        self.on_success.is_some() || self.on_failure.is_some()
    }

    /// Performs the work at most once and routes its outcome to the
    /// matching observer, if one was registered. A panic raised inside
    /// `work` propagates to the caller, it is never rerouted into the
    /// failure slot.
    pub fn notify<W, O>(&self, work: W)
    where
        W: FnOnce() -> O,
        O: IntoOutcome<T, E>,
    {
        if self.policy == WorkPolicy::SkipUnobserved && !self.is_observed() {
            debug!("Notifier::notify - no observers registered, work skipped");
            return;
        }

        self.dispatch(work().into_outcome());
    }

    /// Routes an already-computed outcome to the matching observer
    /// slot. The non-matching slot is never touched; a missing slot
    /// drops the payload silently.
    pub fn dispatch(&self, outcome: Outcome<T, E>) {
        match outcome {
            Outcome::Success(value) => match &self.on_success {
                Some(observer) => observer.observe(value),
                None => debug!("Notifier::dispatch - success dropped, no observer"),
            },
            Outcome::Failure(error) => match &self.on_failure {
                Some(observer) => observer.observe(error),
                None => debug!("Notifier::dispatch - failure dropped, no observer"),
            },
        }
    }
}
