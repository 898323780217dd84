use tattler::testing::Probe;
use tattler::{Notifier, Outcome, WorkPolicy};

/// Builds a notifier wired to recording probes, runs a unit of work
/// through it and asserts on what each probe saw.
pub struct CaseBuilder<T, E> {
    name: Option<String>,
    policy: WorkPolicy,
    work: Box<dyn FnOnce() -> Outcome<T, E>>,

    /// Whether the matching observer slot gets filled at all.
    observe_success: bool,
    observe_failure: bool,

    expect_success: Vec<T>,
    expect_failure: Vec<E>,
}

impl<T, E> CaseBuilder<T, E>
where
    T: Clone + PartialEq + std::fmt::Debug + Send + 'static,
    E: Clone + PartialEq + std::fmt::Debug + Send + 'static,
{
    pub fn new<W>(work: W) -> Self
    where
        W: FnOnce() -> Outcome<T, E> + 'static,
    {
        Self {
            name: None,
            policy: WorkPolicy::Always,
            work: Box::new(work),
            observe_success: true,
            observe_failure: true,
            expect_success: vec![],
            expect_failure: vec![],
        }
    }

    pub fn name<S: ToString>(mut self, name: S) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn policy(mut self, policy: WorkPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn without_success_observer(mut self) -> Self {
        self.observe_success = false;
        self
    }

    pub fn without_failure_observer(mut self) -> Self {
        self.observe_failure = false;
        self
    }

    pub fn expect_success(mut self, value: T) -> Self {
        self.expect_success.push(value);
        self
    }

    pub fn expect_failure(mut self, error: E) -> Self {
        self.expect_failure.push(error);
        self
    }

    pub fn run(self) -> anyhow::Result<()> {
        let success = Probe::new();
        let failure = Probe::new();

        let mut notifier = Notifier::new().policy(self.policy);
        if self.observe_success {
            notifier = notifier.on_success(success.clone());
        }
        if self.observe_failure {
            notifier = notifier.on_failure(failure.clone());
        }

        notifier.notify(self.work);

        let name = self.name.unwrap_or_default();
        assert!(
            success.calls() + failure.calls() <= 1,
            "test case {}: more than one observer invocation",
            name
        );
        assert_eq!(
            success.seen(),
            self.expect_success,
            "test case {}: success observations",
            name
        );
        assert_eq!(
            failure.seen(),
            self.expect_failure,
            "test case {}: failure observations",
            name
        );

        Ok(())
    }
}
