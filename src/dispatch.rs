use crate::{
    notifier::Notifier,
    outcome::{IntoOutcome, Outcome},
};
use anyhow::{anyhow, Context};
use log::error;
use std::{
    sync::mpsc::{self, Receiver},
    thread::{self, JoinHandle},
};

/// Handle to a unit of work running on a worker thread. The single
/// outcome crosses back through a bounded one-shot channel, so it is
/// fully computed before any observer can run.
pub struct Background<T, E> {
    rx: Receiver<Outcome<T, E>>,
    handle: JoinHandle<()>,
}

/// Runs the work on a spawned worker thread and returns a handle for
/// collecting its outcome.
pub fn spawn<W, O, T, E>(work: W) -> Background<T, E>
where
    W: FnOnce() -> O + Send + 'static,
    O: IntoOutcome<T, E>,
    T: Send + 'static,
    E: Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);

    let handle = thread::spawn(move || {
        if tx.send(work().into_outcome()).is_err() {
            error!("dispatch::spawn - receiver dropped before outcome handoff");
        }
    });

    Background { rx, handle }
}

impl<T, E> Background<T, E> {
    /// Blocks until the worker hands its outcome over. A worker that
    /// died before producing one surfaces as an error, never as a
    /// fabricated failure outcome.
    pub fn wait(self) -> anyhow::Result<Outcome<T, E>> {
        let outcome = self
            .rx
            .recv()
            .context("worker finished without producing an outcome")?;

        self.handle
            .join()
            .map_err(|_| anyhow!("worker thread panicked"))?;

        Ok(outcome)
    }

    /// Waits for the work to complete, then routes the outcome through
    /// the notifier on the calling thread.
    pub fn deliver(self, notifier: &Notifier<T, E>) -> anyhow::Result<()> {
        let outcome = self.wait()?;
        notifier.dispatch(outcome);
        Ok(())
    }
}

/// Fire-and-forget variant: both the work and the observer invocation
/// happen on the worker thread.
pub fn spawn_notify<W, O, T, E>(notifier: Notifier<T, E>, work: W) -> JoinHandle<()>
where
    W: FnOnce() -> O + Send + 'static,
    O: IntoOutcome<T, E>,
    T: 'static,
    E: 'static,
{
    thread::spawn(move || notifier.notify(work))
}
