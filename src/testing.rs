use crate::observer::Observer;
use std::sync::{Arc, Mutex};

/// Recording observer for tests. Clones share the same log of
/// observed values, so a probe can be handed to a notifier while the
/// test keeps its own handle for assertions.
pub struct Probe<T> {
    seen: Arc<Mutex<Vec<T>>>,
}

impl<T> Probe<T> {
    pub fn new() -> Self {
        Self {
            seen: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Number of times the probe was invoked.
    pub fn calls(&self) -> usize {
        self.seen.lock().expect("probe lock poisoned").len()
    }

    /// Every value observed so far, in invocation order.
    pub fn seen(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.seen.lock().expect("probe lock poisoned").clone()
    }
}

impl<T> Default for Probe<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl to avoid a T: Clone bound.
impl<T> Clone for Probe<T> {
    fn clone(&self) -> Self {
        Self {
            seen: self.seen.clone(),
        }
    }
}

impl<T> Observer<T> for Probe<T>
where
    T: Send,
{
    fn observe(&self, value: T) {
        self.seen.lock().expect("probe lock poisoned").push(value);
    }
}
