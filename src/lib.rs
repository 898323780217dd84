//! Success/failure notification for closures: a unit of work produces
//! exactly one [`Outcome`], and [`Notifier`] routes it to at most one
//! of two optional observers.

pub mod dispatch;
pub mod notifier;
pub mod observer;
pub mod outcome;
pub mod testing;

pub use notifier::{Notifier, WorkPolicy};
pub use observer::{BoxObserver, LogObserver, Observer};
pub use outcome::{IntoOutcome, Outcome};
