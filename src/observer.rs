use log::debug;
use std::fmt::Debug;

/// Caller-supplied handler invoked at most once with the payload of a
/// single outcome variant. Plain closures implement it through the
/// blanket impl below.
///
/// ```rust
/// use tattler::observer::Observer;
///
/// let print = |value: i32| println!("got {}", value);
/// print.observe(42);
/// ```
pub trait Observer<T>: Send + Sync {
    fn observe(&self, value: T);
}

impl<F, T> Observer<T> for F
where
    F: Fn(T) + Send + Sync,
{
    fn observe(&self, value: T) {
        self(value)
    }
}

/// Boxed, type-erased observer so a notifier slot can hold any shape
/// of handler.
pub struct BoxObserver<T>(pub Box<dyn Observer<T>>);

impl<T> BoxObserver<T> {
    pub fn new<O>(observer: O) -> Self
    where
        O: Observer<T> + 'static,
    {
        Self(Box::new(observer))
    }
}

impl<T> Observer<T> for BoxObserver<T> {
    fn observe(&self, value: T) {
        self.0.observe(value)
    }
}

/// Observer that only logs what it sees. Handy as a failure slot when
/// the caller wants visibility without custom handling.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {}

impl<T> Observer<T> for LogObserver
where
    T: Debug,
{
    fn observe(&self, value: T) {
        debug!("LogObserver::observe - value: {:?}", value);
    }
}
