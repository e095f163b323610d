use std::sync::Arc;

/// One unit of work: an argument for the worker function plus its
/// ownership disposition.
///
/// Whichever party consumes the task, a worker after running it or
/// [`Pool::end`](crate::Pool::end) while discarding the queue, simply
/// drops it: an `Owned` argument is destroyed exactly once, a `Shared`
/// one only loses the pool's reference.
#[derive(Debug)]
pub enum Task<T> {
    /// The pool owns the argument and releases it after the task is
    /// consumed.
    Owned(T),
    /// The caller retains ownership; the pool never destroys the
    /// argument.
    Shared(Arc<T>),
}

impl<T> Task<T> {
    /// Returns a shared reference to the argument.
    pub fn arg(&self) -> &T {
        match self {
            Task::Owned(arg) => arg,
            Task::Shared(arg) => arg,
        }
    }
}
