#![deny(missing_docs)]
//! A fixed-size worker-thread pool.
//!
//! A bounded set of worker threads pulls tasks from a shared FIFO queue
//! and runs each one through a single pool-wide worker function. The
//! pool supports blocking until the queue drains ([`Pool::wait`]) and
//! one-shot bulk cancellation ([`Pool::end`]), which discards any task
//! not yet dispatched to a worker.

pub use error::{ErrorKind, Result};
pub use logger::Logger;
pub use pool::{Pool, PoolHandle, Task};

mod error;
mod logger;
mod pool;
