//! Worker-thread pool over a shared FIFO task queue.
//!
//! All mutable pool state lives behind one mutex paired with one
//! condition variable. `enqueue` wakes a single idle worker; task
//! completion and cancellation broadcast, because idle workers and
//! [`Pool::wait`] callers block on the same condition variable and a
//! single wakeup could strand one class.

pub use self::task::Task;

mod queue;
mod task;
mod worker;

use crate::{ErrorKind, Result};
use queue::TaskQueue;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;

pub(crate) struct Shared<T> {
    pub(crate) state: Mutex<PoolState<T>>,
    pub(crate) cond: Condvar,
    pub(crate) worker_fn: Box<dyn Fn(&T) + Send + Sync>,
}

pub(crate) struct PoolState<T> {
    pub(crate) queue: TaskQueue<T>,
    /// Tasks enqueued but not yet fully executed. Incremented on
    /// enqueue, decremented only after the worker function returns.
    pub(crate) outstanding: usize,
    /// Monotonic: flips false to true exactly once, never reset.
    pub(crate) cancelled: bool,
}

/// A fixed-size worker-thread pool.
///
/// Every task is executed by the single worker function supplied to
/// [`Pool::start`]. Tasks are delivered in enqueue order, each exactly
/// once, either to a worker or to the final discard pass in
/// [`Pool::end`].
pub struct Pool<T> {
    shared: Arc<Shared<T>>,
    workers: Vec<Worker>,
}

impl<T: Send + Sync + 'static> Pool<T> {
    /// Starts a pool running `worker_fn` on `threads` worker threads.
    ///
    /// Workers begin pulling tasks immediately; the call returns
    /// without waiting for them.
    ///
    /// # Errors
    ///
    /// Returns an error if `threads` is zero or if a worker thread
    /// fails to spawn. On spawn failure every previously-spawned
    /// worker is cancelled and joined, so no partial pool is left
    /// runnable.
    pub fn start<F>(worker_fn: F, threads: u32) -> Result<Self>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        if threads == 0 {
            return Err(ErrorKind::ZeroThreads);
        }

        let shared = Arc::new(Shared {
            state: Mutex::new(PoolState {
                queue: TaskQueue::new(),
                outstanding: 0,
                cancelled: false,
            }),
            cond: Condvar::new(),
            worker_fn: Box::new(worker_fn),
        });

        let mut pool = Self {
            shared,
            workers: Vec::with_capacity(threads as usize),
        };
        for id in 0..threads {
            match Worker::spawn(id, Arc::clone(&pool.shared)) {
                Ok(worker) => pool.workers.push(worker),
                Err(err) => {
                    pool.shutdown();
                    return Err(ErrorKind::Io(err));
                }
            }
        }
        log::debug!("pool started with {} worker threads", threads);
        Ok(pool)
    }

    /// Appends one task to the queue and wakes an idle worker.
    ///
    /// Never blocks beyond the brief lock hold. Safe to call from any
    /// thread, including from inside the worker function through a
    /// [`PoolHandle`]; enqueueing does not itself run the task.
    pub fn enqueue(&self, task: Task<T>) {
        enqueue(&self.shared, task);
    }

    /// Blocks until every enqueued task has finished executing or the
    /// pool is cancelled.
    ///
    /// Purely an observer: it runs no tasks. Multiple concurrent
    /// callers are all released together when the queue drains. The
    /// task a worker is currently running counts as outstanding, so
    /// calling this from inside the worker function blocks until
    /// cancellation.
    pub fn wait(&self) {
        wait(&self.shared);
    }

    /// Returns a cloneable handle for enqueueing and waiting from
    /// other threads, including from inside the worker function.
    pub fn handle(&self) -> PoolHandle<T> {
        PoolHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Shuts the pool down.
    ///
    /// Sets the cancellation flag, wakes every blocked thread (idle
    /// workers and [`Pool::wait`] callers alike), joins all workers,
    /// then discards any task still queued. A task already dispatched
    /// to a worker runs to completion; tasks never dispatched are
    /// dropped without executing, which releases [`Task::Owned`]
    /// arguments and only drops the pool's reference to
    /// [`Task::Shared`] ones.
    ///
    /// Consuming `self` makes use-after-end and double-end impossible.
    /// The worker function must not end its own pool; give it a
    /// [`PoolHandle`] instead, which cannot.
    pub fn end(mut self) {
        self.shutdown();
    }
}

impl<T> Pool<T> {
    fn shutdown(&mut self) {
        {
            let mut state = self.shared.state.lock().unwrap();
            state.cancelled = true;
            self.shared.cond.notify_all();
        }

        for worker in &mut self.workers {
            if let Some(handle) = worker.handle.take() {
                if handle.join().is_err() {
                    log::error!("worker {} terminated by panic", worker.id);
                }
            }
        }

        let discarded = self.shared.state.lock().unwrap().queue.clear();
        if discarded > 0 {
            log::debug!("discarded {} pending tasks on shutdown", discarded);
        }
    }
}

impl<T> Drop for Pool<T> {
    fn drop(&mut self) {
        // `end` already took the handles; only an un-ended pool still
        // has workers to stop.
        if self.workers.iter().any(|w| w.handle.is_some()) {
            self.shutdown();
        }
    }
}

/// A lightweight, cloneable handle to a running [`Pool`].
///
/// A handle can enqueue and wait but cannot end the pool, so handing
/// one to the worker function cannot create a self-join deadlock.
/// Tasks enqueued through a handle after the pool has ended are never
/// executed; they are dropped when the last handle goes away.
pub struct PoolHandle<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for PoolHandle<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Send + Sync + 'static> PoolHandle<T> {
    /// Appends one task to the queue and wakes an idle worker; see
    /// [`Pool::enqueue`].
    pub fn enqueue(&self, task: Task<T>) {
        enqueue(&self.shared, task);
    }

    /// Blocks until the pool drains or is cancelled; see
    /// [`Pool::wait`].
    pub fn wait(&self) {
        wait(&self.shared);
    }
}

fn enqueue<T>(shared: &Shared<T>, task: Task<T>) {
    let mut state = shared.state.lock().unwrap();
    state.queue.push(task);
    state.outstanding += 1;
    // Only an idle worker cares about a new task, so one wakeup is
    // enough here.
    shared.cond.notify_one();
}

fn wait<T>(shared: &Shared<T>) {
    let mut state = shared.state.lock().unwrap();
    while !state.cancelled && state.outstanding > 0 {
        state = shared.cond.wait(state).unwrap();
    }
}

struct Worker {
    id: u32,
    handle: Option<thread::JoinHandle<()>>,
}

impl Worker {
    fn spawn<T: Send + Sync + 'static>(
        id: u32,
        shared: Arc<Shared<T>>,
    ) -> std::io::Result<Self> {
        let handle = thread::Builder::new()
            .name(format!("workpool-worker-{}", id))
            .spawn(move || worker::run(id, shared))?;
        Ok(Self {
            id,
            handle: Some(handle),
        })
    }
}
