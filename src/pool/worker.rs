use super::Shared;
use std::sync::Arc;

/// The loop every worker thread runs: sleep until a task arrives or
/// the pool is cancelled, run the task outside the lock, report the
/// completion, repeat.
pub(crate) fn run<T>(id: u32, shared: Arc<Shared<T>>) {
    loop {
        let task = {
            let mut state = shared.state.lock().unwrap();
            while !state.cancelled && state.queue.is_empty() {
                state = shared.cond.wait(state).unwrap();
            }
            if state.cancelled {
                log::debug!("worker {} exiting on cancellation", id);
                return;
            }
            state.queue.pop().expect("queue non-empty after wait")
        };

        // The central rule: the worker function runs with the lock
        // released, so enqueue/wait/end stay callable while work runs
        // and the worker function may itself enqueue.
        (shared.worker_fn)(task.arg());
        drop(task);

        let mut state = shared.state.lock().unwrap();
        state.outstanding -= 1;
        // Broadcast: wait callers and idle workers share the one
        // condition variable, and either class may need this wakeup.
        shared.cond.notify_all();
    }
}
