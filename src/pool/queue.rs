use super::task::Task;
use std::collections::VecDeque;

/// FIFO queue of pending tasks, O(1) push-back and pop-front.
///
/// Only mutated while the pool lock is held; the queue itself carries
/// no synchronization.
pub(crate) struct TaskQueue<T> {
    tasks: VecDeque<Task<T>>,
}

impl<T> TaskQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    pub(crate) fn push(&mut self, task: Task<T>) {
        self.tasks.push_back(task);
    }

    pub(crate) fn pop(&mut self) -> Option<Task<T>> {
        self.tasks.pop_front()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drops every queued task, returning how many were discarded.
    pub(crate) fn clear(&mut self) -> usize {
        let discarded = self.tasks.len();
        self.tasks.clear();
        discarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_enqueue_order() {
        let mut queue = TaskQueue::new();
        for i in 0..5 {
            queue.push(Task::Owned(i));
        }
        for i in 0..5 {
            match queue.pop() {
                Some(Task::Owned(v)) => assert_eq!(v, i),
                other => panic!("unexpected pop result: {:?}", other),
            }
        }
        assert!(queue.is_empty());
        assert!(queue.pop().is_none());
    }

    #[test]
    fn clear_reports_discard_count() {
        let mut queue = TaskQueue::new();
        assert_eq!(queue.clear(), 0);
        for i in 0..3 {
            queue.push(Task::Owned(i));
        }
        assert_eq!(queue.clear(), 3);
        assert!(queue.is_empty());
    }
}
