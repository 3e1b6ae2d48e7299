//=========================================================================
// Deferred Queue
//=========================================================================
//
// One-shot tasks scheduled against simulated tick time.
//
// Scenes and the game flow controller each own a queue. Scheduled
// payloads come back out of `advance()` once enough tick time has
// elapsed. Dropping or clearing the queue cancels everything still
// pending, which ties each delayed callback to the lifetime of its owner.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== DeferredQueue =======================================================

struct DeferredTask<T> {
    /// Scheduling order; breaks ties between equal due times.
    seq: u64,
    due: Duration,
    payload: T,
}

/// Queue of payloads released after a delay measured in tick time.
pub struct DeferredQueue<T> {
    tasks: Vec<DeferredTask<T>>,
    elapsed: Duration,
    next_seq: u64,
}

impl<T> DeferredQueue<T> {
    /// Creates an empty queue with its clock at zero.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            elapsed: Duration::ZERO,
            next_seq: 0,
        }
    }

    /// Schedules `payload` to be released `delay` from now.
    pub fn schedule(&mut self, delay: Duration, payload: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(DeferredTask {
            seq,
            due: self.elapsed + delay,
            payload,
        });
    }

    /// Cancels every pending task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Advances the clock by `dt` and returns payloads that became due,
    /// earliest first (ties in scheduling order).
    pub fn advance(&mut self, dt: Duration) -> Vec<T> {
        self.elapsed += dt;
        let now = self.elapsed;

        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.due <= now);
        self.tasks = pending;

        due.sort_by_key(|task| (task.due, task.seq));
        due.into_iter().map(|task| task.payload).collect()
    }

    /// Time accumulated through `advance()`.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn releases_after_delay() {
        let mut queue = DeferredQueue::new();
        queue.schedule(Duration::from_millis(500), "exit");

        // 31 ticks = 496ms
        for _ in 0..31 {
            assert!(queue.advance(TICK).is_empty());
        }
        assert_eq!(queue.advance(TICK), vec!["exit"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn zero_delay_releases_on_next_advance() {
        let mut queue = DeferredQueue::new();
        queue.schedule(Duration::ZERO, 1);
        assert_eq!(queue.advance(Duration::ZERO), vec![1]);
    }

    #[test]
    fn releases_each_task_once() {
        let mut queue = DeferredQueue::new();
        queue.schedule(TICK, 'a');

        assert_eq!(queue.advance(TICK), vec!['a']);
        assert!(queue.advance(TICK).is_empty());
    }

    #[test]
    fn orders_by_due_time_then_schedule_order() {
        let mut queue = DeferredQueue::new();
        queue.schedule(Duration::from_millis(30), "late");
        queue.schedule(Duration::from_millis(10), "early");
        queue.schedule(Duration::from_millis(10), "early-second");

        assert_eq!(
            queue.advance(Duration::from_millis(50)),
            vec!["early", "early-second", "late"]
        );
    }

    #[test]
    fn delay_is_relative_to_current_clock() {
        let mut queue = DeferredQueue::new();
        queue.advance(Duration::from_millis(100));
        queue.schedule(Duration::from_millis(50), ());

        assert!(queue.advance(Duration::from_millis(49)).is_empty());
        assert_eq!(queue.advance(Duration::from_millis(1)).len(), 1);
        assert_eq!(queue.elapsed(), Duration::from_millis(150));
    }

    #[test]
    fn cancel_all_keeps_clock_running() {
        let mut queue = DeferredQueue::new();
        queue.schedule(TICK, "dropped");
        queue.cancel_all();

        queue.schedule(TICK, "kept");
        assert_eq!(queue.advance(TICK), vec!["kept"]);
        assert_eq!(queue.elapsed(), TICK);
    }

    #[test]
    fn cancel_all_clears_queue() {
        let mut queue = DeferredQueue::new();
        queue.schedule(TICK, 1);
        queue.schedule(TICK * 2, 2);
        assert_eq!(queue.len(), 2);

        queue.cancel_all();
        assert!(queue.is_empty());
        assert!(queue.advance(TICK * 4).is_empty());
    }
}
