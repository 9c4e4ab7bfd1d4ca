use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::application::ports::{ScheduledFn, ScheduledTask, Scheduler};

struct Entry {
    due: Duration,
    seq: u64,
    cancelled: Arc<AtomicBool>,
    task: ScheduledFn,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    queue: Vec<Entry>,
}

/// Virtual-clock scheduler. Nothing fires until [`ManualScheduler::advance`]
/// moves the clock past a task's due time.
#[derive(Default)]
pub struct ManualScheduler {
    clock: Mutex<Clock>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves virtual time forward, running every due task in due order.
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now + by;
        let mut fired = 0;

        loop {
            let next = {
                let mut clock = self.lock();
                clock.queue.retain(|e| !e.cancelled.load(Ordering::SeqCst));
                let position = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.seq))
                    .map(|(i, _)| i);

                match position {
                    Some(i) => {
                        let entry = clock.queue.swap_remove(i);
                        clock.now = clock.now.max(entry.due);
                        Some(entry)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };

            // Run outside the lock; tasks may schedule more work.
            match next {
                Some(entry) => {
                    (entry.task)();
                    fired += 1;
                }
                None => break,
            }
        }

        fired
    }

    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Scheduled tasks that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.lock()
            .queue
            .iter()
            .filter(|e| !e.cancelled.load(Ordering::SeqCst))
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledFn) -> ScheduledTask {
        let cancelled = Arc::new(AtomicBool::new(false));
        let mut clock = self.lock();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.queue.push(Entry {
            due,
            seq,
            cancelled: Arc::clone(&cancelled),
            task,
        });

        ScheduledTask::new(cancelled)
    }
}
