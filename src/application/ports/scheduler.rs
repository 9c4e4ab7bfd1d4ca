use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub type ScheduledFn = Box<dyn FnOnce() + Send + 'static>;

/// Runs a closure once after a delay.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: ScheduledFn) -> ScheduledTask;
}

/// Handle to a scheduled closure.
///
/// Adapters must check [`ScheduledTask::is_cancelled`] (through the shared
/// flag) before running the closure. An optional abort hook lets an adapter
/// also tear down whatever is driving the timer.
pub struct ScheduledTask {
    cancelled: Arc<AtomicBool>,
    abort: Option<Box<dyn Fn() + Send + Sync>>,
}

impl ScheduledTask {
    pub fn new(cancelled: Arc<AtomicBool>) -> Self {
        Self {
            cancelled,
            abort: None,
        }
    }

    pub fn with_abort(mut self, abort: impl Fn() + Send + Sync + 'static) -> Self {
        self.abort = Some(Box::new(abort));
        self
    }

    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(abort) = &self.abort {
            abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
