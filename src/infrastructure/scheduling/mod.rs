mod manual_scheduler;
mod tokio_scheduler;

pub use manual_scheduler::ManualScheduler;
pub use tokio_scheduler::TokioScheduler;
