use std::sync::{Arc, Mutex};
use std::time::Duration;

use cisec_nexus::application::ports::{ScheduledFn, Scheduler};
use cisec_nexus::infrastructure::scheduling::ManualScheduler;

fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> ScheduledFn) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let make = move |label: &'static str| -> Box<dyn FnOnce() + Send> {
        let sink = Arc::clone(&sink);
        Box::new(move || sink.lock().unwrap().push(label))
    };
    (log, make)
}

#[test]
fn given_scheduled_task_when_clock_not_advanced_then_nothing_runs() {
    let scheduler = ManualScheduler::new();
    let (log, make) = recorder();

    scheduler.schedule(Duration::from_millis(10), make("a"));

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn given_tasks_when_advancing_then_runs_due_ones_in_due_order() {
    let scheduler = ManualScheduler::new();
    let (log, make) = recorder();

    scheduler.schedule(Duration::from_millis(30), make("late"));
    scheduler.schedule(Duration::from_millis(10), make("early"));
    scheduler.schedule(Duration::from_millis(100), make("never"));

    let fired = scheduler.advance(Duration::from_millis(50));

    assert_eq!(fired, 2);
    assert_eq!(*log.lock().unwrap(), vec!["early", "late"]);
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(scheduler.now(), Duration::from_millis(50));
}

#[test]
fn given_equal_due_times_when_advancing_then_runs_in_schedule_order() {
    let scheduler = ManualScheduler::new();
    let (log, make) = recorder();

    scheduler.schedule(Duration::from_millis(5), make("first"));
    scheduler.schedule(Duration::from_millis(5), make("second"));
    scheduler.advance(Duration::from_millis(5));

    assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn given_cancelled_task_when_advancing_then_it_does_not_run() {
    let scheduler = ManualScheduler::new();
    let (log, make) = recorder();

    let handle = scheduler.schedule(Duration::from_millis(10), make("a"));
    handle.cancel();

    assert!(handle.is_cancelled());
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.advance(Duration::from_secs(1)), 0);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn given_task_scheduling_another_when_advancing_far_enough_then_both_run() {
    let scheduler = Arc::new(ManualScheduler::new());
    let (log, make) = recorder();
    let inner = make("inner");
    let outer_log = Arc::clone(&log);
    let nested = Arc::clone(&scheduler);

    scheduler.schedule(
        Duration::from_millis(10),
        Box::new(move || {
            outer_log.lock().unwrap().push("outer");
            nested.schedule(Duration::from_millis(10), inner);
        }),
    );

    assert_eq!(scheduler.advance(Duration::from_millis(25)), 2);
    assert_eq!(*log.lock().unwrap(), vec!["outer", "inner"]);
}
