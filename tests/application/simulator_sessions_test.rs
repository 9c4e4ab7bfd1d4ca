use std::sync::Arc;
use std::time::Duration;

use cisec_nexus::application::services::{ResponseSelector, SimulatorSessions};
use cisec_nexus::domain::{PATIENT_OPENING_LINE, ReplyPool, SessionId};
use cisec_nexus::infrastructure::random::SeededRandomSource;
use cisec_nexus::infrastructure::scheduling::ManualScheduler;

const LATENCY: Duration = Duration::from_millis(1500);
const MAX_SESSIONS: usize = 16;

fn sessions_with_capacity(
    scheduler: Arc<ManualScheduler>,
    max_sessions: usize,
) -> SimulatorSessions {
    let selector = Arc::new(ResponseSelector::new(
        ReplyPool::patient_maria(),
        Arc::new(SeededRandomSource::new(3)),
    ));
    SimulatorSessions::new(
        selector,
        scheduler,
        LATENCY,
        PATIENT_OPENING_LINE,
        max_sessions,
    )
}

fn sessions(scheduler: Arc<ManualScheduler>) -> SimulatorSessions {
    sessions_with_capacity(scheduler, MAX_SESSIONS)
}

#[test]
fn given_registry_when_starting_sessions_then_each_gets_own_conversation() {
    let scheduler = Arc::new(ManualScheduler::new());
    let sessions = sessions(scheduler.clone());

    let (first_id, first) = sessions.start();
    let (second_id, second) = sessions.start();
    first.send_message("hola");

    assert_ne!(first_id, second_id);
    assert_eq!(sessions.len(), 2);
    assert_eq!(first.conversation().len(), 2);
    assert_eq!(second.conversation().len(), 1);
}

#[test]
fn given_started_session_when_looking_up_then_returns_same_controller() {
    let sessions = sessions(Arc::new(ManualScheduler::new()));
    let (id, controller) = sessions.start();

    let found = sessions.get(&id).unwrap();

    assert!(Arc::ptr_eq(&found, &controller));
}

#[test]
fn given_unknown_id_when_looking_up_then_returns_none() {
    let sessions = sessions(Arc::new(ManualScheduler::new()));
    assert!(sessions.get(&SessionId::new()).is_none());
}

#[test]
fn given_session_with_pending_reply_when_ended_then_reply_is_cancelled() {
    let scheduler = Arc::new(ManualScheduler::new());
    let sessions = sessions(scheduler.clone());
    let (id, controller) = sessions.start();
    controller.send_message("tengo dolor");
    drop(controller);

    assert!(sessions.end(&id));

    assert!(sessions.is_empty());
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.advance(LATENCY), 0);
}

#[test]
fn given_ended_session_when_ending_again_then_returns_false() {
    let sessions = sessions(Arc::new(ManualScheduler::new()));
    let (id, _) = sessions.start();

    assert!(sessions.end(&id));
    assert!(!sessions.end(&id));
}

#[test]
fn given_many_abandoned_sessions_when_starting_more_then_registry_stays_bounded() {
    let scheduler = Arc::new(ManualScheduler::new());
    let sessions = sessions(scheduler.clone());

    let ids: Vec<SessionId> = (0..10 * MAX_SESSIONS).map(|_| sessions.start().0).collect();
    scheduler.advance(Duration::from_secs(24 * 60 * 60));

    assert_eq!(sessions.len(), MAX_SESSIONS);
    assert!(sessions.get(&ids[0]).is_none());
    assert!(sessions.get(&ids[ids.len() - 1]).is_some());
}

#[test]
fn given_full_registry_when_starting_then_evicts_least_recently_used() {
    let sessions = sessions_with_capacity(Arc::new(ManualScheduler::new()), 2);
    let (oldest, _) = sessions.start();
    let (middle, _) = sessions.start();
    sessions.get(&oldest).unwrap();

    let (newest, _) = sessions.start();

    assert_eq!(sessions.len(), 2);
    assert!(sessions.get(&middle).is_none());
    assert!(sessions.get(&oldest).is_some());
    assert!(sessions.get(&newest).is_some());
}

#[test]
fn given_evicted_session_with_pending_reply_when_time_passes_then_reply_is_cancelled() {
    let scheduler = Arc::new(ManualScheduler::new());
    let sessions = sessions_with_capacity(scheduler.clone(), 1);
    let (_, controller) = sessions.start();
    controller.send_message("me duele el pecho");
    drop(controller);

    sessions.start();

    assert_eq!(sessions.len(), 1);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.advance(LATENCY), 0);
}

#[test]
fn given_zero_capacity_when_building_registry_then_keeps_one_session() {
    let sessions = sessions_with_capacity(Arc::new(ManualScheduler::new()), 0);

    sessions.start();
    sessions.start();

    assert_eq!(sessions.max_sessions(), 1);
    assert_eq!(sessions.len(), 1);
}
