use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use crate::application::ports::Scheduler;
use crate::domain::SessionId;

use super::{ConversationController, ResponseSelector};

struct SessionEntry {
    controller: Arc<ConversationController>,
    last_touched: u64,
}

#[derive(Default)]
struct Registry {
    entries: HashMap<SessionId, SessionEntry>,
    tick: u64,
}

impl Registry {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn least_recently_touched(&self) -> Option<SessionId> {
        self.entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_touched)
            .map(|(id, _)| *id)
    }
}

/// In-memory registry of live simulator chats, one controller per session.
///
/// Holds at most `max_sessions` chats. Starting one more evicts the session
/// that was started or looked up least recently.
pub struct SimulatorSessions {
    registry: RwLock<Registry>,
    selector: Arc<ResponseSelector>,
    scheduler: Arc<dyn Scheduler>,
    reply_latency: Duration,
    opening_line: String,
    max_sessions: usize,
}

impl SimulatorSessions {
    pub fn new(
        selector: Arc<ResponseSelector>,
        scheduler: Arc<dyn Scheduler>,
        reply_latency: Duration,
        opening_line: impl Into<String>,
        max_sessions: usize,
    ) -> Self {
        Self {
            registry: RwLock::new(Registry::default()),
            selector,
            scheduler,
            reply_latency,
            opening_line: opening_line.into(),
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn start(&self) -> (SessionId, Arc<ConversationController>) {
        let id = SessionId::new();
        let controller = Arc::new(ConversationController::new(
            Arc::clone(&self.selector),
            Arc::clone(&self.scheduler),
            self.reply_latency,
            &self.opening_line,
        ));

        let evicted = {
            let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
            let mut evicted = Vec::new();
            while registry.entries.len() >= self.max_sessions {
                let Some(oldest) = registry.least_recently_touched() else {
                    break;
                };
                registry.entries.remove(&oldest);
                evicted.push(oldest);
            }
            let last_touched = registry.next_tick();
            registry.entries.insert(
                id,
                SessionEntry {
                    controller: Arc::clone(&controller),
                    last_touched,
                },
            );
            evicted
        };

        for evicted_id in evicted {
            tracing::warn!(session_id = %evicted_id, "Simulator session evicted at capacity");
        }
        tracing::info!(session_id = %id, "Simulator session started");
        (id, controller)
    }

    /// Looks up a session and marks it as recently used.
    pub fn get(&self, id: &SessionId) -> Option<Arc<ConversationController>> {
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        let tick = registry.next_tick();
        registry.entries.get_mut(id).map(|entry| {
            entry.last_touched = tick;
            Arc::clone(&entry.controller)
        })
    }

    /// Removes the session. Its pending reply is cancelled once the last
    /// handle to the controller is released.
    pub fn end(&self, id: &SessionId) -> bool {
        let removed = self
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .remove(id);

        if removed.is_some() {
            tracing::info!(session_id = %id, "Simulator session ended");
        }
        removed.is_some()
    }

    pub fn len(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}
