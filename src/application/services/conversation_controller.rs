use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;

use crate::application::ports::{ScheduledTask, Scheduler};
use crate::domain::{Conversation, Message, MessageId};

use super::ResponseSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ControllerStatus {
    Idle,
    AwaitingReply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Accepted(MessageId),
    /// Text was empty after trimming.
    IgnoredEmpty,
    /// A simulated reply is still pending.
    IgnoredAwaitingReply,
}

impl SendOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SendOutcome::Accepted(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SendOutcome::Accepted(_) => "ACCEPTED",
            SendOutcome::IgnoredEmpty => "IGNORED_EMPTY",
            SendOutcome::IgnoredAwaitingReply => "IGNORED_AWAITING_REPLY",
        }
    }
}

/// Everything a view needs to re-render the chat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSnapshot {
    /// Increments on every state change.
    pub revision: u64,
    pub messages: Vec<Message>,
    pub awaiting_reply: bool,
}

struct ControllerState {
    conversation: Conversation,
    pending: Option<ScheduledTask>,
    revision: u64,
}

impl ControllerState {
    fn snapshot(&self) -> ConversationSnapshot {
        ConversationSnapshot {
            revision: self.revision,
            messages: self.conversation.all().to_vec(),
            awaiting_reply: self.pending.is_some(),
        }
    }
}

struct Shared {
    state: Mutex<ControllerState>,
    selector: Arc<ResponseSelector>,
    updates: watch::Sender<ConversationSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &mut ControllerState) {
        state.revision += 1;
        self.updates.send_replace(state.snapshot());
    }

    fn deliver_reply(&self, trigger: &str) {
        let reply = self.selector.select_reply(trigger);
        let mut state = self.lock();
        if state.pending.take().is_none() {
            return;
        }
        state.conversation.append(Message::from_patient(reply));
        tracing::debug!(
            messages = state.conversation.len(),
            "Simulated patient reply appended"
        );
        self.publish(&mut state);
    }
}

/// Drives one simulated-patient chat: user message now, canned reply after a
/// fixed latency.
///
/// State machine: `Idle --send--> AwaitingReply --reply--> Idle`. While a
/// reply is pending further sends are ignored, so at most one timer is ever
/// outstanding. Dropping the controller cancels that timer.
pub struct ConversationController {
    shared: Arc<Shared>,
    scheduler: Arc<dyn Scheduler>,
    reply_latency: Duration,
}

impl ConversationController {
    pub fn new(
        selector: Arc<ResponseSelector>,
        scheduler: Arc<dyn Scheduler>,
        reply_latency: Duration,
        opening_line: &str,
    ) -> Self {
        let state = ControllerState {
            conversation: Conversation::seeded(opening_line),
            pending: None,
            revision: 0,
        };
        let (updates, _) = watch::channel(state.snapshot());

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                selector,
                updates,
            }),
            scheduler,
            reply_latency,
        }
    }

    pub fn send_message(&self, text: &str) -> SendOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("Ignoring empty chat message");
            return SendOutcome::IgnoredEmpty;
        }

        let mut state = self.shared.lock();
        if state.pending.is_some() {
            tracing::debug!("Ignoring chat message while a reply is pending");
            return SendOutcome::IgnoredAwaitingReply;
        }

        let message = Message::from_user(trimmed);
        let message_id = message.id();
        state.conversation.append(message);

        let trigger = trimmed.to_string();
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let task = self.scheduler.schedule(
            self.reply_latency,
            Box::new(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.deliver_reply(&trigger);
                }
            }),
        );
        state.pending = Some(task);

        tracing::debug!(
            message_id = %message_id.as_uuid(),
            latency_ms = self.reply_latency.as_millis() as u64,
            "User message appended, reply scheduled"
        );
        self.shared.publish(&mut state);

        SendOutcome::Accepted(message_id)
    }

    pub fn conversation(&self) -> Vec<Message> {
        self.shared.lock().conversation.all().to_vec()
    }

    pub fn snapshot(&self) -> ConversationSnapshot {
        self.shared.lock().snapshot()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.shared.lock().pending.is_some()
    }

    pub fn status(&self) -> ControllerStatus {
        if self.is_awaiting_reply() {
            ControllerStatus::AwaitingReply
        } else {
            ControllerStatus::Idle
        }
    }

    /// Receives a fresh snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ConversationSnapshot> {
        self.shared.updates.subscribe()
    }

    pub fn reply_latency(&self) -> Duration {
        self.reply_latency
    }
}

impl Drop for ConversationController {
    fn drop(&mut self) {
        if let Some(task) = self.shared.lock().pending.take() {
            task.cancel();
        }
    }
}
