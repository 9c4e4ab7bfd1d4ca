use super::{MessageId, Sender};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A chat message. Immutable once created: fields are only readable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn from_patient(text: impl Into<String>) -> Self {
        Self::new(Sender::SimulatedPatient, text)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
