use super::Message;

/// Append-only, chronologically ordered message store for one chat session.
///
/// There is deliberately no way to remove or edit a message once appended.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Starts a conversation holding only the simulated patient's opening line.
    pub fn seeded(opening: &str) -> Self {
        Self {
            messages: vec![Message::from_patient(opening)],
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
