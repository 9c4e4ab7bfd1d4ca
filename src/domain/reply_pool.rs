use super::patient_persona::PATIENT_REPLIES;

/// Fixed, ordered, never-empty set of canned replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyPool {
    replies: Vec<String>,
}

impl ReplyPool {
    pub fn new(replies: Vec<String>) -> Result<Self, ReplyPoolError> {
        if replies.is_empty() {
            return Err(ReplyPoolError::Empty);
        }
        if let Some(index) = replies.iter().position(|r| r.trim().is_empty()) {
            return Err(ReplyPoolError::BlankReply(index));
        }
        Ok(Self { replies })
    }

    /// The reference pool for the chest-pain patient.
    pub fn patient_maria() -> Self {
        Self {
            replies: PATIENT_REPLIES.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Returns the reply at `index`, wrapping around the pool length.
    pub fn pick(&self, index: usize) -> &str {
        &self.replies[index % self.replies.len()]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.replies.get(index).map(String::as_str)
    }

    pub fn contains(&self, reply: &str) -> bool {
        self.replies.iter().any(|r| r == reply)
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReplyPoolError {
    #[error("reply pool must contain at least one reply")]
    Empty,
    #[error("reply at index {0} is blank")]
    BlankReply(usize),
}
