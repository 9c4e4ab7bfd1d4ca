use std::sync::Arc;

use crate::application::ports::RandomSource;
use crate::domain::ReplyPool;

/// Picks the simulated patient's next line from a canned pool.
///
/// The user's text is accepted but never inspected: every call is an
/// independent uniform draw, so repeats are expected.
pub struct ResponseSelector {
    pool: ReplyPool,
    random: Arc<dyn RandomSource>,
}

impl ResponseSelector {
    pub fn new(pool: ReplyPool, random: Arc<dyn RandomSource>) -> Self {
        Self { pool, random }
    }

    pub fn select_reply(&self, _user_input: &str) -> String {
        let index = self.random.next_index(self.pool.len());
        self.pool.pick(index).to_string()
    }

    pub fn pool(&self) -> &ReplyPool {
        &self.pool
    }
}
