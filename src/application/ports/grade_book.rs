use async_trait::async_trait;

use crate::domain::{AccessCode, Grade};

#[async_trait]
pub trait GradeBook: Send + Sync {
    async fn grades_for(&self, code: &AccessCode) -> Result<Vec<Grade>, GradeBookError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GradeBookError {
    #[error("access code not recognised")]
    InvalidCode,
    #[error("grade book unavailable: {0}")]
    Unavailable(String),
}
