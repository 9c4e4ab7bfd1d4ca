use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{GradeBook, GradeBookError};
use crate::domain::{AccessCode, AccessCodeError, GradeReport};

pub struct AcademicPortalService {
    grade_book: Arc<dyn GradeBook>,
    verification_delay: Duration,
}

impl AcademicPortalService {
    pub fn new(grade_book: Arc<dyn GradeBook>, verification_delay: Duration) -> Self {
        Self {
            grade_book,
            verification_delay,
        }
    }

    /// Checks the access code and returns the student's grade report.
    ///
    /// Malformed codes are rejected before the simulated verification delay.
    pub async fn access(&self, raw_code: &str) -> Result<GradeReport, PortalError> {
        let code = AccessCode::parse(raw_code)?;

        if !self.verification_delay.is_zero() {
            tokio::time::sleep(self.verification_delay).await;
        }

        let grades = self
            .grade_book
            .grades_for(&code)
            .await
            .map_err(|e| match e {
                GradeBookError::InvalidCode => PortalError::AccessDenied,
                other => PortalError::GradeBook(other),
            })?;

        let report = GradeReport::new(grades);
        tracing::info!(
            courses = report.grades.len(),
            average = ?report.average,
            "Grade report issued"
        );
        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("invalid access code: {0}")]
    InvalidCode(#[from] AccessCodeError),
    #[error("access denied")]
    AccessDenied,
    #[error("grade book: {0}")]
    GradeBook(GradeBookError),
}
