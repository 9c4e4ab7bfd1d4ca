use async_trait::async_trait;

use crate::application::ports::{GradeBook, GradeBookError};
use crate::domain::{AccessCode, Grade};

pub const DEMO_ACCESS_CODE: &str = "12345678";

/// Demo grade book: one hardcoded code, one fixed transcript.
pub struct StaticGradeBook {
    access_code: String,
    grades: Vec<Grade>,
}

impl StaticGradeBook {
    pub fn new(access_code: impl Into<String>, grades: Vec<Grade>) -> Self {
        Self {
            access_code: access_code.into(),
            grades,
        }
    }

    pub fn demo() -> Self {
        Self::new(
            DEMO_ACCESS_CODE,
            vec![
                Grade::new("Semiología", 85, "Aprobado"),
                Grade::new("Medicina Interna I", 92, "Aprobado"),
                Grade::new("Medicina Interna II", 78, "Aprobado"),
                Grade::new("Ginecología y Obstetricia", 88, "Aprobado"),
                Grade::new("Farmacología", 76, "Aprobado"),
            ],
        )
    }
}

impl Default for StaticGradeBook {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl GradeBook for StaticGradeBook {
    async fn grades_for(&self, code: &AccessCode) -> Result<Vec<Grade>, GradeBookError> {
        if code.as_str() != self.access_code {
            tracing::warn!("Rejected academic portal access code");
            return Err(GradeBookError::InvalidCode);
        }
        Ok(self.grades.clone())
    }
}
