use std::sync::Arc;

use crate::application::ports::{CourseCatalog, CourseCatalogError};
use crate::domain::{Course, CourseId};

pub struct CourseService {
    catalog: Arc<dyn CourseCatalog>,
}

impl CourseService {
    pub fn new(catalog: Arc<dyn CourseCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn list(&self) -> Result<Vec<Course>, CourseError> {
        Ok(self.catalog.list().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Course, CourseError> {
        self.catalog
            .find(&CourseId::new(id))
            .await?
            .ok_or_else(|| CourseError::NotFound(id.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("course not found: {0}")]
    NotFound(String),
    #[error("catalog: {0}")]
    Catalog(#[from] CourseCatalogError),
}
