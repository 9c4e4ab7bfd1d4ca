use async_trait::async_trait;

use crate::domain::{Course, CourseId};

#[async_trait]
pub trait CourseCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, CourseCatalogError>;

    async fn find(&self, id: &CourseId) -> Result<Option<Course>, CourseCatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CourseCatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
