mod course_catalog;
mod grade_book;
mod random_source;
mod scheduler;

pub use course_catalog::{CourseCatalog, CourseCatalogError};
pub use grade_book::{GradeBook, GradeBookError};
pub use random_source::RandomSource;
pub use scheduler::{ScheduledFn, ScheduledTask, Scheduler};
