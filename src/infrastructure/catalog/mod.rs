mod static_course_catalog;
mod static_grade_book;

pub use static_course_catalog::StaticCourseCatalog;
pub use static_grade_book::{DEMO_ACCESS_CODE, StaticGradeBook};
