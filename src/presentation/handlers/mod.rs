mod courses;
mod dashboard;
mod error;
mod health;
mod portal;
mod simulator;

pub use courses::{course_handler, courses_handler};
pub use dashboard::{dashboard_handler, navigation_handler};
pub use error::{ErrorBody, ErrorResponse};
pub use health::{HealthResponse, health_handler};
pub use portal::portal_access_handler;
pub use simulator::{
    conversation_events_handler, end_session_handler, get_session_handler, send_message_handler,
    start_session_handler,
};
