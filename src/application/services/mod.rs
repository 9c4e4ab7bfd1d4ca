mod academic_portal_service;
mod conversation_controller;
mod course_service;
mod response_selector;
mod simulator_sessions;

pub use academic_portal_service::{AcademicPortalService, PortalError};
pub use conversation_controller::{
    ControllerStatus, ConversationController, ConversationSnapshot, SendOutcome,
};
pub use course_service::{CourseError, CourseService};
pub use response_selector::ResponseSelector;
pub use simulator_sessions::SimulatorSessions;
