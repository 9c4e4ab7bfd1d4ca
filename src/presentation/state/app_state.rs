use std::sync::Arc;

use crate::application::services::{AcademicPortalService, CourseService, SimulatorSessions};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub simulator_sessions: Arc<SimulatorSessions>,
    pub portal_service: Arc<AcademicPortalService>,
    pub course_service: Arc<CourseService>,
    pub settings: Settings,
}
