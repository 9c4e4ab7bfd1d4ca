use serde::Serialize;

use super::Tab;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationCard {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `None` for cards that do not lead anywhere yet.
    pub target: Option<Tab>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub greeting: String,
    pub semester_progress_percent: u8,
    pub semester_start: String,
    pub semester_end: String,
    pub cards: Vec<NavigationCard>,
}

impl Dashboard {
    pub fn current() -> Self {
        Self {
            greeting: "Bienvenido a CISEC-Nexus".to_string(),
            semester_progress_percent: 60,
            semester_start: "15/08/2024".to_string(),
            semester_end: "15/12/2024".to_string(),
            cards: vec![
                card("grades", Tab::Grades.title(), "Ver calificaciones", Some(Tab::Grades)),
                card(
                    "simulator",
                    Tab::Simulator.title(),
                    "Chatear con IA",
                    Some(Tab::Simulator),
                ),
                card("courses", Tab::Courses.title(), "Ver programas", Some(Tab::Courses)),
                card("future", "Próximamente", "Nuevas funciones", None),
            ],
        }
    }
}

fn card(id: &str, title: &str, description: &str, target: Option<Tab>) -> NavigationCard {
    NavigationCard {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        target,
    }
}
