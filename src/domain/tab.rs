use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Screens reachable from the bottom tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Dashboard,
    Grades,
    Simulator,
    Courses,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Grades, Tab::Simulator, Tab::Courses];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Grades => "grades",
            Tab::Simulator => "simulator",
            Tab::Courses => "courses",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Inicio",
            Tab::Grades => "Portal Académico",
            Tab::Simulator => "Paciente Simulado",
            Tab::Courses => "Programas de Curso",
        }
    }
}

/// Unknown tab ids resolve to the dashboard.
impl FromStr for Tab {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "grades" => Tab::Grades,
            "simulator" => Tab::Simulator,
            "courses" => Tab::Courses,
            _ => Tab::Dashboard,
        })
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
