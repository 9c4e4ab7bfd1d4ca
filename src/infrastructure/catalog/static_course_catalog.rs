use async_trait::async_trait;

use crate::application::ports::{CourseCatalog, CourseCatalogError};
use crate::domain::{Course, CourseId};

pub struct StaticCourseCatalog {
    courses: Vec<Course>,
}

impl StaticCourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    pub fn demo() -> Self {
        Self::new(vec![
            course(
                "semiologia",
                "Semiología",
                "Estudio de los signos y síntomas de las enfermedades",
                8,
                "Dr. García Martínez",
                "Cuarto Semestre",
            ),
            course(
                "medicina-interna-1",
                "Medicina Interna I",
                "Fundamentos de la medicina interna y diagnóstico",
                10,
                "Dra. López Fernández",
                "Quinto Semestre",
            ),
            course(
                "medicina-interna-2",
                "Medicina Interna II",
                "Medicina interna avanzada y especialidades",
                12,
                "Dr. Rodríguez Silva",
                "Sexto Semestre",
            ),
            course(
                "ginecologia",
                "Ginecología y Obstetricia",
                "Salud reproductiva femenina y atención obstétrica",
                9,
                "Dra. Morales Castro",
                "Séptimo Semestre",
            ),
        ])
    }
}

impl Default for StaticCourseCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl CourseCatalog for StaticCourseCatalog {
    async fn list(&self) -> Result<Vec<Course>, CourseCatalogError> {
        Ok(self.courses.clone())
    }

    async fn find(&self, id: &CourseId) -> Result<Option<Course>, CourseCatalogError> {
        Ok(self.courses.iter().find(|c| &c.id == id).cloned())
    }
}

fn course(
    id: &str,
    name: &str,
    description: &str,
    credits: u8,
    professor: &str,
    semester: &str,
) -> Course {
    Course {
        id: CourseId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        credits,
        professor: professor.to_string(),
        semester: semester.to_string(),
    }
}
