use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeBand {
    High,
    Medium,
    Low,
}

impl GradeBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            GradeBand::High
        } else if score >= 70 {
            GradeBand::Medium
        } else {
            GradeBand::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grade {
    pub course: String,
    pub score: u8,
    pub status: String,
    pub band: GradeBand,
}

impl Grade {
    pub fn new(course: impl Into<String>, score: u8, status: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            score,
            status: status.into(),
            band: GradeBand::for_score(score),
        }
    }
}

/// Grades plus the overall average, rounded to the nearest integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    pub grades: Vec<Grade>,
    pub average: Option<u8>,
}

impl GradeReport {
    pub fn new(grades: Vec<Grade>) -> Self {
        let average = if grades.is_empty() {
            None
        } else {
            let total: u32 = grades.iter().map(|g| u32::from(g.score)).sum();
            let mean = f64::from(total) / grades.len() as f64;
            Some(mean.round() as u8)
        };
        Self { grades, average }
    }
}
