use serde::Serialize;

use crate::model::course::Course;

/// Top-level grouping of related courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    slug: &'static str,
    title: &'static str,
    summary: &'static str,
    courses: &'static [Course],
}

impl Track {
    #[must_use]
    pub const fn new(
        slug: &'static str,
        title: &'static str,
        summary: &'static str,
        courses: &'static [Course],
    ) -> Self {
        Self {
            slug,
            title,
            summary,
            courses,
        }
    }

    #[must_use]
    pub fn slug(&self) -> &'static str {
        self.slug
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    #[must_use]
    pub fn courses(&self) -> &'static [Course] {
        self.courses
    }

    #[must_use]
    pub fn course(&self, slug: &str) -> Option<&'static Course> {
        self.courses.iter().find(|course| course.slug() == slug)
    }
}
