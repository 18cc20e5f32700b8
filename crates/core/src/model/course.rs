use serde::Serialize;
use std::fmt;

use crate::model::lesson::Lesson;

/// Difficulty band of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CourseLevel {
    #[serde(rename = "basico")]
    Basic,
    #[serde(rename = "intermedio")]
    Intermediate,
}

impl CourseLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CourseLevel::Basic => "Basic",
            CourseLevel::Intermediate => "Intermediate",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named grouping of lessons within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    slug: &'static str,
    title: &'static str,
    summary: &'static str,
    lessons: &'static [Lesson],
}

impl Module {
    #[must_use]
    pub const fn new(
        slug: &'static str,
        title: &'static str,
        summary: &'static str,
        lessons: &'static [Lesson],
    ) -> Self {
        Self {
            slug,
            title,
            summary,
            lessons,
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
    pub fn lessons(&self) -> &'static [Lesson] {
        self.lessons
    }

    #[must_use]
    pub fn lesson(&self, slug: &str) -> Option<&'static Lesson> {
        self.lessons.iter().find(|lesson| lesson.slug() == slug)
    }
}

/// A structured learning unit made of ordered modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    slug: &'static str,
    title: &'static str,
    level: CourseLevel,
    summary: &'static str,
    estimated_hours: u32,
    modules: &'static [Module],
}

impl Course {
    #[must_use]
    pub const fn new(
        slug: &'static str,
        title: &'static str,
        level: CourseLevel,
        summary: &'static str,
        estimated_hours: u32,
        modules: &'static [Module],
    ) -> Self {
        Self {
            slug,
            title,
            level,
            summary,
            estimated_hours,
            modules,
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
    pub fn level(&self) -> CourseLevel {
        self.level
    }

    #[must_use]
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    #[must_use]
    pub fn estimated_hours(&self) -> u32 {
        self.estimated_hours
    }

    #[must_use]
    pub fn modules(&self) -> &'static [Module] {
        self.modules
    }

    #[must_use]
    pub fn module(&self, slug: &str) -> Option<&'static Module> {
        self.modules.iter().find(|module| module.slug() == slug)
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|module| module.lessons().len()).sum()
    }

    /// Sum of lesson durations, in minutes.
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.modules
            .iter()
            .flat_map(|module| module.lessons())
            .map(Lesson::duration_minutes)
            .sum()
    }
}
