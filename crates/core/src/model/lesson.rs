use serde::Serialize;

use crate::model::ids::LessonId;

/// The atomic content unit: objectives plus body paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    slug: &'static str,
    title: &'static str,
    summary: &'static str,
    duration_minutes: u32,
    objectives: &'static [&'static str],
    content: &'static [&'static str],
}

impl Lesson {
    #[must_use]
    pub const fn new(
        slug: &'static str,
        title: &'static str,
        summary: &'static str,
        duration_minutes: u32,
        objectives: &'static [&'static str],
        content: &'static [&'static str],
    ) -> Self {
        Self {
            slug,
            title,
            summary,
            duration_minutes,
            objectives,
            content,
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
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn objectives(&self) -> &'static [&'static str] {
        self.objectives
    }

    /// Body paragraphs in reading order.
    #[must_use]
    pub fn content(&self) -> &'static [&'static str] {
        self.content
    }
}

/// Flattened, addressable summary of one lesson, used for sequencing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonNode {
    pub id: LessonId,
    pub href: String,
    pub title: &'static str,
    pub module_title: &'static str,
}
