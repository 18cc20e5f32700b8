use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const SEGMENTS: usize = 4;

/// Composite identity of a lesson: `track/course/module/lesson`.
///
/// Derived from the four slugs, so the same lesson always yields the same id.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LessonId {
    track: String,
    course: String,
    module: String,
    lesson: String,
}

impl LessonId {
    /// Creates a `LessonId` from its four slugs.
    ///
    /// # Errors
    ///
    /// Returns `LessonIdError` if a slug is empty or contains a `/`.
    pub fn new(
        track: impl Into<String>,
        course: impl Into<String>,
        module: impl Into<String>,
        lesson: impl Into<String>,
    ) -> Result<Self, LessonIdError> {
        let id = Self {
            track: track.into(),
            course: course.into(),
            module: module.into(),
            lesson: lesson.into(),
        };
        for segment in id.segments() {
            validate_segment(segment)?;
        }
        Ok(id)
    }

    /// Builds an id from slugs already known to be valid (catalog data).
    #[must_use]
    pub(crate) fn from_slugs(track: &str, course: &str, module: &str, lesson: &str) -> Self {
        Self {
            track: track.to_owned(),
            course: course.to_owned(),
            module: module.to_owned(),
            lesson: lesson.to_owned(),
        }
    }

    #[must_use]
    pub fn track(&self) -> &str {
        &self.track
    }

    #[must_use]
    pub fn course(&self) -> &str {
        &self.course
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub fn lesson(&self) -> &str {
        &self.lesson
    }

    /// Returns the slugs in path order.
    #[must_use]
    pub fn segments(&self) -> [&str; SEGMENTS] {
        [&self.track, &self.course, &self.module, &self.lesson]
    }
}

fn validate_segment(segment: &str) -> Result<(), LessonIdError> {
    if segment.is_empty() {
        return Err(LessonIdError::EmptySegment);
    }
    if segment.contains('/') {
        return Err(LessonIdError::SeparatorInSegment(segment.to_owned()));
    }
    Ok(())
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({self})")
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.track, self.course, self.module, self.lesson
        )
    }
}

/// Error type for parsing a `LessonId`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonIdError {
    #[error("lesson id must have 4 segments, got {0}")]
    SegmentCount(usize),

    #[error("lesson id segment cannot be empty")]
    EmptySegment,

    #[error("lesson id segment contains a separator: {0}")]
    SeparatorInSegment(String),
}

impl FromStr for LessonId {
    type Err = LessonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let [track, course, module, lesson] = parts.as_slice() else {
            return Err(LessonIdError::SegmentCount(parts.len()));
        };
        Self::new(*track, *course, *module, *lesson)
    }
}

impl TryFrom<String> for LessonId {
    type Error = LessonIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LessonId> for String {
    fn from(id: LessonId) -> Self {
        id.to_string()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
