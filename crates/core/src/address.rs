//! Navigational addressing for tracks, courses and lessons.

use crate::model::LessonId;

const ROUTE_ROOT: &str = "/cursos";

/// Normalized prefix applied to every generated path.
///
/// `/` and the empty string mean "no prefix"; otherwise the value always
/// starts with `/` and never ends with one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        let trimmed = raw.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }
        if trimmed.starts_with('/') {
            Self(trimmed.to_owned())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    #[must_use]
    pub fn root() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefixes `path` with the base, inserting a leading `/` if missing.
    #[must_use]
    pub fn with_base(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.0)
        } else {
            format!("{}/{path}", self.0)
        }
    }

    #[must_use]
    pub fn track_path(&self, track: &str) -> String {
        self.with_base(&format!("{ROUTE_ROOT}/{track}"))
    }

    #[must_use]
    pub fn course_path(&self, track: &str, course: &str) -> String {
        self.with_base(&format!("{ROUTE_ROOT}/{track}/{course}"))
    }

    #[must_use]
    pub fn lesson_path(&self, id: &LessonId) -> String {
        self.with_base(&format!("{ROUTE_ROOT}/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slash_means_no_prefix() {
        assert_eq!(BasePath::new("/"), BasePath::root());
        assert_eq!(BasePath::new(""), BasePath::root());
        assert_eq!(BasePath::new("/").with_base("/cursos"), "/cursos");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let base = BasePath::new("/academy/");
        assert_eq!(base.as_str(), "/academy");
        assert_eq!(base.with_base("/cursos"), "/academy/cursos");
    }

    #[test]
    fn leading_slash_is_added() {
        assert_eq!(BasePath::new("academy").as_str(), "/academy");
        assert_eq!(BasePath::new("/academy").with_base("cursos"), "/academy/cursos");
    }

    #[test]
    fn builds_lesson_course_and_track_paths() {
        let base = BasePath::new("/heka");
        let id = LessonId::new("t", "c", "m", "l").unwrap();
        assert_eq!(base.lesson_path(&id), "/heka/cursos/t/c/m/l");
        assert_eq!(base.course_path("t", "c"), "/heka/cursos/t/c");
        assert_eq!(base.track_path("t"), "/heka/cursos/t");
    }
}
