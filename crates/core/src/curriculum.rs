//! Lookup and flattening over a static curriculum tree.
//!
//! Every function here is pure and total: an id that does not resolve yields
//! `None`, which callers treat as a not-found page.

use crate::address::BasePath;
use crate::catalog;
use crate::model::{Course, Lesson, LessonId, LessonNode, Module, Track};

/// Read-only view over a track tree plus the base path used for hrefs.
#[derive(Debug, Clone)]
pub struct Curriculum {
    tracks: &'static [Track],
    base: BasePath,
}

/// Everything a lesson page needs, resolved from the four slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonContext {
    pub track: &'static Track,
    pub course: &'static Course,
    pub module: &'static Module,
    pub lesson: &'static Lesson,
    pub lesson_id: LessonId,
    pub lesson_path: String,
    pub nodes: Vec<LessonNode>,
    /// Zero-based position of the lesson inside `nodes`.
    pub current_index: usize,
    pub previous: Option<LessonNode>,
    pub next: Option<LessonNode>,
}

impl Curriculum {
    #[must_use]
    pub fn new(tracks: &'static [Track], base: BasePath) -> Self {
        Self { tracks, base }
    }

    /// The curriculum compiled into the binary.
    #[must_use]
    pub fn builtin(base: BasePath) -> Self {
        Self::new(catalog::learning_tracks(), base)
    }

    #[must_use]
    pub fn tracks(&self) -> &'static [Track] {
        self.tracks
    }

    #[must_use]
    pub fn base(&self) -> &BasePath {
        &self.base
    }

    #[must_use]
    pub fn track(&self, track_id: &str) -> Option<&'static Track> {
        self.tracks.iter().find(|track| track.slug() == track_id)
    }

    /// Resolves a course inside a track. Absent if either id is unknown.
    #[must_use]
    pub fn course(
        &self,
        track_id: &str,
        course_id: &str,
    ) -> Option<(&'static Track, &'static Course)> {
        let track = self.track(track_id)?;
        let course = track.course(course_id)?;
        Some((track, course))
    }

    /// Flattens a course into lesson nodes, modules first then lessons, in
    /// document order.
    ///
    /// The course is looked up again under `track_id`, so ids are only built
    /// from slugs the curriculum holds. Empty if the pair does not resolve.
    #[must_use]
    pub fn build_lesson_nodes(&self, track_id: &str, course: &Course) -> Vec<LessonNode> {
        let Some((track, course)) = self.course(track_id, course.slug()) else {
            return Vec::new();
        };
        course
            .modules()
            .iter()
            .flat_map(|module| {
                module.lessons().iter().map(move |lesson| {
                    let id = LessonId::from_slugs(
                        track.slug(),
                        course.slug(),
                        module.slug(),
                        lesson.slug(),
                    );
                    LessonNode {
                        href: self.base.lesson_path(&id),
                        id,
                        title: lesson.title(),
                        module_title: module.title(),
                    }
                })
            })
            .collect()
    }

    #[must_use]
    pub fn lesson_context(
        &self,
        track_id: &str,
        course_id: &str,
        module_id: &str,
        lesson_id: &str,
    ) -> Option<LessonContext> {
        let (track, course) = self.course(track_id, course_id)?;
        let module = course.module(module_id)?;
        let lesson = module.lesson(lesson_id)?;

        let nodes = self.build_lesson_nodes(track.slug(), course);
        let id = LessonId::from_slugs(track.slug(), course.slug(), module.slug(), lesson.slug());
        let current_index = nodes.iter().position(|node| node.id == id)?;

        let previous = current_index
            .checked_sub(1)
            .and_then(|index| nodes.get(index))
            .cloned();
        let next = nodes.get(current_index + 1).cloned();

        Some(LessonContext {
            track,
            course,
            module,
            lesson,
            lesson_path: self.base.lesson_path(&id),
            lesson_id: id,
            nodes,
            current_index,
            previous,
            next,
        })
    }

    #[must_use]
    pub fn lesson_context_by_id(&self, id: &LessonId) -> Option<LessonContext> {
        self.lesson_context(id.track(), id.course(), id.module(), id.lesson())
    }
}
