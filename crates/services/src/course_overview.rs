use serde::Serialize;

use heka_core::model::{Course, LessonNode, Track};
use heka_core::progress::{self, LessonStatus};
use heka_core::{Curriculum, ProgressState};

/// Presentation-agnostic summary of one course and the learner's place in it.
///
/// No lesson is "current" here, so only the first lesson and successors of
/// completed lessons are unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOverview {
    pub track: &'static Track,
    pub course: &'static Course,
    pub course_path: String,
    pub outline: Vec<LessonStatus>,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub total_minutes: u32,
    /// First unlocked lesson not yet completed; `None` once all are done.
    pub resume: Option<LessonNode>,
}

impl CourseOverview {
    #[must_use]
    pub fn build(
        curriculum: &Curriculum,
        track: &'static Track,
        course: &'static Course,
        state: &ProgressState,
    ) -> Self {
        let nodes = curriculum.build_lesson_nodes(track.slug(), course);
        let completed = progress::completed_count(&nodes, state);
        let total = nodes.len();
        let outline = progress::lesson_outline(&nodes, state, None);
        let resume = outline
            .iter()
            .find(|status| status.unlocked && !status.is_done)
            .map(|status| status.node.clone());

        Self {
            track,
            course,
            course_path: curriculum.base().course_path(track.slug(), course.slug()),
            outline,
            completed,
            total,
            percent: progress::progress_percent(completed, total),
            total_minutes: course.total_minutes(),
            resume,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
