use heka_core::model::{LessonId, LessonNode};
use heka_core::progress::{self, LessonStatus, NextStep, PreviousStep};
use heka_core::{Curriculum, LessonContext, ProgressState};

use crate::course_overview::CourseOverview;
use crate::error::{LessonPlayerError, ProgressStoreError};
use crate::progress_store::ProgressStore;

/// Resolves lesson and course pages against a curriculum and a progress store.
#[derive(Clone)]
pub struct LessonPlayerService {
    curriculum: Curriculum,
    store: ProgressStore,
}

impl LessonPlayerService {
    #[must_use]
    pub fn new(curriculum: Curriculum, store: ProgressStore) -> Self {
        Self { curriculum, store }
    }

    #[must_use]
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    #[must_use]
    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    /// Open a lesson page, loading persisted progress.
    ///
    /// # Errors
    ///
    /// Returns `LessonPlayerError::NotFound` if any segment does not resolve.
    pub async fn open_lesson(
        &self,
        track_id: &str,
        course_id: &str,
        module_id: &str,
        lesson_id: &str,
    ) -> Result<LessonPlayer, LessonPlayerError> {
        let context = self
            .curriculum
            .lesson_context(track_id, course_id, module_id, lesson_id)
            .ok_or_else(|| {
                LessonPlayerError::NotFound(format!("{track_id}/{course_id}/{module_id}/{lesson_id}"))
            })?;
        let course_href = self
            .curriculum
            .base()
            .course_path(context.track.slug(), context.course.slug());
        let progress = self.store.load().await;
        tracing::debug!(lesson = %context.lesson_id, "lesson opened");
        Ok(LessonPlayer {
            store: self.store.clone(),
            context,
            course_href,
            progress,
        })
    }

    /// Same as `open_lesson`, addressed by composite id.
    ///
    /// # Errors
    ///
    /// Returns `LessonPlayerError::NotFound` if the id does not resolve.
    pub async fn open_lesson_by_id(&self, id: &LessonId) -> Result<LessonPlayer, LessonPlayerError> {
        self.open_lesson(id.track(), id.course(), id.module(), id.lesson())
            .await
    }

    /// Course summary page: outline, totals and where to resume.
    ///
    /// # Errors
    ///
    /// Returns `LessonPlayerError::NotFound` if the track or course is unknown.
    pub async fn course_overview(
        &self,
        track_id: &str,
        course_id: &str,
    ) -> Result<CourseOverview, LessonPlayerError> {
        let (track, course) = self
            .curriculum
            .course(track_id, course_id)
            .ok_or_else(|| LessonPlayerError::NotFound(format!("{track_id}/{course_id}")))?;
        let progress = self.store.load().await;
        Ok(CourseOverview::build(&self.curriculum, track, course, &progress))
    }

    /// Forget all completion state.
    ///
    /// # Errors
    ///
    /// Returns `LessonPlayerError::Progress` if the store cannot be cleared.
    pub async fn reset_progress(&self) -> Result<(), LessonPlayerError> {
        self.store.clear().await?;
        Ok(())
    }
}

/// State of one open lesson page.
///
/// Holds the in-memory completion set mirrored to the store; every derived
/// value is recomputed from it on each call.
pub struct LessonPlayer {
    store: ProgressStore,
    context: LessonContext,
    course_href: String,
    progress: ProgressState,
}

impl LessonPlayer {
    #[must_use]
    pub fn context(&self) -> &LessonContext {
        &self.context
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.context.lesson_id
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    #[must_use]
    pub fn nodes(&self) -> &[LessonNode] {
        &self.context.nodes
    }

    /// Mark the current lesson completed, or pending if it already was, and
    /// persist the full set.
    ///
    /// The in-memory set only changes once the write succeeded.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if the set cannot be persisted.
    pub async fn toggle_current(&mut self) -> Result<bool, ProgressStoreError> {
        let mut next = self.progress.clone();
        let completed = next.toggle(&self.context.lesson_id);
        self.store.save(&next).await?;
        self.progress = next;
        tracing::info!(lesson = %self.context.lesson_id, completed, "lesson toggled");
        Ok(completed)
    }

    #[must_use]
    pub fn is_current_completed(&self) -> bool {
        self.progress.is_completed(&self.context.lesson_id)
    }

    #[must_use]
    pub fn outline(&self) -> Vec<LessonStatus> {
        progress::lesson_outline(
            &self.context.nodes,
            &self.progress,
            Some(&self.context.lesson_id),
        )
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        progress::completed_count(&self.context.nodes, &self.progress)
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress::progress_percent(self.completed_count(), self.context.nodes.len())
    }

    #[must_use]
    pub fn can_open_next(&self) -> bool {
        progress::can_open_next(
            self.context.next.as_ref(),
            &self.progress,
            &self.context.lesson_id,
        )
    }

    #[must_use]
    pub fn next_step(&self) -> NextStep {
        NextStep::resolve(
            self.context.next.as_ref(),
            &self.progress,
            &self.context.lesson_id,
        )
    }

    #[must_use]
    pub fn previous_step(&self) -> PreviousStep {
        PreviousStep::resolve(self.context.previous.as_ref())
    }

    /// One-based "lesson N of M".
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.context.current_index + 1, self.context.nodes.len())
    }

    /// Href of the owning course page.
    #[must_use]
    pub fn course_href(&self) -> &str {
        &self.course_href
    }
}
