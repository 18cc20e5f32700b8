//! Lesson completion state and the values derived from it.
//!
//! `ProgressState` is the only mutable piece of the model. Unlock flags,
//! counts and percentages are computed from it on demand and never stored.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use thiserror::Error;

use crate::model::{LessonId, LessonNode};

const COMPLETED_FIELD: &str = "completedLessonIds";

/// Storage key the site has always used for the completion set.
pub const DEFAULT_PROGRESS_KEY: &str = "heka-it-progress-v1";

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Set of completed lesson ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressState {
    #[serde(rename = "completedLessonIds")]
    completed: BTreeSet<LessonId>,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressDecodeError {
    #[error("progress is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("progress is not a JSON object")]
    NotAnObject,

    #[error("progress has no `completedLessonIds` field")]
    MissingField,

    #[error("`completedLessonIds` is not a list")]
    NotAList,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_completed(&self, id: &LessonId) -> bool {
        self.completed.contains(id)
    }

    /// Flips membership of `id`. Returns whether it is completed afterwards.
    pub fn toggle(&mut self, id: &LessonId) -> bool {
        if self.completed.remove(id) {
            false
        } else {
            self.completed.insert(id.clone());
            true
        }
    }

    pub fn completed(&self) -> impl Iterator<Item = &LessonId> {
        self.completed.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Serializes the full set as `{"completedLessonIds": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses the persisted form.
    ///
    /// Entries that are not well-formed lesson ids are dropped; a document
    /// of the wrong shape is an error.
    ///
    /// # Errors
    ///
    /// Returns `ProgressDecodeError` for malformed JSON, a missing field, or
    /// a completion field that is not a list.
    pub fn from_json(raw: &str) -> Result<Self, ProgressDecodeError> {
        let value: Value = serde_json::from_str(raw)?;
        let object = value.as_object().ok_or(ProgressDecodeError::NotAnObject)?;
        let entries = object
            .get(COMPLETED_FIELD)
            .ok_or(ProgressDecodeError::MissingField)?
            .as_array()
            .ok_or(ProgressDecodeError::NotAList)?;

        let completed = entries
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|entry| entry.parse::<LessonId>().ok())
            .collect();
        Ok(Self { completed })
    }
}

impl FromIterator<LessonId> for ProgressState {
    fn from_iter<I: IntoIterator<Item = LessonId>>(iter: I) -> Self {
        Self {
            completed: iter.into_iter().collect(),
        }
    }
}

impl Extend<LessonId> for ProgressState {
    fn extend<I: IntoIterator<Item = LessonId>>(&mut self, iter: I) {
        self.completed.extend(iter);
    }
}

//
// ─── DERIVED VIEWS ─────────────────────────────────────────────────────────────
//

/// Render state of one lesson in a course outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonStatus {
    pub node: LessonNode,
    pub unlocked: bool,
    pub is_current: bool,
    pub is_done: bool,
}

/// Computes unlock state for every node.
///
/// A node is unlocked when it is the first one, when the node before it is
/// completed, or when it is `current` (deep links always open).
#[must_use]
pub fn lesson_outline(
    nodes: &[LessonNode],
    state: &ProgressState,
    current: Option<&LessonId>,
) -> Vec<LessonStatus> {
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let is_current = current == Some(&node.id);
            let previous_done = index
                .checked_sub(1)
                .and_then(|prev| nodes.get(prev))
                .is_some_and(|prev| state.is_completed(&prev.id));
            LessonStatus {
                node: node.clone(),
                unlocked: index == 0 || previous_done || is_current,
                is_current,
                is_done: state.is_completed(&node.id),
            }
        })
        .collect()
}

/// Number of `nodes` marked completed. Ids outside the list do not count.
#[must_use]
pub fn completed_count(nodes: &[LessonNode], state: &ProgressState) -> usize {
    nodes
        .iter()
        .filter(|node| state.is_completed(&node.id))
        .count()
}

/// Integer percentage, rounding halves up. An empty course is 0%.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = completed.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

/// Whether the "next lesson" link is enabled.
#[must_use]
pub fn can_open_next(next: Option<&LessonNode>, state: &ProgressState, current: &LessonId) -> bool {
    next.is_none() || state.is_completed(current)
}

/// Forward navigation affordance for a lesson page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    /// Next lesson is reachable.
    Open(LessonNode),
    /// Next lesson exists but the current one is not completed.
    Locked(LessonNode),
    /// Last lesson of the course: offer to repeat it.
    Repeat,
}

impl NextStep {
    #[must_use]
    pub fn resolve(next: Option<&LessonNode>, state: &ProgressState, current: &LessonId) -> Self {
        match next {
            None => NextStep::Repeat,
            Some(node) if state.is_completed(current) => NextStep::Open(node.clone()),
            Some(node) => NextStep::Locked(node.clone()),
        }
    }
}

/// Backward navigation affordance for a lesson page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviousStep {
    Open(LessonNode),
    BackToCourse,
}

impl PreviousStep {
    #[must_use]
    pub fn resolve(previous: Option<&LessonNode>) -> Self {
        previous.map_or(PreviousStep::BackToCourse, |node| {
            PreviousStep::Open(node.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(lesson: &str) -> LessonId {
        LessonId::new("t", "c", "m", lesson).unwrap()
    }

    fn node(lesson: &str) -> LessonNode {
        LessonNode {
            id: id(lesson),
            href: format!("/cursos/t/c/m/{lesson}"),
            title: "title",
            module_title: "module",
        }
    }

    fn course() -> Vec<LessonNode> {
        vec![node("l1"), node("l2"), node("l3")]
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut state: ProgressState = [id("l2")].into_iter().collect();
        let original = state.clone();

        assert!(state.toggle(&id("l1")));
        assert!(state.is_completed(&id("l1")));
        assert!(!state.toggle(&id("l1")));
        assert_eq!(state, original);
    }

    #[test]
    fn unlocks_first_and_successor_of_completed() {
        let nodes = course();
        let state: ProgressState = [id("l1")].into_iter().collect();

        let outline = lesson_outline(&nodes, &state, Some(&id("l2")));
        let unlocked: Vec<bool> = outline.iter().map(|status| status.unlocked).collect();
        assert_eq!(unlocked, [true, true, false]);
        assert!(outline[0].is_done);
        assert!(outline[1].is_current);
    }

    #[test]
    fn current_lesson_is_always_unlocked() {
        let nodes = course();
        let state: ProgressState = [id("l1")].into_iter().collect();

        let outline = lesson_outline(&nodes, &state, Some(&id("l3")));
        assert!(outline[2].unlocked);
        assert!(outline[2].is_current);
        // reaching l3 from l2 stays gated
        assert!(!can_open_next(Some(&nodes[2]), &state, &id("l2")));
    }

    #[test]
    fn outline_without_current_lesson() {
        let nodes = course();
        let outline = lesson_outline(&nodes, &ProgressState::new(), None);
        let unlocked: Vec<bool> = outline.iter().map(|status| status.unlocked).collect();
        assert_eq!(unlocked, [true, false, false]);
        assert!(outline.iter().all(|status| !status.is_current));
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(progress_percent(1, 4), 25);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(1, 8), 13);
        assert_eq!(progress_percent(3, 3), 100);
    }

    #[test]
    fn percent_of_empty_course_is_zero() {
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn completed_count_ignores_other_courses() {
        let nodes = course();
        let other = LessonId::new("t", "other", "m", "l1").unwrap();
        let state: ProgressState = [id("l1"), id("l3"), other].into_iter().collect();
        assert_eq!(completed_count(&nodes, &state), 2);
    }

    #[test]
    fn next_step_follows_completion() {
        let nodes = course();
        let mut state = ProgressState::new();
        assert_eq!(
            NextStep::resolve(Some(&nodes[1]), &state, &id("l1")),
            NextStep::Locked(nodes[1].clone())
        );
        state.toggle(&id("l1"));
        assert_eq!(
            NextStep::resolve(Some(&nodes[1]), &state, &id("l1")),
            NextStep::Open(nodes[1].clone())
        );
        assert_eq!(NextStep::resolve(None, &state, &id("l3")), NextStep::Repeat);
        assert!(can_open_next(None, &ProgressState::new(), &id("l3")));
    }

    #[test]
    fn previous_step_falls_back_to_course() {
        let nodes = course();
        assert_eq!(PreviousStep::resolve(None), PreviousStep::BackToCourse);
        assert_eq!(
            PreviousStep::resolve(Some(&nodes[0])),
            PreviousStep::Open(nodes[0].clone())
        );
    }

    #[test]
    fn json_uses_completed_lesson_ids_field() {
        let state: ProgressState = [id("l2"), id("l1")].into_iter().collect();
        assert_eq!(
            state.to_json().unwrap(),
            r#"{"completedLessonIds":["t/c/m/l1","t/c/m/l2"]}"#
        );
        assert_eq!(ProgressState::from_json(&state.to_json().unwrap()).unwrap(), state);
    }

    #[test]
    fn rejects_non_list_field() {
        let result = ProgressState::from_json(r#"{"completedLessonIds":"not-a-list"}"#);
        assert!(matches!(result, Err(ProgressDecodeError::NotAList)));
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(matches!(
            ProgressState::from_json("{not json"),
            Err(ProgressDecodeError::Json(_))
        ));
        assert!(matches!(
            ProgressState::from_json("[1, 2]"),
            Err(ProgressDecodeError::NotAnObject)
        ));
        assert!(matches!(
            ProgressState::from_json("{}"),
            Err(ProgressDecodeError::MissingField)
        ));
    }

    #[test]
    fn drops_entries_that_are_not_lesson_ids() {
        let state =
            ProgressState::from_json(r#"{"completedLessonIds":["t/c/m/l1", 7, "bogus", null]}"#)
                .unwrap();
        assert_eq!(state.len(), 1);
        assert!(state.is_completed(&id("l1")));
    }
}
