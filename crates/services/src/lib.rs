#![forbid(unsafe_code)]

pub mod course_overview;
pub mod error;
pub mod lesson_player;
pub mod progress_store;

pub use course_overview::CourseOverview;
pub use error::{LessonPlayerError, ProgressStoreError};
pub use lesson_player::{LessonPlayer, LessonPlayerService};
pub use progress_store::ProgressStore;
