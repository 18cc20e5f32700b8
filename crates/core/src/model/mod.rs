mod course;
mod ids;
mod lesson;
mod track;

pub use course::{Course, CourseLevel, Module};
pub use ids::{LessonId, LessonIdError};
pub use lesson::{Lesson, LessonNode};
pub use track::Track;
