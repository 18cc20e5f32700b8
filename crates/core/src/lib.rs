#![forbid(unsafe_code)]

pub mod address;
pub mod catalog;
pub mod curriculum;
pub mod model;
pub mod progress;

pub use address::BasePath;
pub use curriculum::{Curriculum, LessonContext};
pub use progress::{ProgressDecodeError, ProgressState};
