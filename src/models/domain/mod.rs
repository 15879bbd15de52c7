pub mod content;
pub mod quiz;
pub mod task;

pub use content::{ContentKind, Depth, Difficulty, StoredContent, SummaryType, ToneStyle};
pub use quiz::{McqItem, QuizItem};
pub use task::{GenerationTask, TaskStatus};
