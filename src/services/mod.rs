pub mod mcq_service;
pub mod model_service;
pub mod quiz_service;
pub mod session_store;
pub mod summary_service;
pub mod task_service;
pub mod tutorial_service;

pub use mcq_service::McqService;
pub use model_service::{ModelService, OpenAiModelService};
pub use quiz_service::QuizService;
pub use session_store::SessionStore;
pub use summary_service::{SummaryOutput, SummaryService};
pub use task_service::{TaskOutcome, TaskService};
pub use tutorial_service::TutorialService;
