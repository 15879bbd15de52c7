use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        McqService, ModelService, OpenAiModelService, QuizService, SessionStore, SummaryService,
        TaskService, TutorialService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub mcq_service: Arc<McqService>,
    pub summary_service: Arc<SummaryService>,
    pub tutorial_service: Arc<TutorialService>,
    pub task_service: Arc<TaskService>,
    pub session_store: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model: Arc<dyn ModelService> = Arc::new(OpenAiModelService::new(&config));
        Self::with_model(config, model)
    }

    /// Wire the state around any model implementation; tests inject scripted
    /// models here.
    pub fn with_model(config: Config, model: Arc<dyn ModelService>) -> Self {
        let session_store = Arc::new(SessionStore::new());

        Self {
            quiz_service: Arc::new(QuizService::new(Arc::clone(&model))),
            mcq_service: Arc::new(McqService::new(Arc::clone(&model))),
            summary_service: Arc::new(SummaryService::new(Arc::clone(&model))),
            tutorial_service: Arc::new(TutorialService::new(model)),
            task_service: Arc::new(TaskService::new(Arc::clone(&session_store))),
            session_store,
            config: Arc::new(config),
        }
    }
}
