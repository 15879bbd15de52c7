use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::Depth,
    services::ModelService,
};

/// Generates long-form tutorial chapters at a requested depth.
pub struct TutorialService {
    model: Arc<dyn ModelService>,
}

impl TutorialService {
    pub fn new(model: Arc<dyn ModelService>) -> Self {
        Self { model }
    }

    pub async fn generate_tutorial(&self, topic: &str, depth: Depth) -> AppResult<String> {
        let prompt = prompts::tutorial_prompt(topic, depth);
        let tutorial_text = self.model.complete(&prompt).await?;

        if tutorial_text.trim().is_empty() {
            return Err(AppError::EmptyGeneration(format!(
                "tutorial generation for '{}' produced no content",
                topic
            )));
        }

        log::info!(
            "generated tutorial for '{}' at depth level {} ({} chars)",
            topic,
            depth.level(),
            tutorial_text.len()
        );
        Ok(tutorial_text)
    }
}
