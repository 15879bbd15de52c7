use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{Difficulty, QuizItem},
    parser::parse_quiz_response,
    services::ModelService,
};

/// Generates practice quizzes by prompting the model for "Q:" blocks and
/// parsing the reply into validated items.
pub struct QuizService {
    model: Arc<dyn ModelService>,
}

impl QuizService {
    pub fn new(model: Arc<dyn ModelService>) -> Self {
        Self { model }
    }

    pub async fn generate_quiz(
        &self,
        topic: &str,
        num_questions: u32,
        difficulty: Difficulty,
    ) -> AppResult<Vec<QuizItem>> {
        let prompt = prompts::quiz_prompt(topic, num_questions, difficulty);
        let raw = self.model.complete(&prompt).await?;

        let quiz = parse_quiz_response(&raw);
        if quiz.is_empty() {
            return Err(AppError::EmptyGeneration(format!(
                "no usable quiz questions could be parsed for topic '{}'",
                topic
            )));
        }

        log::info!(
            "generated {} quiz questions for topic '{}' ({} requested)",
            quiz.len(),
            topic,
            num_questions
        );
        Ok(quiz)
    }
}
