use std::sync::Arc;

use serde::Deserialize;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{Difficulty, McqItem},
    services::ModelService,
};

#[derive(Deserialize)]
struct McqEnvelope {
    mcqs: Vec<McqItem>,
}

/// Generates multiple-choice questions via JSON-mode completions.
pub struct McqService {
    model: Arc<dyn ModelService>,
}

impl McqService {
    pub fn new(model: Arc<dyn ModelService>) -> Self {
        Self { model }
    }

    pub async fn generate_mcqs(
        &self,
        topic: &str,
        num_questions: u32,
        difficulty: Difficulty,
    ) -> AppResult<Vec<McqItem>> {
        let prompt = prompts::mcq_prompt(topic, num_questions, difficulty);
        let raw = self.model.complete_json(&prompt).await?;

        let items = parse_mcq_reply(&raw)?;
        let well_formed: Vec<McqItem> = items
            .into_iter()
            .filter(|item| {
                let keep = item.is_well_formed();
                if !keep {
                    log::debug!("dropping malformed mcq: {:?}", item.question);
                }
                keep
            })
            .collect();

        if well_formed.is_empty() {
            return Err(AppError::EmptyGeneration(format!(
                "no well-formed MCQs were generated for topic '{}'",
                topic
            )));
        }

        log::info!(
            "generated {} MCQs for topic '{}' ({} requested)",
            well_formed.len(),
            topic,
            num_questions
        );
        Ok(well_formed)
    }
}

/// Models occasionally wrap JSON-mode output in a markdown fence anyway, and
/// sometimes return a bare array instead of the requested envelope.
fn parse_mcq_reply(raw: &str) -> AppResult<Vec<McqItem>> {
    let cleaned = strip_code_fence(raw);

    if let Ok(envelope) = serde_json::from_str::<McqEnvelope>(cleaned) {
        return Ok(envelope.mcqs);
    }

    let items = serde_json::from_str::<Vec<McqItem>>(cleaned)?;
    Ok(items)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockModelService;

    const REPLY: &str = r#"{"mcqs": [
        {"question": "What does ACID stand for?",
         "options": ["A. Atomicity...", "B. Access...", "C. Active...", "D. Atomic..."],
         "answer": "A"},
        {"question": "Malformed, two options only",
         "options": ["A. yes", "B. no"],
         "answer": "A"}
    ]}"#;

    #[actix_rt::test]
    async fn keeps_only_well_formed_items() {
        let mut model = MockModelService::new();
        model
            .expect_complete_json()
            .returning(|_| Ok(REPLY.to_string()));

        let service = McqService::new(Arc::new(model));
        let mcqs = service
            .generate_mcqs("databases", 2, Difficulty::Medium)
            .await
            .expect("generation should succeed");

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "A");
    }

    #[actix_rt::test]
    async fn fenced_bare_array_is_accepted() {
        let mut model = MockModelService::new();
        model.expect_complete_json().returning(|_| {
            Ok("```json\n[{\"question\": \"Q?\", \"options\": [\"A. a\", \"B. b\", \"C. c\", \"D. d\"], \"answer\": \"C\"}]\n```".to_string())
        });

        let service = McqService::new(Arc::new(model));
        let mcqs = service
            .generate_mcqs("anything", 1, Difficulty::Easy)
            .await
            .expect("generation should succeed");

        assert_eq!(mcqs.len(), 1);
        assert_eq!(mcqs[0].answer, "C");
    }

    #[actix_rt::test]
    async fn all_malformed_is_an_empty_generation_error() {
        let mut model = MockModelService::new();
        model.expect_complete_json().returning(|_| {
            Ok(r#"{"mcqs": [{"question": "Q?", "options": ["A. a"], "answer": "Z"}]}"#.to_string())
        });

        let service = McqService::new(Arc::new(model));
        let err = service
            .generate_mcqs("anything", 1, Difficulty::Hard)
            .await
            .expect_err("should fail");

        assert!(matches!(err, AppError::EmptyGeneration(_)));
    }

    #[test]
    fn strip_code_fence_variants() {
        assert_eq!(strip_code_fence("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fence("```\n[]\n```"), "[]");
        assert_eq!(strip_code_fence("  {\"a\": 1}  "), "{\"a\": 1}");
    }
}
