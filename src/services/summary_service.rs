use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{SummaryType, ToneStyle},
    services::ModelService,
};

#[derive(Debug)]
pub struct SummaryOutput {
    pub summary_text: String,
    /// Display topic used as the PDF title and download filename stem.
    pub topic: String,
}

/// Two-stage summary chain: expand the input into a full explanation, then
/// condense it in the requested format and tone. The intermediate expansion
/// gives the condensing prompt enough material to fill every mandatory
/// section even for terse inputs.
pub struct SummaryService {
    model: Arc<dyn ModelService>,
}

impl SummaryService {
    pub fn new(model: Arc<dyn ModelService>) -> Self {
        Self { model }
    }

    pub async fn generate_summary(
        &self,
        text: &str,
        summary_type: SummaryType,
        tone: ToneStyle,
    ) -> AppResult<SummaryOutput> {
        let explanation = self
            .model
            .complete(&prompts::explanation_prompt(text))
            .await?;

        let summary_text = self
            .model
            .complete(&prompts::summary_prompt(&explanation, summary_type, tone))
            .await?;

        if summary_text.trim().is_empty() {
            return Err(AppError::EmptyGeneration(
                "summary generation produced no content".to_string(),
            ));
        }

        log::info!(
            "generated {} summary ({} chars from {} input chars)",
            summary_type,
            summary_text.len(),
            text.len()
        );

        Ok(SummaryOutput {
            summary_text,
            topic: summary_topic(summary_type, tone),
        })
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn summary_topic(summary_type: SummaryType, tone: ToneStyle) -> String {
    format!("{} ({})", title_case(&summary_type.to_string()), tone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockModelService;

    #[actix_rt::test]
    async fn chains_explanation_into_summary() {
        let mut model = MockModelService::new();
        model
            .expect_complete()
            .withf(|prompt: &str| !prompt.contains("EXPANDED EXPLANATION"))
            .returning(|_| Ok("EXPANDED EXPLANATION".to_string()));
        model
            .expect_complete()
            .withf(|prompt: &str| prompt.contains("EXPANDED EXPLANATION"))
            .returning(|_| Ok("KEY CONCEPTS:\ncondensed".to_string()));

        let service = SummaryService::new(Arc::new(model));
        let output = service
            .generate_summary(
                &"x".repeat(60),
                SummaryType::Short,
                ToneStyle::Simple,
            )
            .await
            .expect("generation should succeed");

        assert!(output.summary_text.contains("condensed"));
        assert_eq!(output.topic, "Short summary (simple)");
    }

    #[actix_rt::test]
    async fn first_stage_failure_short_circuits() {
        let mut model = MockModelService::new();
        model
            .expect_complete()
            .times(1)
            .returning(|_| Err(AppError::ModelError("down".to_string())));

        let service = SummaryService::new(Arc::new(model));
        let err = service
            .generate_summary(&"y".repeat(60), SummaryType::Bullets, ToneStyle::Academic)
            .await
            .expect_err("should fail");

        assert!(matches!(err, AppError::ModelError(_)));
    }
}
