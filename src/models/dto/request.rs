use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{Depth, Difficulty, SummaryType, ToneStyle};

fn default_difficulty() -> Difficulty {
    Difficulty::Medium
}

fn default_quiz_count() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateMcqRequest {
    #[validate(length(min = 3, message = "Topic must be at least 3 characters"))]
    pub topic: String,

    #[validate(range(min = 1, max = 50, message = "Count must be between 1 and 50"))]
    pub count: u32,

    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 3, message = "Topic must be at least 3 characters"))]
    pub topic: String,

    #[serde(default = "default_quiz_count")]
    #[validate(range(min = 1, max = 100, message = "Count must be between 1 and 100"))]
    pub count: u32,

    #[serde(default = "default_difficulty")]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateSummaryRequest {
    #[validate(length(
        min = 50,
        message = "Please enter at least 50 characters to generate a meaningful summary"
    ))]
    pub text: String,

    #[serde(default = "GenerateSummaryRequest::default_type", rename = "type")]
    pub summary_type: SummaryType,

    #[serde(default = "GenerateSummaryRequest::default_tone")]
    pub tone: ToneStyle,
}

impl GenerateSummaryRequest {
    fn default_type() -> SummaryType {
        SummaryType::Short
    }

    fn default_tone() -> ToneStyle {
        ToneStyle::Simple
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateTutorialRequest {
    #[validate(length(min = 3, message = "Topic must be at least 3 characters"))]
    pub topic: String,

    #[serde(default = "GenerateTutorialRequest::default_depth")]
    pub depth: Depth,
}

impl GenerateTutorialRequest {
    fn default_depth() -> Depth {
        Depth::Medium
    }
}
