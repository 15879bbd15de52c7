use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::domain::quiz::McqItem;

/// The kinds of content this server can generate. Used to key per-session
/// artifacts and in-flight tasks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Quiz,
    Mcq,
    Summary,
    Tutorial,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Quiz => write!(f, "quiz"),
            ContentKind::Mcq => write!(f, "mcq"),
            ContentKind::Summary => write!(f, "summary"),
            ContentKind::Tutorial => write!(f, "tutorial"),
        }
    }
}

impl FromStr for ContentKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiz" => Ok(ContentKind::Quiz),
            "mcq" => Ok(ContentKind::Mcq),
            "summary" => Ok(ContentKind::Summary),
            "tutorial" => Ok(ContentKind::Tutorial),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Tutorial length selector, mapped to the numeric depth the prompt expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Short,
    Medium,
    Full,
}

impl Depth {
    pub fn level(&self) -> u8 {
        match self {
            Depth::Short => 1,
            Depth::Medium => 2,
            Depth::Full => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryType {
    Short,
    Bullets,
    Detailed,
}

impl fmt::Display for SummaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryType::Short => write!(f, "short summary"),
            SummaryType::Bullets => write!(f, "bullet points"),
            SummaryType::Detailed => write!(f, "detailed summary"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneStyle {
    Simple,
    Professional,
    Academic,
}

impl fmt::Display for ToneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneStyle::Simple => write!(f, "simple"),
            ToneStyle::Professional => write!(f, "professional"),
            ToneStyle::Academic => write!(f, "academic"),
        }
    }
}

/// The last generated artifact for a session, kept around so the download
/// endpoint can render it to PDF on demand. Quiz results are returned inline
/// and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredContent {
    Mcqs { items: Vec<McqItem>, title: String },
    Text { body: String, topic: String },
}

impl StoredContent {
    pub fn topic(&self) -> &str {
        match self {
            StoredContent::Mcqs { title, .. } => title,
            StoredContent::Text { topic, .. } => topic,
        }
    }
}
