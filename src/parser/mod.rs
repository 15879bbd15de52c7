//! Best-effort parser for free-text quiz replies.
//!
//! The model is prompted to emit "Q:" blocks with options, an answer letter,
//! an explanation and an "Area of Improvement". Replies rarely match the
//! format perfectly, so parsing never fails: blocks that cannot be salvaged
//! are skipped, and missing fields fall back to canned defaults. Callers must
//! treat an empty result as "the reply contained no usable content", which is
//! not the same thing as a transport or model failure.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::models::domain::QuizItem;

static OPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-D])[.):\s]+(.+)").expect("OPTION_RE is a valid regex pattern")
});

static ANSWER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)answer\s*[:.\-]?\s*([A-D])").expect("ANSWER_RE is a valid regex pattern")
});

static EXPLANATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)explanation\s*[:.\-]?\s*(.+)")
        .expect("EXPLANATION_RE is a valid regex pattern")
});

static IMPROVEMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)area of improvement\s*[:.\-]?\s*(.+)")
        .expect("IMPROVEMENT_RE is a valid regex pattern")
});

static IMPROVEMENT_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)area of improvement").expect("IMPROVEMENT_MARKER is a valid regex pattern")
});

/// Improvement strings that are exactly one of these phrases get thrown away
/// and replaced by a keyword fallback. The list and the 15-character floor
/// are behavioral contracts; do not extend them without product guidance.
const GENERIC_IMPROVEMENTS: [&str; 9] = [
    "review the topic",
    "review the topic thoroughly",
    "study more",
    "practice more",
    "read more",
    "learn more",
    "review this topic",
    "study this topic",
    "practice this",
];

const BARE_IMPROVEMENTS: [&str; 5] = ["review", "study", "practice", "learn", "read"];

const MIN_IMPROVEMENT_LEN: usize = 15;

const DEFAULT_EXPLANATION: &str = "The correct answer provides the most accurate solution.";
const DEFAULT_IMPROVEMENT: &str = "Study the fundamental concepts related to this question";

/// Ordered keyword table for synthesizing an improvement when the model's own
/// suggestion was missing or rejected. "javascript" must precede "java".
const IMPROVEMENT_FALLBACKS: [(&[&str], &str); 7] = [
    (&["python"], "Review Python fundamentals and syntax"),
    (&["sql", "database"], "Study database concepts and SQL queries"),
    (&["javascript", "js"], "Review JavaScript core concepts"),
    (&["algorithm"], "Practice algorithm design and analysis"),
    (&["data structure"], "Study data structures implementation"),
    (&["network", "osi"], "Review networking fundamentals"),
    (&["java"], "Study Java programming concepts"),
];

/// Parse a raw model reply into validated quiz items, dropping blocks that
/// are missing the question, any of the four options, or the answer letter.
pub fn parse_quiz_response(raw: &str) -> Vec<QuizItem> {
    let mut quiz = Vec::new();

    for (block_idx, block) in raw.trim().split("Q:").skip(1).enumerate() {
        match parse_block(block) {
            Some(item) => quiz.push(item),
            None => log::debug!("skipped quiz block {}: missing fields", block_idx + 1),
        }
    }

    quiz
}

fn parse_block(block: &str) -> Option<QuizItem> {
    let lines: Vec<&str> = block
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let question = (*lines.first()?).to_string();

    let mut options: BTreeMap<String, String> = BTreeMap::new();
    for line in lines.iter().skip(1) {
        if let Some(caps) = OPTION_RE.captures(line) {
            // last occurrence wins on repeated keys
            options.insert(caps[1].to_string(), caps[2].trim().to_string());
        }
    }

    let full_text = lines.join("\n");

    let answer = ANSWER_RE
        .captures(&full_text)
        .map(|caps| caps[1].to_uppercase());

    // The explanation runs up to (not including) "Area of Improvement".
    let improvement_at = IMPROVEMENT_MARKER
        .find(&full_text)
        .map(|m| m.start())
        .unwrap_or(full_text.len());

    let explanation = EXPLANATION_RE
        .captures(&full_text[..improvement_at])
        .map(|caps| collapse_whitespace(&caps[1]))
        .filter(|text| !text.is_empty());

    let improvement = IMPROVEMENT_RE
        .captures(&full_text)
        .map(|caps| collapse_whitespace(&caps[1]))
        .filter(|text| !is_too_generic(text));

    if question.is_empty() || options.len() != 4 {
        return None;
    }

    Some(QuizItem {
        improvement: improvement.unwrap_or_else(|| fallback_improvement(&question)),
        explanation: explanation.unwrap_or_else(|| DEFAULT_EXPLANATION.to_string()),
        answer: answer?,
        question,
        options,
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_too_generic(improvement: &str) -> bool {
    let lower = improvement.trim().to_lowercase();

    GENERIC_IMPROVEMENTS.contains(&lower.as_str())
        || improvement.len() < MIN_IMPROVEMENT_LEN
        || BARE_IMPROVEMENTS.contains(&lower.as_str())
}

fn fallback_improvement(question: &str) -> String {
    let question_lower = question.to_lowercase();

    for (keywords, improvement) in IMPROVEMENT_FALLBACKS {
        if keywords.iter().any(|kw| question_lower.contains(kw)) {
            return (*improvement).to_string();
        }
    }

    DEFAULT_IMPROVEMENT.to_string()
}
