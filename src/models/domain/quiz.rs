use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One multiple-choice question parsed out of a free-text model reply.
///
/// Only well-formed blocks become items: a non-empty question, exactly four
/// options keyed "A"-"D" and a parsed answer letter. Explanation and
/// improvement always carry text, falling back to canned defaults when the
/// reply omitted them or the improvement was rejected as generic.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizItem {
    pub question: String,
    pub options: BTreeMap<String, String>,
    pub answer: String,
    pub explanation: String,
    pub improvement: String,
}

/// One structured MCQ returned by the model in JSON mode.
///
/// Options keep their labeled "A ..." form in reply order; no explanation is
/// requested in this mode.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct McqItem {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl McqItem {
    /// A usable MCQ has a question, exactly four options and a single
    /// answer letter in A-D.
    pub fn is_well_formed(&self) -> bool {
        let answer_ok = self.answer.len() == 1
            && self
                .answer
                .chars()
                .next()
                .is_some_and(|c| ('A'..='D').contains(&c));

        !self.question.trim().is_empty() && self.options.len() == 4 && answer_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mcq(options: usize, answer: &str) -> McqItem {
        McqItem {
            question: "What is 2+2?".to_string(),
            options: (0..options).map(|i| format!("{} option", i)).collect(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn mcq_with_four_options_and_letter_answer_is_well_formed() {
        assert!(mcq(4, "B").is_well_formed());
    }

    #[test]
    fn mcq_with_wrong_option_count_is_rejected() {
        assert!(!mcq(3, "A").is_well_formed());
        assert!(!mcq(5, "A").is_well_formed());
    }

    #[test]
    fn mcq_with_bad_answer_is_rejected() {
        assert!(!mcq(4, "E").is_well_formed());
        assert!(!mcq(4, "AB").is_well_formed());
        assert!(!mcq(4, "").is_well_formed());
    }

    #[test]
    fn quiz_item_round_trips_through_json() {
        let item = QuizItem {
            question: "What is 2+2?".to_string(),
            options: BTreeMap::from([
                ("A".to_string(), "3".to_string()),
                ("B".to_string(), "4".to_string()),
                ("C".to_string(), "5".to_string()),
                ("D".to_string(), "6".to_string()),
            ]),
            answer: "B".to_string(),
            explanation: "Basic arithmetic.".to_string(),
            improvement: "Practice mental arithmetic drills".to_string(),
        };

        let json = serde_json::to_string(&item).expect("item should serialize");
        let parsed: QuizItem = serde_json::from_str(&json).expect("item should deserialize");
        assert_eq!(item, parsed);
    }
}
