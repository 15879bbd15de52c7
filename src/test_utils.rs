#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{McqItem, QuizItem};
    use std::collections::BTreeMap;

    /// A model reply in the exact "Q:" block format the quiz prompt asks for.
    pub fn raw_quiz_reply() -> String {
        "Q: What does SQL stand for?\n\
A. Standard Query Language\n\
B. Structured Query Language\n\
C. Simple Query Language\n\
D. Sequential Query Language\n\
Answer: B\n\
Explanation: SQL is the standard language for relational databases.\n\
Area of Improvement: Review relational database terminology and history\n\n\
Q: Which SQL clause filters rows?\n\
A. ORDER BY\n\
B. GROUP BY\n\
C. WHERE\n\
D. SELECT\n\
Answer: C\n\
Explanation: WHERE restricts the rows a query returns.\n\
Area of Improvement: Practice writing WHERE clauses with compound conditions"
            .to_string()
    }

    pub fn quiz_item() -> QuizItem {
        let mut options = BTreeMap::new();
        options.insert("A".to_string(), "Standard Query Language".to_string());
        options.insert("B".to_string(), "Structured Query Language".to_string());
        options.insert("C".to_string(), "Simple Query Language".to_string());
        options.insert("D".to_string(), "Sequential Query Language".to_string());

        QuizItem {
            question: "What does SQL stand for?".to_string(),
            options,
            answer: "B".to_string(),
            explanation: "SQL is the standard language for relational databases.".to_string(),
            improvement: "Review relational database terminology".to_string(),
        }
    }

    pub fn mcq_items(count: usize) -> Vec<McqItem> {
        (0..count)
            .map(|i| McqItem {
                question: format!("Sample question {}?", i + 1),
                options: vec![
                    "A. first option".to_string(),
                    "B. second option".to_string(),
                    "C. third option".to_string(),
                    "D. fourth option".to_string(),
                ],
                answer: "A".to_string(),
            })
            .collect()
    }

    /// Summary text exercising every line class the renderer knows about.
    pub fn structured_summary_text() -> String {
        "KEY CONCEPTS:\n\
Normalization removes redundancy.\n\
Indexes trade write speed for read speed.\n\n\
STEPS OF THE NORMALIZATION PROCESS:\n\
put the data in first normal form\n\
remove partial dependencies\n\n\
Important Points:\n\
- denormalize only with measurements in hand"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::parser::parse_quiz_response;
    use crate::pdf::{render_mcq_pdf, render_summary_pdf};

    #[test]
    fn raw_quiz_reply_parses_cleanly() {
        let quiz = parse_quiz_response(&raw_quiz_reply());
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].question, quiz_item().question);
    }

    #[test]
    fn fixture_content_renders() {
        let pdf = render_mcq_pdf(&mcq_items(3), "Fixtures").expect("mcq fixture should render");
        assert!(pdf.starts_with(b"%PDF"));

        let pdf = render_summary_pdf(&structured_summary_text(), "Fixtures")
            .expect("summary fixture should render");
        assert!(pdf.starts_with(b"%PDF"));
    }
}
