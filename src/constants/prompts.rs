//! Prompt templates for the generation services. The free-text prompts pin
//! down an exact output markup (section titles ending in colons, "Q:" blocks,
//! no markdown) because the parser and the PDF renderer both key off it.

use crate::models::domain::{Depth, Difficulty, SummaryType, ToneStyle};

pub fn quiz_prompt(topic: &str, num_questions: u32, difficulty: Difficulty) -> String {
    format!(
        "You are an expert technical quiz generator.\n\
\n\
Generate a quiz of {num_questions} multiple-choice questions (MCQs) on the topic: \"{topic}\".\n\
\n\
The difficulty level selected by the user is: {difficulty}.\n\
Interpret it EXACTLY as:\n\
easy -> Easy (basic conceptual and beginner-friendly)\n\
medium -> Medium (interview-level conceptual + small logical reasoning)\n\
hard -> Hard (deep technical, multi-step reasoning, advanced interview level)\n\
\n\
CRITICAL: Each question MUST include ALL THREE fields below in EXACTLY this format:\n\
\n\
Q: <Question>\n\
A. <Option A>\n\
B. <Option B>\n\
C. <Option C>\n\
D. <Option D>\n\
Answer: <Correct Option Letter>\n\
Explanation: <Short, clear explanation of why this answer is correct>\n\
Area of Improvement: <specific concept or subtopic to practice>\n\
\n\
MANDATORY REQUIREMENTS FOR \"Area of Improvement\":\n\
- MUST be specific to the question's topic and mention the exact concept or skill to practice\n\
- GOOD examples: \"Study list comprehensions in Python\", \"Review the difference between JOIN types in SQL\",\n\
  \"Practice binary tree traversal algorithms\"\n\
- BAD examples (DO NOT USE): \"Review the topic\", \"Study more\", \"Practice\"\n\
\n\
Guidelines:\n\
- Only ONE correct answer per question\n\
- No numbering (NO Q1, Q2... only \"Q:\")\n\
- Do NOT repeat questions\n\
- Keep explanations concise but helpful\n\
- The quiz difficulty MUST strictly match the selected level\n"
    )
}

pub fn mcq_prompt(topic: &str, num_questions: u32, difficulty: Difficulty) -> String {
    format!(
        "Generate exactly {num_questions} MCQs on the topic \"{topic}\" with difficulty \"{difficulty}\".\n\
\n\
STRICT RULES:\n\
1. You MUST output exactly {num_questions} MCQs - not less, not more.\n\
2. Output MUST follow this JSON structure exactly:\n\
\n\
{{\n\
  \"mcqs\": [\n\
    {{\n\
      \"question\": \"text?\",\n\
      \"options\": [\"A ...\", \"B ...\", \"C ...\", \"D ...\"],\n\
      \"answer\": \"A\"\n\
    }}\n\
  ]\n\
}}\n\
\n\
3. Each question must have exactly 4 options labeled A, B, C, D and one correct answer letter.\n\
4. DO NOT include explanations.\n\
5. DO NOT include any extra text outside JSON, no comments, no markdown formatting.\n\
Return ONLY the final JSON.\n"
    )
}

pub fn explanation_prompt(topic: &str) -> String {
    format!(
        "You are an expert educational assistant that provides accurate, detailed, and well-structured explanations.\n\
Write a comprehensive explanation on the following topic:\n\
\n\
Topic: {topic}\n\
\n\
Your explanation should include:\n\
1. An introduction to the topic.\n\
2. Key concepts and definitions.\n\
3. Important subtopics or components.\n\
4. Use cases or applications (if any).\n\
5. A conclusion summarizing the topic.\n"
    )
}

pub fn summary_prompt(content: &str, summary_type: SummaryType, tone: ToneStyle) -> String {
    format!(
        "You are an expert summarization assistant specializing in PDF-ready document formatting.\n\
Your task is to create high-quality '{summary_type}' style notes.\n\
Tone/style required: {tone}\n\
\n\
Content to summarize:\n\
{content}\n\
\n\
CRITICAL FORMATTING RULES (MUST FOLLOW EXACTLY):\n\
1. NO MARKDOWN SYMBOLS ALLOWED: no underscores, asterisks, backticks, hashtags or dash bullets.\n\
2. SECTION HEADINGS must be in ALL CAPS and end with a colon, e.g. KEY CONCEPTS:\n\
3. SUBHEADINGS start with a capital letter and end with a colon, e.g. Important Points:\n\
4. CONTENT uses numbered lists (1. 2. 3.), short scannable lines, plain text only.\n\
\n\
You MUST include ALL of these sections in this exact order:\n\
\n\
KEY CONCEPTS:\n\
IMPORTANT SUBTOPICS:\n\
USE CASES:\n\
ADDITIONAL DETAILS:\n\
KEY TAKEAWAYS:\n\
\n\
Depth per section: short summary = 1-2 concise lines, bullet points = 3-5 one-sentence points,\n\
detailed summary = 5-8 points of 2-3 sentences each, still structured, NOT long paragraphs.\n\
Tone: simple = beginner-friendly short sentences; professional = concise industry terminology;\n\
academic = formal, precise, objective.\n\
\n\
Output format: Clean text notes ready for PDF. No extra headers or metadata.\n\
Begin the summary now.\n"
    )
}

pub fn tutorial_prompt(topic: &str, depth: Depth) -> String {
    let level = depth.level();
    format!(
        "ROLE & CONTEXT\n\
You are a senior computer science professor, textbook author, and academic content architect.\n\
You specialize in writing LONG-FORM, EXAM-ORIENTED, PDF-READY tutorials used as chapter material\n\
in university textbooks and professional exam guides.\n\
\n\
Generate a COMPLETE, SELF-CONTAINED tutorial on: '{topic}'.\n\
\n\
The selected depth level is = {level}.\n\
Depth 1 (Short Overview) -> 2,200-2,800 words. Depth 2 (Detailed Explanation) -> 4,200-5,200 words.\n\
Depth 3 (Full-Length Chapter) -> 6,500-8,000+ words. Word count targets are MINIMUMS.\n\
Expand explanations using intuition, examples, edge cases, and comparisons. Be CODE-HEAVY with\n\
line-by-line explanations.\n\
\n\
CRITICAL FORMATTING RULES (MUST FOLLOW):\n\
- NEVER use markdown headings (###, ##, #) or dash bullets (-)\n\
- Use ONLY: plain section titles ending with a colon (:), numbered subdivisions (2.1, 2.2, 3.1),\n\
  numbered lists (1., 2., 3.), and clean paragraphs\n\
- Section titles must be ALL CAPS, e.g. CORE CONCEPTS AND THEORY:\n\
- All code MUST be inside triple backticks with language specified; default language is C++\n\
- Interview questions use the format: Question 1:, Question 2:, etc.\n\
- Highlight critical exam concepts on their own line starting with: KEY EXAM POINT:\n\
\n\
MANDATORY SECTIONS, in order:\n\
1. INTRODUCTION AND IMPORTANCE (5-7 paragraphs: definition, history, academic relevance, industry usage)\n\
2. CORE CONCEPTS AND THEORY (5-7 subtopics numbered 2.1, 2.2, ... each with definition, intuition,\n\
   step-by-step working, analogy, C++ example with walkthrough, complexity analysis, common mistakes)\n\
3. ADVANCED CONCEPTS AND OPTIMIZATIONS (3-5 topics with deep theory and optimized code)\n\
4. PRACTICE QUESTIONS (at least 5, each with approach breakdown, full solution and complexity)\n\
5. ADVANCED PRACTICE QUESTIONS (at least 5, with multiple approaches and trade-offs)\n\
6. INTERVIEW QUESTIONS AND ANSWERS (Depth 1: exactly 5, Depth 2: exactly 10, Depth 3: exactly 20;\n\
   section title TOP 5/10/20 INTERVIEW QUESTIONS AND ANSWERS to match; answers 150-250 words)\n\
7. KEY EXAM POINTS (8-10 critical exam concepts, each explained)\n\
8. SUMMARY AND NEXT STEPS (5-6 paragraphs: recap, pitfalls, learning roadmap, interview tips)\n\
\n\
DO NOT mention word counts or verification steps in the final output.\n\
Begin the tutorial now.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_prompt_pins_block_markup() {
        let prompt = quiz_prompt("SQL joins", 5, Difficulty::Hard);
        assert!(prompt.contains("Q: <Question>"));
        assert!(prompt.contains("Area of Improvement:"));
        assert!(prompt.contains("\"SQL joins\""));
        assert!(prompt.contains("hard"));
    }

    #[test]
    fn mcq_prompt_requests_json_only() {
        let prompt = mcq_prompt("OSI model", 10, Difficulty::Easy);
        assert!(prompt.contains("\"mcqs\""));
        assert!(prompt.contains("Return ONLY the final JSON."));
        assert!(prompt.contains("exactly 10 MCQs"));
    }

    #[test]
    fn tutorial_prompt_interpolates_depth_level() {
        let prompt = tutorial_prompt("B-trees", Depth::Full);
        assert!(prompt.contains("depth level is = 3"));
        assert!(prompt.contains("KEY EXAM POINT:"));
    }

    #[test]
    fn summary_prompt_keeps_mandatory_sections() {
        let prompt = summary_prompt("content here", SummaryType::Bullets, ToneStyle::Professional);
        for section in [
            "KEY CONCEPTS:",
            "IMPORTANT SUBTOPICS:",
            "USE CASES:",
            "ADDITIONAL DETAILS:",
            "KEY TAKEAWAYS:",
        ] {
            assert!(prompt.contains(section), "missing {}", section);
        }
    }
}
