//! Line-level heuristics that turn generated text into layout elements.
//!
//! The prompts pin down the markup (ALL-CAPS section titles ending in a
//! colon, numbered subdivisions, "Question N:" headings, triple-backtick code
//! fences, "KEY EXAM POINT:" callouts), and this module recovers it from each
//! already markdown-stripped line.

use once_cell::sync::Lazy;
use regex::Regex;

static SUBSECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\s+").expect("SUBSECTION_RE is a valid regex pattern")
});

static QUESTION_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^question\s+\d+$").expect("QUESTION_HEADING_RE is a valid regex pattern")
});

static EXAM_POINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:KEY\s+)?EXAM POINT:\s*").expect("EXAM_POINT_RE is a valid regex pattern")
});

static NUMBERED_SECTION_KEYWORDS: [&str; 8] = [
    "step", "stage", "phase", "process", "principle", "rule", "law", "type",
];

/// What the renderer should do with one non-blank line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineClass {
    /// Toggles code capture mode.
    CodeFence,
    /// Highlighted callout; prefix already stripped. Tutorial mode only.
    ExamCallout(String),
    /// ALL-CAPS title ending in ":" - colon removed.
    SectionHeader(String),
    /// "2.1 ...", "Question N" or capitalized short title ending in ":".
    Subheading(String),
    /// Regular content line, leading bullets stripped.
    Content(String),
    /// Whitespace-only or reduced to nothing by cleanup.
    Blank,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Revision notes: auto-numbered sections, bulleted content lines.
    Summary,
    /// Long-form chapter: exam callouts, code-heavy, plain paragraphs.
    Tutorial,
}

/// Classify one markdown-stripped line. Priority: code fence, exam callout
/// (tutorial only), trailing-colon headings, plain content.
pub fn classify_line(line: &str, mode: RenderMode) -> LineClass {
    let line = line.trim();
    if line.is_empty() {
        return LineClass::Blank;
    }

    if line.starts_with("```") {
        return LineClass::CodeFence;
    }

    // horizontal rules from the model are noise
    if line.starts_with("-----") {
        return LineClass::Blank;
    }

    if mode == RenderMode::Tutorial {
        if let Some(m) = EXAM_POINT_RE.find(line) {
            return LineClass::ExamCallout(line[m.end()..].trim().to_string());
        }
    }

    if let Some(heading) = classify_heading(line) {
        return heading;
    }

    let content = line.trim_start_matches(['-', '*']).trim();
    if content.is_empty() {
        return LineClass::Blank;
    }

    LineClass::Content(content.to_string())
}

fn classify_heading(line: &str) -> Option<LineClass> {
    if !line.ends_with(':') || line.len() <= 3 {
        return None;
    }

    let title = line[..line.len() - 1].trim();

    if QUESTION_HEADING_RE.is_match(title) {
        return Some(LineClass::Subheading(title.to_string()));
    }

    if is_section_title(title) {
        return Some(LineClass::SectionHeader(title.to_string()));
    }

    if SUBSECTION_RE.is_match(title) {
        return Some(LineClass::Subheading(title.to_string()));
    }

    let first = title.chars().next()?;
    if first.is_uppercase() && title.len() < 80 {
        return Some(LineClass::Subheading(title.to_string()));
    }

    None
}

/// Section titles are entirely uppercase and longer than 8 characters,
/// spaces included. Spaces are ignored only for the uppercase check.
fn is_section_title(title: &str) -> bool {
    let compact: String = title.chars().filter(|c| !c.is_whitespace()).collect();

    title.len() > 8
        && compact.chars().any(|c| c.is_alphabetic())
        && !compact.chars().any(|c| c.is_lowercase())
}

/// Sections named after steps/stages/rules get their content lines
/// auto-numbered in summary mode.
pub fn is_numbered_section(section_title: &str) -> bool {
    let lower = section_title.to_lowercase();
    NUMBERED_SECTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// "1. " / "2) " style content that the model numbered itself.
pub fn is_self_numbered(content: &str) -> bool {
    let mut chars = content.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    first.is_ascii_digit()
        && content.len() > 2
        && (content[1..].starts_with(". ") || content[1..].starts_with(") "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_caps_title_with_colon_is_section_header() {
        assert_eq!(
            classify_line("KEY CONCEPTS:", RenderMode::Summary),
            LineClass::SectionHeader("KEY CONCEPTS".to_string())
        );
    }

    #[test]
    fn spaced_caps_title_counts_its_spaces() {
        // 9 characters with the space, so it clears the section gate
        assert_eq!(
            classify_line("USE CASES:", RenderMode::Summary),
            LineClass::SectionHeader("USE CASES".to_string())
        );
    }

    #[test]
    fn short_caps_title_is_subheading_not_section() {
        assert_eq!(
            classify_line("SUMMARY:", RenderMode::Summary),
            LineClass::Subheading("SUMMARY".to_string())
        );
    }

    #[test]
    fn numeric_subsection_is_subheading() {
        assert_eq!(
            classify_line("2.1 Formal Definition:", RenderMode::Tutorial),
            LineClass::Subheading("2.1 Formal Definition".to_string())
        );
    }

    #[test]
    fn question_heading_is_subheading() {
        assert_eq!(
            classify_line("Question 12:", RenderMode::Tutorial),
            LineClass::Subheading("Question 12".to_string())
        );
    }

    #[test]
    fn capitalized_short_title_is_subheading() {
        assert_eq!(
            classify_line("Important Points:", RenderMode::Summary),
            LineClass::Subheading("Important Points".to_string())
        );
    }

    #[test]
    fn lowercase_title_is_plain_content() {
        assert_eq!(
            classify_line("this is not a heading:", RenderMode::Summary),
            LineClass::Content("this is not a heading:".to_string())
        );
    }

    #[test]
    fn code_fence_toggles() {
        assert_eq!(classify_line("```cpp", RenderMode::Tutorial), LineClass::CodeFence);
        assert_eq!(classify_line("```", RenderMode::Tutorial), LineClass::CodeFence);
    }

    #[test]
    fn exam_point_only_in_tutorial_mode() {
        assert_eq!(
            classify_line("KEY EXAM POINT: B-trees stay balanced", RenderMode::Tutorial),
            LineClass::ExamCallout("B-trees stay balanced".to_string())
        );
        assert_eq!(
            classify_line("exam point: case insensitive", RenderMode::Tutorial),
            LineClass::ExamCallout("case insensitive".to_string())
        );
        assert_eq!(
            classify_line("EXAM POINT: ignored in summary", RenderMode::Summary),
            LineClass::Content("EXAM POINT: ignored in summary".to_string())
        );
    }

    #[test]
    fn bullets_are_stripped_from_content() {
        assert_eq!(
            classify_line("- bullet item", RenderMode::Summary),
            LineClass::Content("bullet item".to_string())
        );
        assert_eq!(
            classify_line("* starred item", RenderMode::Summary),
            LineClass::Content("starred item".to_string())
        );
    }

    #[test]
    fn rules_and_blanks_are_dropped() {
        assert_eq!(classify_line("--------", RenderMode::Tutorial), LineClass::Blank);
        assert_eq!(classify_line("   ", RenderMode::Summary), LineClass::Blank);
    }

    #[test]
    fn numbered_section_detection() {
        assert!(is_numbered_section("STEPS OF THE PROCESS"));
        assert!(is_numbered_section("Types of Indexes"));
        assert!(!is_numbered_section("KEY CONCEPTS"));
    }

    #[test]
    fn self_numbered_detection() {
        assert!(is_self_numbered("1. first"));
        assert!(is_self_numbered("2) second"));
        assert!(!is_self_numbered("10. double digit")); // only single-digit prefixes
        assert!(!is_self_numbered("no number"));
    }
}
