//! Drives a [`PageCanvas`] over generated text to produce summary and
//! tutorial PDFs.

use chrono::Utc;

use crate::errors::AppResult;
use crate::pdf::classify::{classify_line, is_numbered_section, is_self_numbered, LineClass, RenderMode};
use crate::pdf::layout::PageCanvas;
use crate::pdf::text::strip_markdown;

const BRAND: &str = "EXAMPREP DOST";

/// Structured revision notes with auto-numbered sections and bulleted lines.
pub fn render_summary_pdf(summary_text: &str, topic: &str) -> AppResult<Vec<u8>> {
    render_document(summary_text, topic, RenderMode::Summary)
}

/// Long-form chapter with exam callouts and code blocks.
pub fn render_tutorial_pdf(tutorial_text: &str, topic: &str) -> AppResult<Vec<u8>> {
    render_document(tutorial_text, topic, RenderMode::Tutorial)
}

fn render_document(text: &str, topic: &str, mode: RenderMode) -> AppResult<Vec<u8>> {
    let mut canvas = PageCanvas::new(&topic.to_uppercase())?;

    canvas.banner(BRAND);
    match mode {
        RenderMode::Summary => canvas.title_block(topic, "Quick Revision Notes"),
        RenderMode::Tutorial => {
            canvas.title_block(topic, "Complete Tutorial");
            canvas.author_line(&format!(
                "Author: ExamPrep AI | Date: {}",
                Utc::now().format("%B %d, %Y")
            ));
        }
    }

    let mut in_code_block = false;
    let mut code_buffer: Vec<String> = Vec::new();
    let mut point_counter = 0u32;
    let mut in_numbered_section = false;

    for raw_line in text.trim().lines() {
        // fence handling runs on the raw line so code keeps its markdown
        if raw_line.trim().starts_with("```") {
            in_code_block = !in_code_block;
            if !in_code_block && !code_buffer.is_empty() {
                canvas.code_block(&code_buffer.join("\n"));
                code_buffer.clear();
            }
            continue;
        }
        if in_code_block {
            code_buffer.push(raw_line.to_string());
            continue;
        }

        let line = strip_markdown(raw_line);
        match classify_line(&line, mode) {
            LineClass::Blank | LineClass::CodeFence => {}
            LineClass::ExamCallout(text) => canvas.exam_callout(&text),
            LineClass::SectionHeader(title) => {
                in_numbered_section = is_numbered_section(&title);
                point_counter = 0;
                canvas.section_header(&title);
            }
            LineClass::Subheading(title) => canvas.subheading(&title),
            LineClass::Content(content) => match mode {
                RenderMode::Summary => {
                    if is_self_numbered(&content) {
                        canvas.body_line(&content, 8.0);
                    } else if in_numbered_section {
                        point_counter += 1;
                        canvas.body_line(&format!("{}. {}", point_counter, content), 8.0);
                    } else {
                        canvas.body_line(&format!("- {}", content), 8.0);
                    }
                }
                RenderMode::Tutorial => canvas.body_line(&content, 0.0),
            },
        }
    }

    // unterminated fence at EOF: flush what we captured
    if !code_buffer.is_empty() {
        canvas.code_block(&code_buffer.join("\n"));
    }

    canvas.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_SUMMARY: &str = "\
KEY CONCEPTS:
Ownership moves values between bindings.
Borrowing lends access without moving.

STEPS OF THE BORROW CHECK:
the compiler tracks lifetimes
conflicting borrows are rejected

Important Points:
- shared and mutable borrows never overlap";

    #[test]
    fn summary_renders_to_pdf_bytes() {
        let bytes = render_summary_pdf(SAMPLE_SUMMARY, "Rust Ownership")
            .expect("summary render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn tutorial_with_code_and_callouts_renders() {
        let text = "\
INTRODUCTION AND MOTIVATION:
B-trees keep disk reads logarithmic.

KEY EXAM POINT: node fanout determines tree height

2.1 Formal Definition:
Every internal node has between t and 2t children.

```cpp
struct Node { int keys[2*T - 1]; };
```

Question 1:
Why do databases prefer B+ trees?";

        let bytes =
            render_tutorial_pdf(text, "B-Trees").expect("tutorial render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn unterminated_code_fence_is_flushed() {
        let text = "OVERVIEW SECTION:\nsome text\n```python\nprint('never closed')";
        let bytes = render_tutorial_pdf(text, "Python").expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn markdown_heading_is_recognized_after_stripping() {
        // "### KEY CONCEPTS:" must land in the section-header path, which
        // would panic only if classification ran before markdown stripping
        let bytes = render_summary_pdf("### KEY CONCEPTS:\npoint one", "Topic")
            .expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_summary_spans_multiple_pages() {
        let mut text = String::from("KEY CONCEPTS:\n");
        for i in 0..120 {
            text.push_str(&format!("concept number {} explained in one full line\n", i));
        }
        let bytes = render_summary_pdf(&text, "Paging").expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 2000);
    }
}
