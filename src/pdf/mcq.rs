//! Plain worksheet-style PDF for multiple-choice questions: numbered
//! questions with their options, answer key on its own final page.

use crate::errors::AppResult;
use crate::models::domain::McqItem;
use crate::pdf::layout::{FontKind, PageCanvas, INK};

pub fn render_mcq_pdf(items: &[McqItem], title: &str) -> AppResult<Vec<u8>> {
    let heading = format!("{} - MCQs", title);
    let mut canvas = PageCanvas::new(&heading)?;

    canvas.centered_cell(&heading, FontKind::Bold, 16.0, INK, 10.0);
    canvas.advance(8.0);

    for (idx, item) in items.iter().enumerate() {
        canvas.write_wrapped(
            &format!("Q{}. {}", idx + 1, item.question),
            FontKind::Bold,
            12.0,
            INK,
            0.0,
            8.0,
        );
        for option in &item.options {
            canvas.write_wrapped(option, FontKind::Regular, 11.0, INK, 4.0, 7.0);
        }
        canvas.advance(3.0);
    }

    canvas.new_page();
    canvas.centered_cell("Answer Key", FontKind::Bold, 14.0, INK, 10.0);
    canvas.advance(5.0);

    for (idx, item) in items.iter().enumerate() {
        canvas.write_wrapped(
            &format!("Q{}: {}", idx + 1, item.answer),
            FontKind::Regular,
            12.0,
            INK,
            0.0,
            8.0,
        );
    }

    canvas.finish()
}
