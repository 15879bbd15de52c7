//! Page canvas over `printpdf`: cursor-based layout on A4 pages with the
//! fixed typography used by every generated document.
//!
//! The cursor runs top-down in millimetres (the convention the layout
//! heuristics are written in) and is converted to the PDF's bottom-up
//! coordinates only when drawing. Pages carry a footer with the page number,
//! and every page after the first repeats the document title as a running
//! header.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Polygon, Rgb,
};

use crate::errors::{AppError, AppResult};
use crate::pdf::text::{sanitize_text, text_width_mm, wrap_text};

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN_LEFT: f32 = 10.0;
pub const MARGIN_RIGHT: f32 = 10.0;
pub const MARGIN_TOP: f32 = 10.0;
/// Auto page break limit: 20mm bottom margin.
pub const BOTTOM_LIMIT: f32 = 277.0;
/// A section header this close to the bottom starts a fresh page instead.
pub const SECTION_BREAK_AT: f32 = 250.0;
/// Subheadings and callouts tolerate slightly less headroom.
pub const SUBHEADING_BREAK_AT: f32 = 260.0;
pub const CODE_BREAK_AT: f32 = 240.0;

pub const ACCENT: (u8, u8, u8) = (255, 153, 51);
pub const WHITE: (u8, u8, u8) = (255, 255, 255);
pub const INK: (u8, u8, u8) = (30, 30, 30);
pub const BODY_GREY: (u8, u8, u8) = (60, 60, 60);
pub const SUBTLE_GREY: (u8, u8, u8) = (100, 100, 100);
pub const HEADER_GREY: (u8, u8, u8) = (120, 120, 120);
pub const FOOTER_GREY: (u8, u8, u8) = (150, 150, 150);
pub const BOX_GREY: (u8, u8, u8) = (245, 245, 245);
pub const BOX_TEXT: (u8, u8, u8) = (50, 50, 50);
pub const CALLOUT_BG: (u8, u8, u8) = (255, 245, 230);
pub const CALLOUT_TEXT: (u8, u8, u8) = (102, 51, 0);
pub const CODE_TEXT: (u8, u8, u8) = (33, 37, 41);

/// Control-point factor for approximating a quarter circle with one cubic
/// bezier segment.
const BEZIER_ARC: f32 = 0.552_284_8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FontKind {
    Regular,
    Bold,
    Oblique,
    Mono,
}

pub struct PageCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
    mono: IndirectFontRef,
    title: String,
    cursor: f32,
    page_no: u32,
}

impl PageCanvas {
    pub fn new(title: &str) -> AppResult<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

        let regular = add_font(&doc, BuiltinFont::Helvetica)?;
        let bold = add_font(&doc, BuiltinFont::HelveticaBold)?;
        let oblique = add_font(&doc, BuiltinFont::HelveticaOblique)?;
        let mono = add_font(&doc, BuiltinFont::Courier)?;

        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            oblique,
            mono,
            title: title.to_string(),
            cursor: MARGIN_TOP,
            page_no: 1,
        })
    }

    pub fn page_count(&self) -> u32 {
        self.page_no
    }

    pub(crate) fn cursor_mm(&self) -> f32 {
        self.cursor
    }

    pub(crate) fn advance(&mut self, mm: f32) {
        self.cursor += mm;
    }

    fn font(&self, kind: FontKind) -> &IndirectFontRef {
        match kind {
            FontKind::Regular => &self.regular,
            FontKind::Bold => &self.bold,
            FontKind::Oblique => &self.oblique,
            FontKind::Mono => &self.mono,
        }
    }

    fn set_fill(&self, color: (u8, u8, u8)) {
        self.layer.set_fill_color(rgb(color));
    }

    /// Draw one line of text with its baseline placed inside a cell of
    /// `line_h` starting at the current cursor, then advance the cursor.
    fn cell(&mut self, text: &str, kind: FontKind, size: f32, color: (u8, u8, u8), x: f32, line_h: f32) {
        self.set_fill(color);
        let baseline = PAGE_HEIGHT - (self.cursor + line_h * 0.72);
        self.layer
            .use_text(text, size, Mm(x), Mm(baseline), self.font(kind));
        self.cursor += line_h;
    }

    pub(crate) fn centered_cell(&mut self, text: &str, kind: FontKind, size: f32, color: (u8, u8, u8), line_h: f32) {
        let x = (PAGE_WIDTH - text_width_mm(text, size)) / 2.0;
        self.cell(text, kind, size, color, x.max(MARGIN_LEFT), line_h);
    }

    /// Wrapped paragraph with automatic page breaks between lines.
    pub(crate) fn write_wrapped(
        &mut self,
        text: &str,
        kind: FontKind,
        size: f32,
        color: (u8, u8, u8),
        indent: f32,
        line_h: f32,
    ) {
        let x = MARGIN_LEFT + indent;
        let width = PAGE_WIDTH - x - MARGIN_RIGHT;
        for line in wrap_text(&sanitize_text(text), width, size) {
            if self.cursor + line_h > BOTTOM_LIMIT {
                self.new_page();
            }
            self.cell(&line, kind, size, color, x, line_h);
        }
    }

    /// Close out the current page with its footer and start a new one with
    /// the running title header.
    pub(crate) fn new_page(&mut self) {
        self.draw_footer();

        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.page_no += 1;
        self.cursor = MARGIN_TOP;

        self.draw_running_header();
    }

    fn draw_footer(&self) {
        let text = format!("Page {}", self.page_no);
        self.set_fill(FOOTER_GREY);
        let x = (PAGE_WIDTH - text_width_mm(&text, 8.0)) / 2.0;
        self.layer
            .use_text(text, 8.0, Mm(x), Mm(12.0), &self.oblique);
    }

    fn draw_running_header(&mut self) {
        self.cell(
            &sanitize_text(&self.title.clone()),
            FontKind::Oblique,
            9.0,
            HEADER_GREY,
            MARGIN_LEFT,
            8.0,
        );

        let y = PAGE_HEIGHT - self.cursor;
        self.layer.set_outline_color(rgb((200, 200, 200)));
        self.layer.set_outline_thickness(0.3);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), Mm(y)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN_RIGHT), Mm(y)), false),
            ],
            is_closed: false,
        });

        self.cursor += 4.0;
    }

    /// Brand banner across the top of the first page.
    pub(crate) fn banner(&mut self, text: &str) {
        self.fill_rounded_rect(
            MARGIN_LEFT,
            self.cursor,
            PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
            12.0,
            0.0,
            ACCENT,
            None,
        );
        self.centered_cell(text, FontKind::Bold, 11.0, WHITE, 12.0);
        self.cursor += 2.0;
    }

    /// Centered document title with subtitle and an accent underline.
    pub(crate) fn title_block(&mut self, topic: &str, subtitle: &str) {
        let title = sanitize_text(&topic.to_uppercase());
        self.centered_cell(&title, FontKind::Bold, 22.0, INK, 14.0);
        self.centered_cell(subtitle, FontKind::Regular, 11.0, SUBTLE_GREY, 6.0);

        let y = PAGE_HEIGHT - (self.cursor + 2.0);
        self.layer.set_outline_color(rgb(ACCENT));
        self.layer.set_outline_thickness(0.6);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(50.0), Mm(y)), false),
                (Point::new(Mm(160.0), Mm(y)), false),
            ],
            is_closed: false,
        });

        self.cursor += 10.0;
    }

    pub(crate) fn author_line(&mut self, text: &str) {
        self.centered_cell(text, FontKind::Regular, 9.0, HEADER_GREY, 6.0);
        self.cursor += 6.0;
    }

    /// Accent bar with the section title. Starts a new page when the cursor
    /// is already in the bottom band.
    pub(crate) fn section_header(&mut self, title: &str) {
        if self.cursor > SECTION_BREAK_AT {
            self.new_page();
        }

        self.cursor += 4.0;
        self.fill_rounded_rect(
            MARGIN_LEFT,
            self.cursor,
            PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
            10.0,
            2.0,
            ACCENT,
            None,
        );
        let text = format!("  {}", sanitize_text(title));
        self.cell(&text, FontKind::Bold, 12.0, WHITE, MARGIN_LEFT, 10.0);
        self.cursor += 3.0;
    }

    /// Light grey box sized to the wrapped subheading text.
    pub(crate) fn subheading(&mut self, text: &str) {
        if self.cursor > SUBHEADING_BREAK_AT {
            self.new_page();
        }

        self.cursor += 2.0;
        let clean = format!("  {}", sanitize_text(text));
        let width = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let lines = wrap_text(&clean, width, 11.0);
        let box_height = 8.0 * lines.len() as f32;

        if self.cursor + box_height > BOTTOM_LIMIT {
            self.new_page();
            self.cursor += 2.0;
        }

        self.fill_rounded_rect(MARGIN_LEFT, self.cursor, width, box_height, 1.5, BOX_GREY, None);
        for line in lines {
            self.cell(&line, FontKind::Bold, 11.0, BOX_TEXT, MARGIN_LEFT, 8.0);
        }
        self.cursor += 2.0;
    }

    /// Bordered highlight box for exam callouts.
    pub(crate) fn exam_callout(&mut self, text: &str) {
        if self.cursor > SECTION_BREAK_AT {
            self.new_page();
        }

        self.cursor += 2.0;
        let clean = format!("  EXAM POINT: {}", sanitize_text(text));
        let width = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let lines = wrap_text(&clean, width, 9.0);
        let box_height = 7.0 * lines.len() as f32 + 2.0;

        if self.cursor + box_height > BOTTOM_LIMIT {
            self.new_page();
            self.cursor += 2.0;
        }

        self.fill_rounded_rect(
            MARGIN_LEFT,
            self.cursor,
            width,
            box_height,
            2.0,
            CALLOUT_BG,
            Some((ACCENT, 0.5)),
        );
        for line in lines {
            self.cell(&line, FontKind::Regular, 9.0, CALLOUT_TEXT, MARGIN_LEFT, 7.0);
        }
        self.cursor += 3.0;
    }

    /// Monospaced block with a filled background per line.
    pub(crate) fn code_block(&mut self, code: &str) {
        if self.cursor > CODE_BREAK_AT {
            self.new_page();
        }

        self.cursor += 2.0;
        let width = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        for raw_line in code.trim_matches('\n').lines() {
            let clean = format!("  {}", sanitize_text(raw_line));
            for line in wrap_text(&clean, width, 9.0) {
                if self.cursor + 5.0 > BOTTOM_LIMIT {
                    self.new_page();
                }
                self.fill_rounded_rect(MARGIN_LEFT, self.cursor, width, 5.0, 0.0, BOX_GREY, None);
                self.cell(&line, FontKind::Mono, 9.0, CODE_TEXT, MARGIN_LEFT, 5.0);
            }
        }
        self.cursor += 2.0;
    }

    /// Plain body line at 10pt with optional indent.
    pub(crate) fn body_line(&mut self, text: &str, indent: f32) {
        self.write_wrapped(text, FontKind::Regular, 10.0, BODY_GREY, indent, 6.0);
        self.cursor += 0.5;
    }

    /// Filled (optionally stroked) rectangle with rounded corners, `top`
    /// measured from the top of the page.
    fn fill_rounded_rect(
        &self,
        x: f32,
        top: f32,
        w: f32,
        h: f32,
        r: f32,
        fill: (u8, u8, u8),
        stroke: Option<((u8, u8, u8), f32)>,
    ) {
        let yt = PAGE_HEIGHT - top;
        let yb = yt - h;
        let k = r * BEZIER_ARC;

        let p = |px: f32, py: f32| Point::new(Mm(px), Mm(py));
        let points = vec![
            (p(x + r, yt), false),
            (p(x + w - r, yt), false),
            (p(x + w - r + k, yt), true),
            (p(x + w, yt - r + k), true),
            (p(x + w, yt - r), false),
            (p(x + w, yb + r), false),
            (p(x + w, yb + r - k), true),
            (p(x + w - r + k, yb), true),
            (p(x + w - r, yb), false),
            (p(x + r, yb), false),
            (p(x + r - k, yb), true),
            (p(x, yb + r - k), true),
            (p(x, yb + r), false),
            (p(x, yt - r), false),
            (p(x, yt - r + k), true),
            (p(x + r - k, yt), true),
            (p(x + r, yt), false),
        ];

        let mode = if let Some((stroke_color, thickness)) = stroke {
            self.layer.set_outline_color(rgb(stroke_color));
            self.layer.set_outline_thickness(thickness);
            PaintMode::FillStroke
        } else {
            PaintMode::Fill
        };

        self.set_fill(fill);
        self.layer.add_polygon(Polygon {
            rings: vec![points],
            mode,
            winding_order: WindingOrder::NonZero,
        });
    }

    /// Draw the last footer and produce the final document bytes.
    pub fn finish(self) -> AppResult<Vec<u8>> {
        self.draw_footer();
        self.doc
            .save_to_bytes()
            .map_err(|e| AppError::RenderError(e.to_string()))
    }
}

fn add_font(doc: &PdfDocumentReference, font: BuiltinFont) -> AppResult<IndirectFontRef> {
    doc.add_builtin_font(font)
        .map_err(|e| AppError::RenderError(e.to_string()))
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_starts_on_page_one() {
        let canvas = PageCanvas::new("Test Document").expect("canvas should build");
        assert_eq!(canvas.page_count(), 1);
        assert_eq!(canvas.cursor_mm(), MARGIN_TOP);
    }

    #[test]
    fn section_header_near_bottom_forces_exactly_one_page_break() {
        let mut canvas = PageCanvas::new("Test Document").expect("canvas should build");
        canvas.advance(SECTION_BREAK_AT - MARGIN_TOP + 1.0);
        assert!(canvas.cursor_mm() > SECTION_BREAK_AT);

        canvas.section_header("KEY CONCEPTS");
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn section_header_with_room_stays_on_page() {
        let mut canvas = PageCanvas::new("Test Document").expect("canvas should build");
        canvas.section_header("KEY CONCEPTS");
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn long_body_overflows_to_next_page() {
        let mut canvas = PageCanvas::new("Test Document").expect("canvas should build");
        for _ in 0..60 {
            canvas.body_line("a body line that occupies six millimetres of height", 0.0);
        }
        assert!(canvas.page_count() >= 2);
    }

    #[test]
    fn finish_produces_pdf_bytes() {
        let mut canvas = PageCanvas::new("Test Document").expect("canvas should build");
        canvas.title_block("Rust Ownership", "Quick Revision Notes");
        canvas.section_header("KEY CONCEPTS");
        canvas.body_line("ownership moves values", 8.0);

        let bytes = canvas.finish().expect("render should succeed");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
