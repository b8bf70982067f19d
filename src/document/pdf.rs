//! Paginated A4 PDF output via printpdf
//!
//! Text is wrapped with real glyph metrics when a system font was found and
//! embedded. Without one, the built-in Helvetica faces are used with an
//! approximate width and text reduced to characters they can encode.

use anyhow::{anyhow, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use std::io::Cursor;
use tracing::{debug, info, warn};

use super::layout::wrap;
use super::{Document, DocumentRenderer, Field};
use crate::constants::document::NOTES_HEADING;
use crate::constants::pdf::*;
use crate::font::DocumentFonts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Weight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy)]
struct Style {
    size: f32,
    weight: Weight,
}

impl Style {
    const MARK: Self = Self { size: MARK_SIZE_PT, weight: Weight::Bold };
    const BRAND: Self = Self { size: BRAND_SIZE_PT, weight: Weight::Bold };
    const TITLE: Self = Self { size: TITLE_SIZE_PT, weight: Weight::Bold };
    const SUBTITLE: Self = Self { size: BRAND_SIZE_PT, weight: Weight::Regular };
    const HEADING: Self = Self { size: HEADING_SIZE_PT, weight: Weight::Bold };
    const BODY: Self = Self { size: BODY_SIZE_PT, weight: Weight::Regular };
    const LABEL: Self = Self { size: SMALL_SIZE_PT, weight: Weight::Bold };
    const SMALL: Self = Self { size: SMALL_SIZE_PT, weight: Weight::Regular };

    fn line_height(self) -> f32 {
        self.size * LINE_SPACING * PT_TO_MM
    }
}

/// Renders documents to PDF bytes
#[derive(Debug, Default)]
pub struct PdfRenderer {
    fonts: Option<DocumentFonts>,
}

impl PdfRenderer {
    /// Use a discovered system font, or the built-in faces if none is found
    pub fn new() -> Self {
        match DocumentFonts::discover() {
            Ok(fonts) => Self::with_fonts(fonts),
            Err(err) => {
                warn!(error = %err, "No system font found, PDF output limited to built-in Helvetica");
                Self::with_builtin_font()
            }
        }
    }

    pub fn with_fonts(fonts: DocumentFonts) -> Self {
        Self { fonts: Some(fonts) }
    }

    pub fn with_builtin_font() -> Self {
        Self { fonts: None }
    }

    /// Render and report the number of pages written
    pub(crate) fn render_counted(&self, document: &Document) -> Result<(Vec<u8>, usize)> {
        let (doc, page, layer) = PdfDocument::new(
            document.title.clone(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1".to_string(),
        );

        let faces = match &self.fonts {
            Some(fonts) => Faces {
                regular: doc
                    .add_external_font(Cursor::new(fonts.regular.bytes()))
                    .map_err(|e| anyhow!("Failed to embed regular font: {e:?}"))?,
                bold: doc
                    .add_external_font(Cursor::new(fonts.bold.bytes()))
                    .map_err(|e| anyhow!("Failed to embed bold font: {e:?}"))?,
                metrics: Some(fonts),
            },
            None => Faces {
                regular: doc
                    .add_builtin_font(BuiltinFont::Helvetica)
                    .map_err(|e| anyhow!("Failed to add Helvetica: {e:?}"))?,
                bold: doc
                    .add_builtin_font(BuiltinFont::HelveticaBold)
                    .map_err(|e| anyhow!("Failed to add Helvetica Bold: {e:?}"))?,
                metrics: None,
            },
        };

        let layer = doc.get_page(page).get_layer(layer);
        let mut writer = PageWriter::new(&doc, layer, &faces, &document.footer);
        writer.document(document);
        let pages = writer.pages;

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| anyhow!("Failed to write PDF: {e:?}"))?;
        info!(pages, bytes = bytes.len(), sections = document.sections.len(), "Rendered PDF proposal");
        Ok((bytes, pages))
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        self.render_counted(document).map(|(bytes, _)| bytes)
    }
}

struct Faces<'a> {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    metrics: Option<&'a DocumentFonts>,
}

impl Faces<'_> {
    fn font(&self, style: Style) -> &IndirectFontRef {
        match style.weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }

    /// Width of `text` in millimetres
    fn width(&self, text: &str, style: Style) -> f32 {
        let points = match self.metrics {
            Some(fonts) => {
                let face = match style.weight {
                    Weight::Regular => &fonts.regular,
                    Weight::Bold => &fonts.bold,
                };
                face.text_width(text, style.size)
            }
            None => text.chars().count() as f32 * FALLBACK_ADVANCE_EM * style.size,
        };
        points * PT_TO_MM
    }

    fn bullet(&self) -> &'static str {
        if self.metrics.is_some() { "\u{2022}" } else { "-" }
    }

    /// Text as it will be written; built-in faces only get WinAnsi characters
    fn prepare(&self, text: &str) -> String {
        if self.metrics.is_some() {
            text.to_string()
        } else {
            to_win_ansi(text)
        }
    }
}

/// Reduce text to what the built-in faces can show. They are written with
/// WinAnsiEncoding, so Latin-1 passes through; typographic punctuation is
/// mapped to its plain form and anything else becomes `?`.
fn to_win_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            c if c.is_ascii() => out.push(c),
            '\u{00A0}' => out.push(' '),
            '\u{00A1}'..='\u{00FF}' => out.push(ch),
            '\u{2013}' | '\u{2014}' | '\u{2212}' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2022}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            _ => out.push('?'),
        }
    }
    out
}

/// Tracks the write position and starts new pages as content runs off the
/// bottom. Every page gets the footer line.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    faces: &'a Faces<'a>,
    footer: &'a str,
    /// Baseline of the last written line, measured from the page bottom
    cursor: f32,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference, faces: &'a Faces<'a>, footer: &'a str) -> Self {
        let writer = Self {
            doc,
            layer,
            faces,
            footer,
            cursor: PAGE_HEIGHT_MM - MARGIN_MM,
            pages: 1,
        };
        writer.write_footer();
        writer
    }

    fn document(&mut self, document: &Document) {
        self.header(document);
        self.gap(10.0);
        self.line(&document.title, Style::TITLE, MARGIN_MM);
        self.line(&document.subtitle, Style::SUBTITLE, MARGIN_MM);
        self.gap(8.0);

        let (left, right) = document.metadata.columns();
        self.metadata(&left, &right);

        if let Some(notes) = &document.notes {
            self.gap(8.0);
            self.line(NOTES_HEADING, Style::HEADING, MARGIN_MM);
            self.gap(1.0);
            self.paragraph(notes, Style::BODY, MARGIN_MM, content_width());
        }

        for section in &document.sections {
            self.gap(8.0);
            // keep a heading together with at least its first bullet
            self.ensure_space(Style::HEADING.line_height() + 2.0 * Style::BODY.line_height());
            self.line(&section.title, Style::HEADING, MARGIN_MM);
            if let Some(note) = &section.note {
                self.gap(1.0);
                self.paragraph(note, Style::SMALL, MARGIN_MM, content_width());
            }
            self.gap(1.5);
            for item in &section.items {
                self.bullet(&item.text());
            }
        }
        debug!(pages = self.pages, "PDF layout complete");
    }

    /// Mark and brand name on the left, tagline right-aligned on the same row
    /// when it fits
    fn header(&mut self, document: &Document) {
        let header = &document.header;
        let mark = self.faces.prepare(&header.product_mark);
        let brand = self.faces.prepare(&header.brand_name);
        let tagline = self.faces.prepare(&header.tagline);

        self.advance(Style::MARK.line_height());
        let y = self.cursor;
        self.text_at(&mark, Style::MARK, MARGIN_MM, y);
        let brand_x = MARGIN_MM + self.faces.width(&mark, Style::MARK) + 4.0;
        self.text_at(&brand, Style::BRAND, brand_x, y);

        let brand_end = brand_x + self.faces.width(&brand, Style::BRAND);
        let tagline_width = self.faces.width(&tagline, Style::SMALL);
        let right_edge = PAGE_WIDTH_MM - MARGIN_MM;
        if brand_end + 6.0 + tagline_width <= right_edge {
            self.text_at(&tagline, Style::SMALL, right_edge - tagline_width, y);
        } else {
            self.paragraph(&header.tagline, Style::SMALL, MARGIN_MM, content_width());
        }
    }

    /// Rows of label/value pairs, left and right column side by side
    fn metadata(&mut self, left: &[Field<'_>], right: &[Field<'_>]) {
        let column_width = SECOND_COLUMN_MM - 6.0;
        let right_x = MARGIN_MM + SECOND_COLUMN_MM;

        for row in 0..left.len().max(right.len()) {
            let cell = |field: Option<&Field<'_>>| -> Vec<String> {
                field
                    .map(|(_, value)| self.wrapped(value, Style::BODY, column_width))
                    .unwrap_or_default()
            };
            let left_lines = cell(left.get(row));
            let right_lines = cell(right.get(row));
            let rows = left_lines.len().max(right_lines.len());

            // label stays with the first value line; tall cells continue on the next page
            self.ensure_space(Style::LABEL.line_height() + Style::BODY.line_height());

            self.advance(Style::LABEL.line_height());
            let y = self.cursor;
            if let Some((label, _)) = left.get(row) {
                self.text_at(label, Style::LABEL, MARGIN_MM, y);
            }
            if let Some((label, _)) = right.get(row) {
                self.text_at(label, Style::LABEL, right_x, y);
            }

            for i in 0..rows {
                self.ensure_space(Style::BODY.line_height());
                self.advance(Style::BODY.line_height());
                let y = self.cursor;
                if let Some(text) = left_lines.get(i) {
                    self.text_at(text, Style::BODY, MARGIN_MM, y);
                }
                if let Some(text) = right_lines.get(i) {
                    self.text_at(text, Style::BODY, right_x, y);
                }
            }
            self.gap(2.0);
        }
    }

    fn bullet(&mut self, text: &str) {
        let x = MARGIN_MM + BULLET_INDENT_MM;
        let lines = self.wrapped(text, Style::BODY, content_width() - BULLET_INDENT_MM);
        for (idx, line) in lines.iter().enumerate() {
            self.ensure_space(Style::BODY.line_height());
            self.advance(Style::BODY.line_height());
            let y = self.cursor;
            if idx == 0 {
                self.text_at(self.faces.bullet(), Style::BODY, MARGIN_MM + 1.0, y);
            }
            self.text_at(line, Style::BODY, x, y);
        }
    }

    fn paragraph(&mut self, text: &str, style: Style, x: f32, width: f32) {
        for line in self.wrapped(text, style, width) {
            self.line(&line, style, x);
        }
    }

    fn line(&mut self, text: &str, style: Style, x: f32) {
        let text = self.faces.prepare(text);
        self.ensure_space(style.line_height());
        self.advance(style.line_height());
        let y = self.cursor;
        self.text_at(&text, style, x, y);
    }

    fn wrapped(&self, text: &str, style: Style, width: f32) -> Vec<String> {
        let text = self.faces.prepare(text);
        wrap(&text, width, |s| self.faces.width(s, style))
    }

    fn text_at(&self, text: &str, style: Style, x: f32, y: f32) {
        self.layer.use_text(text, style.size, Mm(x), Mm(y), self.faces.font(style));
    }

    fn gap(&mut self, mm: f32) {
        self.cursor -= mm;
    }

    fn advance(&mut self, mm: f32) {
        self.cursor -= mm;
    }

    /// Start a new page unless `height` more millimetres fit above the footer
    fn ensure_space(&mut self, height: f32) {
        if self.cursor - height >= MARGIN_MM + FOOTER_BAND_MM {
            return;
        }
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), format!("Layer {}", self.pages + 1));
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages += 1;
        self.cursor = PAGE_HEIGHT_MM - MARGIN_MM;
        self.write_footer();
    }

    fn write_footer(&self) {
        let footer = self.faces.prepare(self.footer);
        self.text_at(&footer, Style::SMALL, MARGIN_MM, MARGIN_MM * 0.6);
    }
}

fn content_width() -> f32 {
    PAGE_WIDTH_MM - 2.0 * MARGIN_MM
}
