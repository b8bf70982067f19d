//! Plain-text rendering, used for the live preview and `--format text`

use anyhow::{Context, Result};
use std::fmt::{self, Write};

use super::layout::{char_width, wrap};
use super::{Document, DocumentRenderer, Field};
use crate::constants::document::NOTES_HEADING;
use crate::constants::text::WIDTH;

const BULLET: &str = "  \u{2022} ";
const BULLET_CONTINUATION: &str = "    ";

#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::with_width(WIDTH)
    }
}

impl TextRenderer {
    pub fn with_width(width: usize) -> Self {
        Self { width: width.max(20) }
    }

    pub fn render_string(&self, document: &Document) -> Result<String> {
        let mut out = String::new();
        self.write_document(&mut out, document)
            .context("Failed to format text document")?;
        Ok(out)
    }

    fn write_document(&self, out: &mut impl Write, document: &Document) -> fmt::Result {
        let width = self.width;

        // Header row
        let left = format!("[{}]  {}", document.header.product_mark, document.header.brand_name);
        let tagline = &document.header.tagline;
        if char_width(&left) + char_width(tagline) + 2.0 <= width as f32 {
            let pad = width - left.chars().count() - tagline.chars().count();
            writeln!(out, "{left}{}{tagline}", " ".repeat(pad))?;
        } else {
            self.paragraph(out, &left, "")?;
            self.paragraph(out, tagline, "")?;
        }
        writeln!(out, "{}", "=".repeat(width))?;
        writeln!(out)?;

        self.paragraph(out, &document.title.to_uppercase(), "")?;
        self.paragraph(out, &document.subtitle, "")?;
        writeln!(out)?;

        let (left, right) = document.metadata.columns();
        self.columns(out, &left, &right)?;

        if let Some(notes) = &document.notes {
            writeln!(out)?;
            self.heading(out, NOTES_HEADING)?;
            self.paragraph(out, notes, "")?;
        }

        for section in &document.sections {
            writeln!(out)?;
            self.heading(out, &section.title)?;
            if let Some(note) = &section.note {
                self.paragraph(out, note, "")?;
            }
            for item in &section.items {
                let lines = wrap(&item.text(), (width - BULLET.chars().count()) as f32, char_width);
                for (idx, line) in lines.iter().enumerate() {
                    let prefix = if idx == 0 { BULLET } else { BULLET_CONTINUATION };
                    writeln!(out, "{prefix}{line}")?;
                }
            }
        }

        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(width))?;
        self.paragraph(out, &document.footer, "")
    }

    /// Title wrapped to the width, underlined as wide as its longest line
    fn heading(&self, out: &mut impl Write, title: &str) -> fmt::Result {
        let lines = wrap(title, self.width as f32, char_width);
        let rule = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{}", "-".repeat(rule))
    }

    fn paragraph(&self, out: &mut impl Write, text: &str, indent: &str) -> fmt::Result {
        let max = (self.width - indent.chars().count()) as f32;
        for line in wrap(text, max, char_width) {
            writeln!(out, "{indent}{line}")?;
        }
        Ok(())
    }

    /// Two columns side by side, each entry as `Label: value`
    fn columns(&self, out: &mut impl Write, left: &[Field<'_>], right: &[Field<'_>]) -> fmt::Result {
        let column = self.width / 2;
        let cell = |field: Option<&Field<'_>>| -> Vec<String> {
            field
                .map(|(label, value)| wrap(&format!("{label}: {value}"), (column - 2) as f32, char_width))
                .unwrap_or_default()
        };

        for row in 0..left.len().max(right.len()) {
            let l = cell(left.get(row));
            let r = cell(right.get(row));
            for i in 0..l.len().max(r.len()) {
                let l_text = l.get(i).map(String::as_str).unwrap_or("");
                let r_text = r.get(i).map(String::as_str).unwrap_or("");
                let pad = column.saturating_sub(l_text.chars().count());
                let line = format!("{l_text}{}{r_text}", " ".repeat(pad));
                writeln!(out, "{}", line.trim_end())?;
            }
        }
        Ok(())
    }
}

impl DocumentRenderer for TextRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        self.render_string(document).map(String::into_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientInfo;
    use crate::config::Branding;
    use crate::document::compose;
    use crate::document::tests::{acme, date};
    use crate::selection::SelectionStore;

    fn render(client: &ClientInfo, store: &SelectionStore, notes: &str) -> String {
        let doc = compose(client, store.categories(), notes, date(), &Branding::default());
        TextRenderer::default().render_string(&doc).unwrap()
    }

    #[test]
    fn test_text_contains_header_metadata_and_footer() {
        let out = render(&acme(), &SelectionStore::default(), "");
        assert!(out.contains("[CL]  Crewline"));
        assert!(out.contains("SOLUTION OVERVIEW"));
        assert!(out.contains("Client: ACME Corp"));
        assert!(out.contains("Contact: Jane Doe"));
        assert!(out.contains("Generated on: March 7, 2026"));
        assert!(out.contains("Target segments: Retail, Hospitality"));
        assert!(out.trim_end().ends_with("\u{00A9} 2026 Crewline. All rights reserved."));
    }

    #[test]
    fn test_text_omits_sections_when_nothing_selected() {
        let mut store = SelectionStore::default();
        store.set_all(false);
        let out = render(&acme(), &store, "");

        assert!(out.contains("Client: ACME Corp"));
        assert!(!out.contains("Scheduling"));
        assert!(!out.contains(BULLET));
        assert!(!out.contains(NOTES_HEADING));
    }

    #[test]
    fn test_text_category_note_printed_once_and_plain_label() {
        let mut store = SelectionStore::default();
        store.set_all(false);
        // Scheduling carries a note; break tracking has no description
        store.set_item_selection("time-attendance", "break-tracking", true);
        store.set_item_selection("scheduling", "shift-planner", true);
        let out = render(&acme(), &store, "");

        assert_eq!(out.matches("Rota planning for single sites").count(), 1);
        assert!(out.lines().any(|l| l == format!("{BULLET}Break tracking")));
        assert!(!out.contains("Break tracking \u{2013}"));
    }

    #[test]
    fn test_text_notes_and_omitted_contact() {
        let client = ClientInfo {
            company_name: "Globex".to_string(),
            ..Default::default()
        };
        let out = render(&client, &SelectionStore::default(), "Roll out to 3 sites first.");

        assert!(out.contains("Notes\n-----\nRoll out to 3 sites first."));
        assert!(!out.contains("Contact:"));
        assert!(!out.contains("Target segments:"));
    }

    #[test]
    fn test_text_lines_respect_width() {
        let mut client = acme();
        client.segments = "Retail ".repeat(30);
        let doc = compose(&client, SelectionStore::default().categories(), &"word ".repeat(100), date(), &Branding::default());
        let out = TextRenderer::with_width(60).render_string(&doc).unwrap();
        assert!(out.lines().all(|l| l.chars().count() <= 60), "{out}");
    }

    #[test]
    fn test_long_brand_and_section_title_wrap() {
        let mut client = acme();
        client.brand_name = "Northwind Regional Hospitality and Facilities Management Group".to_string();
        let mut store = SelectionStore::default();
        store.set_all(true);
        let doc = compose(&client, store.categories(), "", date(), &Branding::default());

        let out = TextRenderer::with_width(30).render_string(&doc).unwrap();
        assert!(out.lines().all(|l| l.chars().count() <= 30), "{out}");
        assert!(out.contains("Northwind"));
    }
}
