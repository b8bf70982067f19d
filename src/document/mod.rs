//! Proposal document: a render-independent model plus renderers
//!
//! [`compose`] turns the client info, the selection and free-text notes into a
//! [`Document`]. Renderers only lay that model out; they never look at the
//! selection themselves.

pub mod layout;
pub mod pdf;
pub mod text;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::catalog::FeatureCategory;
use crate::client::ClientInfo;
use crate::config::Branding;
use crate::constants::document::{
    DATE_FORMAT, DESCRIPTION_SEPARATOR, SUBTITLE, TITLE, UNNAMED_CLIENT,
};

pub use pdf::PdfRenderer;
pub use text::TextRenderer;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub header: Header,
    pub title: String,
    pub subtitle: String,
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub sections: Vec<Section>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub product_mark: String,
    pub brand_name: String,
    pub tagline: String,
}

/// Two-column client block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub client: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub generated_on: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<String>,
}

/// A labelled metadata value
pub type Field<'a> = (&'static str, &'a str);

impl Metadata {
    /// Left column (client, contact) and right column (date, segments).
    /// Absent optional values are left out rather than printed empty.
    pub fn columns(&self) -> (Vec<Field<'_>>, Vec<Field<'_>>) {
        let mut left = vec![("Client", self.client.as_str())];
        if let Some(contact) = &self.contact {
            left.push(("Contact", contact.as_str()));
        }
        let mut right = vec![("Generated on", self.generated_on.as_str())];
        if let Some(segments) = &self.segments {
            right.push(("Target segments", segments.as_str()));
        }
        (left, right)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub items: Vec<Bullet>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Bullet {
    /// `label` or `label – description`
    pub fn text(&self) -> String {
        match &self.description {
            Some(description) => format!("{}{DESCRIPTION_SEPARATOR}{description}", self.label),
            None => self.label.clone(),
        }
    }
}

/// Build the document for the current selection
pub fn compose(
    client: &ClientInfo,
    categories: &[FeatureCategory],
    notes: &str,
    generated_on: NaiveDate,
    branding: &Branding,
) -> Document {
    let brand_name = client.brand_name_or(&branding.brand_name).to_string();

    let sections = categories
        .iter()
        .filter_map(|category| {
            let items: Vec<Bullet> = category
                .selected_items()
                .map(|item| Bullet {
                    label: item.label().to_string(),
                    description: item.description().map(str::to_string),
                })
                .collect();
            (!items.is_empty()).then(|| Section {
                title: category.title().to_string(),
                note: category.note().map(str::to_string),
                items,
            })
        })
        .collect();

    let notes = notes.trim();

    Document {
        header: Header {
            product_mark: branding.product_mark.clone(),
            brand_name: brand_name.clone(),
            tagline: branding.tagline.clone(),
        },
        title: TITLE.to_string(),
        subtitle: SUBTITLE.to_string(),
        metadata: Metadata {
            client: client.company().unwrap_or(UNNAMED_CLIENT).to_string(),
            contact: client.contact().map(str::to_string),
            generated_on: generated_on.format(DATE_FORMAT).to_string(),
            segments: client.segments().map(str::to_string),
        },
        notes: (!notes.is_empty()).then(|| notes.to_string()),
        sections,
        footer: format!("\u{00A9} {} {brand_name}. All rights reserved.", generated_on.year()),
    }
}

/// Turns a composed document into output bytes
pub trait DocumentRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>>;
}

/// The document model itself, as pretty-printed JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl DocumentRenderer for JsonRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(document).context("Failed to serialize document to JSON")
    }
}

/// Compose with today's date and render in one step
pub fn render_proposal(
    renderer: &dyn DocumentRenderer,
    client: &ClientInfo,
    categories: &[FeatureCategory],
    notes: &str,
    branding: &Branding,
) -> Result<Vec<u8>> {
    let document = compose(client, categories, notes, Local::now().date_naive(), branding);
    renderer.render(&document)
}

/// Write rendered output, creating the parent directory if needed
pub fn save(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write {:?}", path))?;
    info!(path = %path.display(), bytes = bytes.len(), "Saved document");
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::{Catalog, FeatureItem};
    use crate::selection::SelectionStore;

    pub(crate) fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    pub(crate) fn acme() -> ClientInfo {
        ClientInfo {
            company_name: "ACME Corp".to_string(),
            contact_name: "Jane Doe".to_string(),
            segments: "Retail, Hospitality".to_string(),
            brand_name: String::new(),
        }
    }

    fn mixed_catalog() -> Catalog {
        Catalog::new(vec![
            FeatureCategory::new(
                "a",
                "Alpha",
                Some("Alpha note"),
                vec![
                    FeatureItem::new("x", "Plain item", None, true),
                    FeatureItem::new("y", "Described item", Some("with detail"), true),
                    FeatureItem::new("z", "Unselected item", None, false),
                ],
            ),
            FeatureCategory::new("b", "Beta", None, vec![FeatureItem::new("q", "Never", None, false)]),
        ])
    }

    #[test]
    fn test_compose_includes_only_selected() {
        let store = SelectionStore::new(mixed_catalog());
        let doc = compose(&acme(), store.categories(), "", date(), &Branding::default());

        assert_eq!(doc.sections.len(), 1);
        let section = &doc.sections[0];
        assert_eq!(section.title, "Alpha");
        let labels: Vec<&str> = section.items.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Plain item", "Described item"]);
    }

    #[test]
    fn test_compose_note_and_missing_description() {
        let store = SelectionStore::new(mixed_catalog());
        let doc = compose(&acme(), store.categories(), "", date(), &Branding::default());

        let section = &doc.sections[0];
        assert_eq!(section.note.as_deref(), Some("Alpha note"));
        assert_eq!(section.items[0].text(), "Plain item");
        assert_eq!(section.items[1].text(), "Described item \u{2013} with detail");
    }

    #[test]
    fn test_compose_with_everything_cleared_keeps_metadata() {
        let mut store = SelectionStore::default();
        let ids: Vec<String> = store.categories().iter().map(|c| c.id().to_string()).collect();
        for id in &ids {
            store.set_category_selection(id, false);
        }

        let doc = compose(&acme(), store.categories(), "", date(), &Branding::default());
        assert!(doc.sections.is_empty());
        assert_eq!(doc.metadata.client, "ACME Corp");
        assert_eq!(doc.metadata.generated_on, "March 7, 2026");
        assert_eq!(doc.header.brand_name, "Crewline");
    }

    #[test]
    fn test_compose_omits_absent_optional_fields() {
        let store = SelectionStore::default();
        let doc = compose(&ClientInfo::default(), store.categories(), "  \n ", date(), &Branding::default());

        assert_eq!(doc.notes, None);
        assert_eq!(doc.metadata.contact, None);
        assert_eq!(doc.metadata.segments, None);
        assert_eq!(doc.metadata.client, UNNAMED_CLIENT);

        let (left, right) = doc.metadata.columns();
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
    }

    #[test]
    fn test_compose_notes_and_brand_override() {
        let mut client = acme();
        client.brand_name = "Partner Co".to_string();
        let doc = compose(&client, &[], "  Pilot in Q3  ", date(), &Branding::default());

        assert_eq!(doc.notes.as_deref(), Some("Pilot in Q3"));
        assert_eq!(doc.header.brand_name, "Partner Co");
        assert_eq!(doc.footer, "\u{00A9} 2026 Partner Co. All rights reserved.");
        let (left, right) = doc.metadata.columns();
        assert_eq!(left, vec![("Client", "ACME Corp"), ("Contact", "Jane Doe")]);
        assert_eq!(right[1], ("Target segments", "Retail, Hospitality"));
    }

    #[test]
    fn test_json_renderer_skips_absent_fields() {
        let doc = compose(&ClientInfo::default(), &[], "", date(), &Branding::default());
        let bytes = JsonRenderer.render(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert!(value.get("notes").is_none());
        assert!(value["metadata"].get("contact").is_none());
        assert_eq!(value["sections"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proposals").join("acme-corp-overview.pdf");

        save(&path, b"%PDF-1.3").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"%PDF-1.3");
    }
}
