//! Headless subcommands: catalog listing, rendering from a request file,
//! file-name preview

use anyhow::{bail, Context, Result};
use clap::{Subcommand, ValueEnum};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::client::ClientInfo;
use crate::config::AppConfig;
use crate::document::{self, DocumentRenderer, JsonRenderer, PdfRenderer, TextRenderer};
use crate::selection::SelectionStore;
use crate::view_model::{category_summary, has_any_selection, output_file_name};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the desktop app (default)
    Gui,
    /// List the feature catalog with its default selection
    Catalog {
        #[arg(long)]
        json: bool,
    },
    /// Render a proposal described by a JSON request file
    Render {
        #[arg(long)]
        request: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Pdf)]
        format: OutputFormat,
        /// Output path; PDF defaults to the configured output directory,
        /// text and JSON default to stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the file name a proposal would be saved under
    FileName {
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long, default_value = "")]
        contact: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pdf,
    Text,
    Json,
}

/// Input of `render`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderRequest {
    pub client: ClientInfo,
    pub notes: String,
    /// Category id to selected item ids. When present, replaces the defaults.
    pub selection: Option<BTreeMap<String, Vec<String>>>,
}

impl RenderRequest {
    pub fn parse(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Failed to parse render request JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read render request from {:?}", path))?;
        Self::parse(&contents).with_context(|| format!("Invalid render request {:?}", path))
    }

    /// Replace the store's selection with the requested one; unknown ids are skipped
    pub fn apply(&self, store: &mut SelectionStore) {
        let Some(selection) = &self.selection else {
            return;
        };
        store.set_all(false);

        for (category_id, item_ids) in selection {
            let catalog = store.catalog();
            if catalog.category(category_id).is_none() {
                warn!(category = %category_id, "Unknown category in render request");
                continue;
            }
            let (known, unknown): (Vec<&String>, Vec<&String>) =
                item_ids.iter().partition(|id| catalog.item(category_id, id).is_some());
            for item_id in unknown {
                warn!(category = %category_id, item = %item_id, "Unknown item in render request");
            }
            for item_id in known {
                store.set_item_selection(category_id, item_id, true);
            }
            if let Some(summary) = category_summary(store.categories(), category_id) {
                debug!(category = %category_id, selected = summary.selected_count, total = summary.total, "Applied request selection");
            }
        }
    }
}

pub fn run(command: Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Gui => crate::gui::run_gui(config.clone()),
        Command::Catalog { json } => print_catalog(json),
        Command::Render { request, format, out } => render(&request, format, out, config),
        Command::FileName { company, contact } => {
            let client = ClientInfo {
                company_name: company,
                contact_name: contact,
                ..Default::default()
            };
            println!("{}", output_file_name(&client));
            Ok(())
        }
    }
}

fn print_catalog(json: bool) -> Result<()> {
    let catalog = Catalog::seed();
    let mut stdout = std::io::stdout().lock();

    if json {
        serde_json::to_writer_pretty(&mut stdout, catalog.categories())
            .context("Failed to serialize catalog")?;
        writeln!(stdout)?;
        return Ok(());
    }

    for category in catalog.categories() {
        writeln!(stdout, "{} ({})", category.title(), category.id())?;
        for item in category.items() {
            let mark = if item.selected() { "x" } else { " " };
            writeln!(stdout, "  [{mark}] {} ({})", item.label(), item.id())?;
        }
    }
    Ok(())
}

fn render(request_path: &Path, format: OutputFormat, out: Option<PathBuf>, config: &AppConfig) -> Result<()> {
    let request = RenderRequest::load(request_path)?;
    let mut store = SelectionStore::default();
    request.apply(&mut store);
    if !has_any_selection(store.categories()) {
        bail!("Nothing selected in render request {:?}", request_path);
    }

    let renderer: Box<dyn DocumentRenderer> = match format {
        OutputFormat::Pdf => Box::new(PdfRenderer::new()),
        OutputFormat::Text => Box::new(TextRenderer::default()),
        OutputFormat::Json => Box::new(JsonRenderer),
    };
    let bytes = document::render_proposal(
        renderer.as_ref(),
        &request.client,
        store.categories(),
        &request.notes,
        &config.branding,
    )?;

    let out = match (out, format) {
        (Some(path), _) => Some(path),
        (None, OutputFormat::Pdf) => Some(config.output.directory().join(output_file_name(&request.client))),
        (None, _) => None,
    };

    match out {
        Some(path) => {
            document::save(&path, &bytes)?;
            info!(path = %path.display(), output = ?format, "Rendered proposal");
            println!("{}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).context("Failed to write to stdout")?;
            if !bytes.ends_with(b"\n") {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_ids(store: &SelectionStore) -> Vec<(String, String)> {
        store
            .categories()
            .iter()
            .flat_map(|c| c.selected_items().map(move |i| (c.id().to_string(), i.id().to_string())))
            .collect()
    }

    #[test]
    fn test_request_without_selection_keeps_defaults() {
        let request = RenderRequest::parse(r#"{ "client": { "companyName": "ACME Corp" } }"#).unwrap();
        assert_eq!(request.client.company_name, "ACME Corp");

        let mut store = SelectionStore::default();
        request.apply(&mut store);
        assert_eq!(store.categories(), SelectionStore::default().categories());
    }

    #[test]
    fn test_request_selection_replaces_defaults() {
        let request = RenderRequest::parse(
            r#"{
                "notes": "Pilot first",
                "selection": { "scheduling": ["shift-planner"] }
            }"#,
        )
        .unwrap();

        let mut store = SelectionStore::default();
        request.apply(&mut store);
        assert_eq!(
            selected_ids(&store),
            vec![("scheduling".to_string(), "shift-planner".to_string())]
        );
        assert_eq!(request.notes, "Pilot first");
    }

    #[test]
    fn test_request_unknown_ids_are_skipped() {
        let request = RenderRequest::parse(
            r#"{ "selection": { "nope": ["x"], "scheduling": ["missing", "shift-planner"] } }"#,
        )
        .unwrap();

        let mut store = SelectionStore::default();
        request.apply(&mut store);
        assert_eq!(selected_ids(&store).len(), 1);
    }

    #[test]
    fn test_empty_selection_clears_everything() {
        let request = RenderRequest::parse(r#"{ "selection": {} }"#).unwrap();
        let mut store = SelectionStore::default();
        request.apply(&mut store);
        assert!(!has_any_selection(store.categories()));
    }

    #[test]
    fn test_render_refuses_empty_selection() {
        let dir = tempfile::tempdir().unwrap();
        let request_path = dir.path().join("empty.json");
        fs::write(&request_path, r#"{ "client": { "companyName": "ACME Corp" }, "selection": {} }"#).unwrap();

        let mut config = AppConfig::default();
        config.output.directory = Some(dir.path().to_path_buf());
        let err = render(&request_path, OutputFormat::Pdf, None, &config).unwrap_err();

        assert!(format!("{err:#}").contains("empty.json"));
        assert!(!dir.path().join("acme-corp-overview.pdf").exists());
    }

    #[test]
    fn test_render_text_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let request_path = dir.path().join("request.json");
        fs::write(
            &request_path,
            r#"{ "client": { "companyName": "ACME Corp" }, "selection": { "scheduling": ["shift-planner"] } }"#,
        )
        .unwrap();
        let out = dir.path().join("out").join("proposal.txt");

        render(&request_path, OutputFormat::Text, Some(out.clone()), &AppConfig::default()).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.contains("ACME Corp"));
        assert!(text.contains("Scheduling"));
    }

    #[test]
    fn test_render_pdf_defaults_to_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let request_path = dir.path().join("request.json");
        fs::write(&request_path, r#"{ "client": { "companyName": "ACME Corp" } }"#).unwrap();

        let mut config = AppConfig::default();
        config.output.directory = Some(dir.path().to_path_buf());
        render(&request_path, OutputFormat::Pdf, None, &config).unwrap();

        let bytes = fs::read(dir.path().join("acme-corp-overview.pdf")).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_invalid_request_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{").unwrap();
        let err = RenderRequest::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }
}
