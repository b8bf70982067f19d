//! Application shell implemented with egui/eframe

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::Local;
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{debug, error, info, warn};

use super::components::{client_form, configurator, page_view, preview, sidebar};
use super::constants::*;
use crate::client::ClientInfo;
use crate::config::AppConfig;
use crate::content;
use crate::document::{self, compose, render_proposal, PdfRenderer, TextRenderer};
use crate::nav::{CopyFeedback, NavState, TocState, CONFIGURATOR_ROUTE, HOME_ROUTE};
use crate::selection::SelectionStore;
use crate::view_model::DerivedView;

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

struct ConfiguratorApp {
    config: AppConfig,
    store: SelectionStore,
    client: ClientInfo,
    notes: String,
    view: DerivedView,
    preview: String,
    nav: NavState,
    toc: TocState,
    copy: CopyFeedback,
    pdf: PdfRenderer,
    status_message: Option<StatusMessage>,
}

impl ConfiguratorApp {
    fn new(_cc: &CreationContext<'_>, config: AppConfig) -> Self {
        info!("Initializing egui shell");

        let store = SelectionStore::default();
        let client = ClientInfo::default();
        let view = DerivedView::new(&store, &client);

        let mut app = Self {
            config,
            store,
            client,
            notes: String::new(),
            view,
            preview: String::new(),
            nav: NavState::default(),
            toc: TocState::default(),
            copy: CopyFeedback::default(),
            pdf: PdfRenderer::new(),
            status_message: None,
        };
        app.rebuild_preview();
        app
    }

    fn navigate(&mut self, route: &str) {
        self.nav.navigate(route);
        self.copy = CopyFeedback::default();
    }

    fn apply(&mut self, action: configurator::ConfiguratorAction) {
        if action.apply(&mut self.store) {
            self.selection_changed();
        }
    }

    fn selection_changed(&mut self) {
        if self.view.refresh(&self.store, &self.client) {
            debug!(
                revision = self.store.revision(),
                any = self.view.has_any_selection,
                file_name = %self.view.file_name,
                "Derived view refreshed"
            );
        }
        self.rebuild_preview();
    }

    fn rebuild_preview(&mut self) {
        let document = compose(
            &self.client,
            self.store.categories(),
            &self.notes,
            Local::now().date_naive(),
            &self.config.branding,
        );
        match TextRenderer::default().render_string(&document) {
            Ok(text) => self.preview = text,
            Err(err) => warn!(error = ?err, "Failed to rebuild preview"),
        }
    }

    fn output_path(&self) -> PathBuf {
        self.config.output.directory().join(&self.view.file_name)
    }

    fn download(&mut self) {
        if !self.view.has_any_selection {
            return;
        }
        let path = self.output_path();
        info!(path = %path.display(), "Download requested from UI");

        // render from a snapshot so the written file matches what was shown
        let snapshot = self.store.snapshot();
        let result = render_proposal(
            &self.pdf,
            &self.client,
            &snapshot,
            &self.notes,
            &self.config.branding,
        )
        .and_then(|bytes| document::save(&path, &bytes));

        self.status_message = Some(match result {
            Ok(()) => StatusMessage {
                text: format!("Saved {}", path.display()),
                color: STATUS_OK,
            },
            Err(err) => {
                error!(error = ?err, path = %path.display(), "Failed to generate PDF");
                StatusMessage {
                    text: format!("Download failed: {err:#}"),
                    color: STATUS_ERROR,
                }
            }
        });
    }

    fn header_ui(&self, ui: &mut egui::Ui) {
        let branding = &self.config.branding;
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(" {} ", branding.product_mark))
                    .size(20.0)
                    .strong()
                    .color(BADGE_TEXT)
                    .background_color(ACCENT),
            );
            ui.label(egui::RichText::new(&branding.brand_name).size(18.0).strong());
            ui.separator();
            ui.label(egui::RichText::new(&branding.tagline).weak());
        });
    }

    fn configurator_ui(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("configurator")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading(egui::RichText::new("Solution configurator").size(26.0));
                ui.label(egui::RichText::new("Pick the features to include in the client's overview.").weak());
                ui.add_space(SECTION_SPACING);

                if client_form::ui(ui, &mut self.client, &mut self.notes, &self.config.branding.brand_name) {
                    self.selection_changed();
                }
                ui.add_space(SECTION_SPACING);

                ui.horizontal(|ui| {
                    let download = ui
                        .add_enabled(self.view.has_any_selection, egui::Button::new("\u{2B07} Download PDF"))
                        .on_hover_text(format!("Save as {}", self.output_path().display()))
                        .on_disabled_hover_text("Select at least one feature first");
                    if download.clicked() {
                        self.download();
                    }
                    ui.label(egui::RichText::new(&self.view.file_name).monospace().weak());
                });
                if let Some(message) = &self.status_message {
                    ui.colored_label(message.color, &message.text);
                }
                ui.add_space(SECTION_SPACING);

                let action = configurator::toolbar_ui(ui);
                self.apply(action);
                ui.add_space(ITEM_SPACING);

                let action = configurator::ui(ui, self.store.categories(), &self.view.summaries);
                self.apply(action);

                ui.add_space(SECTION_SPACING);
                preview::ui(ui, &self.preview);
            });
    }
}

impl eframe::App for ConfiguratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let route = self.nav.active_route().to_string();
        self.toc.sync_route(&route);
        let page = content::page(&route);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(PADDING / 2.0);
            self.header_ui(ui);
            ui.add_space(PADDING / 2.0);
        });

        let mut clicked = None;
        egui::SidePanel::left("navigation")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(PADDING);
                clicked = sidebar::ui(ui, &mut self.nav);
            });

        if let Some(page) = page {
            egui::SidePanel::right("table_of_contents")
                .resizable(false)
                .exact_width(TOC_WIDTH)
                .show(ctx, |ui| {
                    ui.add_space(PADDING);
                    page_view::toc_ui(ui, page, &mut self.toc);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| match page {
            Some(page) => page_view::ui(ui, page, &mut self.toc, &mut self.copy),
            None if route == CONFIGURATOR_ROUTE => self.configurator_ui(ui),
            None => {
                ui.heading("Page not found");
                if ui.button("Back to introduction").clicked() {
                    clicked = Some(HOME_ROUTE);
                }
            }
        });

        if let Some(target) = clicked {
            self.navigate(target);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shell exiting");
    }
}

pub fn run_gui(config: AppConfig) -> Result<()> {
    let title = format!("{} \u{00B7} Solution Overview", config.branding.brand_name);
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(ConfiguratorApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("Failed to launch egui shell: {err}"))
}
