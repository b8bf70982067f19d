//! Live plain-text preview of the proposal

use eframe::egui;

use crate::gui::constants::*;

pub fn ui(ui: &mut egui::Ui, text: &str) {
    egui::CollapsingHeader::new(egui::RichText::new("Preview").strong())
        .id_salt("proposal_preview")
        .default_open(true)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("proposal_preview_scroll")
                .max_height(PREVIEW_HEIGHT)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(text).monospace());
                });
        });
}
