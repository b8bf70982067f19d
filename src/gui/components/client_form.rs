//! Client details entered for the proposal

use eframe::egui;

use crate::client::ClientInfo;
use crate::gui::constants::*;

/// Renders the client form and returns true if any field changed
pub fn ui(ui: &mut egui::Ui, client: &mut ClientInfo, notes: &mut String, default_brand: &str) -> bool {
    let mut changed = false;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Client").strong());
        ui.add_space(ITEM_SPACING);

        egui::Grid::new("client_form")
            .num_columns(2)
            .spacing([ITEM_SPACING, ITEM_SPACING])
            .show(ui, |ui| {
                changed |= field(ui, "Company name:", &mut client.company_name, "Acme Corp");
                changed |= field(ui, "Contact name:", &mut client.contact_name, "Jane Doe");
                changed |= field(ui, "Target segments:", &mut client.segments, "Retail, Hospitality");
                changed |= field(ui, "Brand name:", &mut client.brand_name, default_brand);
            });

        ui.add_space(ITEM_SPACING);
        ui.label("Notes:");
        if ui
            .add(
                egui::TextEdit::multiline(notes)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY)
                    .hint_text("Anything the client should read first"),
            )
            .changed()
        {
            changed = true;
        }
    });

    changed
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> bool {
    ui.label(label);
    let changed = ui
        .add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(280.0))
        .changed();
    ui.end_row();
    changed
}
