//! Navigation menu with collapsible groups

use eframe::egui;

use crate::gui::constants::*;
use crate::nav::{MENU, NavEntry, NavState};

/// Renders the menu tree. Returns the route the user clicked, if any.
pub fn ui(ui: &mut egui::Ui, nav: &mut NavState) -> Option<&'static str> {
    let mut clicked = None;
    entries(ui, MENU, nav, &mut clicked);
    clicked
}

fn entries(
    ui: &mut egui::Ui,
    list: &'static [NavEntry],
    nav: &mut NavState,
    clicked: &mut Option<&'static str>,
) {
    for entry in list {
        match entry {
            NavEntry::Link { label, route } => {
                let active = nav.active_route() == *route;
                let text = if active {
                    egui::RichText::new(*label).color(ACCENT).strong()
                } else {
                    egui::RichText::new(*label)
                };
                if ui.selectable_label(active, text).clicked() {
                    *clicked = Some(*route);
                }
            }
            NavEntry::Group { id, label, children } => {
                let open = nav.is_expanded(id);
                let arrow = if open { "\u{25BC}" } else { "\u{25B6}" };
                if ui
                    .selectable_label(false, egui::RichText::new(format!("{arrow} {label}")).strong())
                    .clicked()
                {
                    nav.toggle_group(*id);
                }
                if open {
                    ui.indent(*id, |ui| entries(ui, children, nav, clicked));
                }
            }
        }
        ui.add_space(ITEM_SPACING / 4.0);
    }
}
