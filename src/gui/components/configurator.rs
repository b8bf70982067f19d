//! Feature checklist grouped by category
//!
//! The component only reads the selection; user intent comes back as a
//! [`ConfiguratorAction`] that the manager applies to the store.

use eframe::egui;

use crate::catalog::FeatureCategory;
use crate::gui::constants::*;
use crate::selection::SelectionStore;
use crate::view_model::{CategorySummary, SelectionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfiguratorAction {
    None,
    Toggle { category_id: String, item_id: String },
    SetCategory { category_id: String, value: bool },
    SetAll(bool),
    Reset,
}

impl ConfiguratorAction {
    /// Apply to the store; returns whether the selection changed
    pub fn apply(self, store: &mut SelectionStore) -> bool {
        match self {
            ConfiguratorAction::None => false,
            ConfiguratorAction::Toggle { category_id, item_id } => store.toggle_item(&category_id, &item_id),
            ConfiguratorAction::SetCategory { category_id, value } => {
                store.set_category_selection(&category_id, value)
            }
            ConfiguratorAction::SetAll(value) => store.set_all(value),
            ConfiguratorAction::Reset => store.reset(),
        }
    }
}

/// Global buttons above the category list
pub fn toolbar_ui(ui: &mut egui::Ui) -> ConfiguratorAction {
    let mut action = ConfiguratorAction::None;
    ui.horizontal(|ui| {
        if ui.button("Select everything").clicked() {
            action = ConfiguratorAction::SetAll(true);
        }
        if ui.button("Clear everything").clicked() {
            action = ConfiguratorAction::SetAll(false);
        }
        if ui.button("\u{21BA} Reset to defaults").clicked() {
            action = ConfiguratorAction::Reset;
        }
    });
    action
}

/// One group per category. `summaries` is index-aligned with `categories`.
pub fn ui(ui: &mut egui::Ui, categories: &[FeatureCategory], summaries: &[CategorySummary]) -> ConfiguratorAction {
    let mut action = ConfiguratorAction::None;

    for (category, summary) in categories.iter().zip(summaries) {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(category.title()).heading().strong());
                badge(ui, summary);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add_enabled(summary.any_selected, egui::Button::new("Clear")).clicked() {
                        action = ConfiguratorAction::SetCategory {
                            category_id: category.id().to_string(),
                            value: false,
                        };
                    }
                    if ui
                        .add_enabled(!summary.all_selected && summary.total > 0, egui::Button::new("Select all"))
                        .clicked()
                    {
                        action = ConfiguratorAction::SetCategory {
                            category_id: category.id().to_string(),
                            value: true,
                        };
                    }
                });
            });

            if let Some(note) = category.note() {
                ui.label(egui::RichText::new(note).italics().weak());
            }
            ui.add_space(ITEM_SPACING);

            for item in category.items() {
                let mut checked = item.selected();
                if ui.checkbox(&mut checked, item.label()).changed() {
                    action = ConfiguratorAction::Toggle {
                        category_id: category.id().to_string(),
                        item_id: item.id().to_string(),
                    };
                }
                if let Some(description) = item.description() {
                    ui.indent(item.id(), |ui| {
                        ui.label(egui::RichText::new(description).small().weak());
                    });
                }
            }
        });
        ui.add_space(ITEM_SPACING);
    }

    action
}

fn badge(ui: &mut egui::Ui, summary: &CategorySummary) {
    let fill = match summary.state() {
        SelectionState::All => STATUS_OK,
        SelectionState::Partial => ACCENT,
        SelectionState::None => egui::Color32::GRAY,
    };
    ui.label(
        egui::RichText::new(format!(" {} selected ", summary.selected_count))
            .small()
            .color(BADGE_TEXT)
            .background_color(fill),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_leaves_store_untouched() {
        let mut store = SelectionStore::default();
        assert!(!ConfiguratorAction::None.apply(&mut store));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_toggle_action() {
        let mut store = SelectionStore::default();
        let before = store.categories()[0].items()[0].selected();
        let action = ConfiguratorAction::Toggle {
            category_id: store.categories()[0].id().to_string(),
            item_id: store.categories()[0].items()[0].id().to_string(),
        };

        assert!(action.apply(&mut store));
        assert_eq!(store.categories()[0].items()[0].selected(), !before);
    }

    #[test]
    fn test_category_and_global_actions() {
        let mut store = SelectionStore::default();
        let id = store.categories()[1].id().to_string();

        ConfiguratorAction::SetCategory { category_id: id, value: true }.apply(&mut store);
        assert!(CategorySummary::of(&store.categories()[1]).all_selected);

        assert!(ConfiguratorAction::SetAll(false).apply(&mut store));
        assert!(store.categories().iter().all(|c| !CategorySummary::of(c).any_selected));
        assert!(!ConfiguratorAction::SetAll(false).apply(&mut store));

        assert!(ConfiguratorAction::Reset.apply(&mut store));
        assert_eq!(store.categories(), SelectionStore::default().categories());
    }
}
