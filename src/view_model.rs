//! Values derived from the current selection, never stored alongside it

use crate::catalog::FeatureCategory;
use crate::client::ClientInfo;
use crate::constants::file_name::{DEFAULT_BASE, EXTENSION, FORBIDDEN_CHARS, SUFFIX};
use crate::selection::SelectionStore;

/// Category-level selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Partial,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySummary {
    pub all_selected: bool,
    pub any_selected: bool,
    pub selected_count: usize,
    pub total: usize,
}

impl CategorySummary {
    pub fn of(category: &FeatureCategory) -> Self {
        let total = category.items().len();
        let selected_count = category.selected_items().count();
        Self {
            all_selected: total > 0 && selected_count == total,
            any_selected: selected_count > 0,
            selected_count,
            total,
        }
    }

    pub fn state(&self) -> SelectionState {
        if self.all_selected {
            SelectionState::All
        } else if self.any_selected {
            SelectionState::Partial
        } else {
            SelectionState::None
        }
    }
}

/// True iff at least one item in any category is selected
pub fn has_any_selection(categories: &[FeatureCategory]) -> bool {
    categories.iter().any(|c| c.items().iter().any(|i| i.selected()))
}

pub fn category_summary(categories: &[FeatureCategory], category_id: &str) -> Option<CategorySummary> {
    categories
        .iter()
        .find(|c| c.id() == category_id)
        .map(CategorySummary::of)
}

/// `<slug>-overview.pdf` from the company name, else the contact name, else a
/// fixed default. Never empty.
pub fn output_file_name(client: &ClientInfo) -> String {
    let base = [client.company_name.as_str(), client.contact_name.as_str()]
        .into_iter()
        .map(slugify)
        .find(|slug| !slug.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE.to_string());
    format!("{base}{SUFFIX}.{EXTENSION}")
}

/// Trim, lowercase, collapse whitespace runs into `-`, drop characters that
/// cannot appear in a file name
fn slugify(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|ch| !ch.is_control() && !FORBIDDEN_CHARS.contains(ch))
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Cached derived values, recomputed when the store revision or client changes
#[derive(Debug, Clone)]
pub struct DerivedView {
    pub has_any_selection: bool,
    pub summaries: Vec<CategorySummary>,
    pub file_name: String,
    revision: u64,
    client: ClientInfo,
}

impl DerivedView {
    pub fn new(store: &SelectionStore, client: &ClientInfo) -> Self {
        Self {
            has_any_selection: has_any_selection(store.categories()),
            summaries: store.categories().iter().map(CategorySummary::of).collect(),
            file_name: output_file_name(client),
            revision: store.revision(),
            client: client.clone(),
        }
    }

    /// Recompute if anything it depends on changed; returns whether it did
    pub fn refresh(&mut self, store: &SelectionStore, client: &ClientInfo) -> bool {
        if self.revision == store.revision() && &self.client == client {
            return false;
        }
        *self = Self::new(store, client);
        true
    }
}
