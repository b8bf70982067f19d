//! Selection state store
//!
//! Holds the mutable selection overlay on top of the static catalog.
//! Categories live behind an `Arc`; every mutation goes through
//! `Arc::make_mut`, so a snapshot handed out earlier keeps the state it was
//! taken with.

use std::sync::Arc;
use tracing::debug;

use crate::catalog::{Catalog, FeatureCategory};

/// Immutable view of the selection at one point in time
pub type Snapshot = Arc<Vec<FeatureCategory>>;

#[derive(Debug, Clone)]
pub struct SelectionStore {
    seed: Catalog,
    categories: Snapshot,
    revision: u64,
}

impl SelectionStore {
    pub fn new(catalog: Catalog) -> Self {
        let categories = Arc::new(catalog.categories().to_vec());
        Self {
            seed: catalog,
            categories,
            revision: 0,
        }
    }

    /// Catalog the store was built from, with its default selection
    pub fn catalog(&self) -> &Catalog {
        &self.seed
    }

    pub fn categories(&self) -> &[FeatureCategory] {
        &self.categories
    }

    /// Cheap copy of the current state; later mutations do not affect it
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.categories)
    }

    /// Incremented on every mutation that changed at least one flag
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Flip one item. Unknown ids are a no-op; returns whether anything changed.
    pub fn toggle_item(&mut self, category_id: &str, item_id: &str) -> bool {
        let Some((c, i)) = self.position(category_id, item_id) else {
            debug!(category = category_id, item = item_id, "toggle ignored: unknown id");
            return false;
        };

        let item = &mut Arc::make_mut(&mut self.categories)[c].items[i];
        item.selected = !item.selected;
        debug!(category = category_id, item = item_id, selected = item.selected, "item toggled");
        self.bump();
        true
    }

    /// Set one item to `value`. Unknown ids are a no-op.
    pub fn set_item_selection(&mut self, category_id: &str, item_id: &str, value: bool) -> bool {
        match self.position(category_id, item_id) {
            Some((c, i)) if self.categories[c].items[i].selected != value => {
                Arc::make_mut(&mut self.categories)[c].items[i].selected = value;
                debug!(category = category_id, item = item_id, selected = value, "item set");
                self.bump();
                true
            }
            Some(_) => false,
            None => {
                debug!(category = category_id, item = item_id, "set ignored: unknown id");
                false
            }
        }
    }

    /// Set every item in one category to `value`. Unknown category is a no-op.
    ///
    /// Repeating the call leaves state and revision unchanged.
    pub fn set_category_selection(&mut self, category_id: &str, value: bool) -> bool {
        let Some(c) = self.categories.iter().position(|cat| cat.id() == category_id) else {
            debug!(category = category_id, "bulk selection ignored: unknown category");
            return false;
        };

        if self.categories[c].items.iter().all(|item| item.selected == value) {
            return false;
        }

        for item in &mut Arc::make_mut(&mut self.categories)[c].items {
            item.selected = value;
        }
        debug!(category = category_id, selected = value, "category selection set");
        self.bump();
        true
    }

    /// Apply `value` to every category
    pub fn set_all(&mut self, value: bool) -> bool {
        let ids: Vec<String> = self.categories.iter().map(|c| c.id().to_string()).collect();
        let mut changed = false;
        for id in ids {
            changed |= self.set_category_selection(&id, value);
        }
        changed
    }

    /// Restore the seed defaults
    pub fn reset(&mut self) -> bool {
        if self.categories.as_slice() == self.seed.categories() {
            return false;
        }
        self.categories = Arc::new(self.seed.categories().to_vec());
        debug!("selection reset to defaults");
        self.bump();
        true
    }

    fn position(&self, category_id: &str, item_id: &str) -> Option<(usize, usize)> {
        let c = self.categories.iter().position(|cat| cat.id() == category_id)?;
        let i = self.categories[c].items.iter().position(|item| item.id() == item_id)?;
        Some((c, i))
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new(Catalog::seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FeatureItem;

    fn selection_flags(store: &SelectionStore) -> Vec<Vec<bool>> {
        store
            .categories()
            .iter()
            .map(|c| c.items().iter().map(|i| i.selected()).collect())
            .collect()
    }

    fn small_store() -> SelectionStore {
        SelectionStore::new(Catalog::new(vec![
            FeatureCategory::new(
                "a",
                "A",
                None,
                vec![
                    FeatureItem::new("x", "X", None, false),
                    FeatureItem::new("y", "Y", None, true),
                ],
            ),
            FeatureCategory::new("b", "B", None, vec![FeatureItem::new("x", "X", None, false)]),
        ]))
    }

    #[test]
    fn test_toggle_flips_exactly_one_item() {
        let mut store = SelectionStore::default();
        let ids: Vec<(String, String)> = store
            .categories()
            .iter()
            .flat_map(|c| c.items().iter().map(move |i| (c.id().to_string(), i.id().to_string())))
            .collect();

        for (category_id, item_id) in ids {
            let before = selection_flags(&store);
            assert!(store.toggle_item(&category_id, &item_id));
            let after = selection_flags(&store);

            let differences: usize = before
                .iter()
                .flatten()
                .zip(after.iter().flatten())
                .filter(|(b, a)| b != a)
                .count();
            assert_eq!(differences, 1, "toggling {category_id}/{item_id}");

            store.toggle_item(&category_id, &item_id);
            assert_eq!(selection_flags(&store), before);
        }
    }

    #[test]
    fn test_toggle_same_item_id_in_other_category_is_independent() {
        let mut store = small_store();
        store.toggle_item("b", "x");
        assert!(!store.categories()[0].items()[0].selected());
        assert!(store.categories()[1].items()[0].selected());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut store = small_store();
        let before = selection_flags(&store);

        assert!(!store.toggle_item("missing", "x"));
        assert!(!store.toggle_item("a", "missing"));
        assert!(!store.set_category_selection("missing", true));
        assert!(!store.set_item_selection("a", "missing", true));

        assert_eq!(selection_flags(&store), before);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_set_category_selection() {
        let mut store = small_store();

        assert!(store.set_category_selection("a", true));
        assert!(store.categories()[0].items().iter().all(|i| i.selected()));
        // Other categories untouched
        assert!(!store.categories()[1].items()[0].selected());

        assert!(store.set_category_selection("a", false));
        assert!(store.categories()[0].items().iter().all(|i| !i.selected()));
    }

    #[test]
    fn test_set_category_selection_is_idempotent() {
        let mut once = small_store();
        once.set_category_selection("a", true);

        let mut twice = small_store();
        twice.set_category_selection("a", true);
        let revision = twice.revision();
        assert!(!twice.set_category_selection("a", true));

        assert_eq!(selection_flags(&once), selection_flags(&twice));
        assert_eq!(twice.revision(), revision);
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_mutation() {
        let mut store = small_store();
        let snapshot = store.snapshot();

        store.toggle_item("a", "x");

        assert!(!snapshot[0].items()[0].selected());
        assert!(store.categories()[0].items()[0].selected());
        assert!(!Arc::ptr_eq(&snapshot, &store.snapshot()));
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut store = small_store();
        store.toggle_item("a", "x");
        assert_eq!(store.revision(), 1);
        store.set_item_selection("a", "x", true);
        assert_eq!(store.revision(), 1);
        store.set_item_selection("a", "x", false);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_set_all_and_reset() {
        let mut store = SelectionStore::default();
        let defaults = selection_flags(&store);

        assert!(store.set_all(false));
        assert!(selection_flags(&store).iter().flatten().all(|s| !s));

        assert!(store.reset());
        assert_eq!(selection_flags(&store), defaults);
        assert!(!store.reset());
    }

    #[test]
    fn test_catalog_shape_is_preserved() {
        let mut store = SelectionStore::default();
        let shape = |s: &SelectionStore| -> Vec<(String, Vec<String>)> {
            s.categories()
                .iter()
                .map(|c| (c.id().to_string(), c.items().iter().map(|i| i.id().to_string()).collect()))
                .collect()
        };
        let before = shape(&store);

        store.set_all(true);
        store.toggle_item("payroll", "pay-rules");
        store.reset();

        assert_eq!(shape(&store), before);
    }
}
