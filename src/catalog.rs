//! Feature catalog: categories of selectable feature items
//!
//! The catalog shape (categories, items, order) is fixed once built from the
//! seed below. Only the `selected` flag of an item changes afterwards, and only
//! through [`crate::selection::SelectionStore`].

use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashSet;

/// A single selectable feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureItem {
    id: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    pub(crate) selected: bool,
}

impl FeatureItem {
    pub fn new(id: &str, label: &str, description: Option<&str>, selected: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.map(str::to_string),
            selected,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Description, if one is present and not blank
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    pub fn selected(&self) -> bool {
        self.selected
    }
}

/// A named group of feature items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCategory {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    pub(crate) items: Vec<FeatureItem>,
}

impl FeatureCategory {
    pub fn new(id: &str, title: &str, note: Option<&str>, items: Vec<FeatureItem>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            note: note.map(str::to_string),
            items,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Category note, if one is present and not blank
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    pub fn items(&self) -> &[FeatureItem] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Option<&FeatureItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Selected items in catalog order
    pub fn selected_items(&self) -> impl Iterator<Item = &FeatureItem> {
        self.items.iter().filter(|item| item.selected)
    }
}

/// Ordered list of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<FeatureCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<FeatureCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[FeatureCategory] {
        &self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&FeatureCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn item(&self, category_id: &str, item_id: &str) -> Option<&FeatureItem> {
        self.category(category_id).and_then(|c| c.item(item_id))
    }

    /// Check id uniqueness and that ids and labels are non-empty
    pub fn validate(&self) -> Result<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() || category.title.trim().is_empty() {
                bail!("category with empty id or title: {:?}", category.id);
            }
            if !category_ids.insert(category.id.as_str()) {
                bail!("duplicate category id '{}'", category.id);
            }

            let mut item_ids = HashSet::new();
            for item in &category.items {
                if item.id.trim().is_empty() || item.label.trim().is_empty() {
                    bail!("item with empty id or label in category '{}'", category.id);
                }
                if !item_ids.insert(item.id.as_str()) {
                    bail!("duplicate item id '{}' in category '{}'", item.id, category.id);
                }
            }
        }
        Ok(())
    }

    /// Built-in workforce-management catalog.
    ///
    /// Default selections are arbitrary seed values, not a policy.
    pub fn seed() -> Self {
        let item = FeatureItem::new;
        Self::new(vec![
            FeatureCategory::new(
                "scheduling",
                "Scheduling",
                Some("Rota planning for single sites and multi-location operations."),
                vec![
                    item("shift-planner", "Shift planner", Some("drag-and-drop weekly and monthly rotas"), true),
                    item("shift-templates", "Shift templates", Some("reusable patterns for recurring schedules"), true),
                    item("open-shifts", "Open shifts", Some("publish unfilled shifts for employees to claim"), true),
                    item("shift-swaps", "Shift swaps", Some("employee-initiated swaps with manager approval"), false),
                    item("auto-scheduling", "Auto-scheduling", Some("demand-based schedule generation"), false),
                ],
            ),
            FeatureCategory::new(
                "time-attendance",
                "Time & Attendance",
                None,
                vec![
                    item("mobile-clock-in", "Mobile clock-in", Some("geofenced clock-in from the mobile app"), true),
                    item("timesheets", "Timesheets", Some("automatic timesheets from clock events"), true),
                    item("break-tracking", "Break tracking", None, true),
                    item("overtime-alerts", "Overtime alerts", Some("warnings before shifts push staff into overtime"), false),
                    item("kiosk-terminals", "Kiosk terminals", Some("shared tablet or badge terminals on site"), false),
                ],
            ),
            FeatureCategory::new(
                "leave",
                "Leave & Absence",
                Some("Leave policies are configured per country and contract type."),
                vec![
                    item("leave-requests", "Leave requests", Some("request and approve time off in the app"), true),
                    item("accruals", "Leave accruals", Some("automatic balance accrual per policy"), false),
                    item("holiday-calendars", "Public holiday calendars", None, false),
                    item("absence-analytics", "Absence analytics", Some("sickness and absence trends"), false),
                ],
            ),
            FeatureCategory::new(
                "payroll",
                "Payroll",
                None,
                vec![
                    item("payroll-export", "Payroll export", Some("approved hours exported to the payroll provider"), true),
                    item("pay-rules", "Pay rules engine", Some("premiums, night rates and holiday pay"), false),
                    item("multi-currency", "Multi-currency costing", None, false),
                ],
            ),
            FeatureCategory::new(
                "communication",
                "Team Communication",
                None,
                vec![
                    item("announcements", "Announcements", Some("company and location-wide news feed"), true),
                    item("shift-reminders", "Shift reminders", Some("push and SMS reminders before each shift"), true),
                    item("team-chat", "Team chat", None, false),
                ],
            ),
            FeatureCategory::new(
                "analytics",
                "Reporting & Analytics",
                Some("All reports can be exported as CSV or scheduled by email."),
                vec![
                    item("labour-cost", "Labour cost dashboard", Some("scheduled versus actual labour cost"), true),
                    item("demand-forecast", "Demand forecasting", Some("staffing forecasts from historical sales data"), false),
                    item("custom-reports", "Custom reports", None, false),
                ],
            ),
            FeatureCategory::new(
                "compliance",
                "Compliance & Security",
                None,
                vec![
                    item("labour-law", "Working-time rules", Some("rest periods, maximum hours and minor restrictions"), true),
                    item("audit-trail", "Audit trail", Some("every schedule and timesheet change is recorded"), true),
                    item("sso", "Single sign-on", Some("SAML and OpenID Connect"), false),
                    item("data-residency", "Data residency", Some("EU or US hosting region"), false),
                ],
            ),
            FeatureCategory::new(
                "integrations",
                "Integrations",
                Some("Additional connectors are available on request."),
                vec![
                    item("hris-sync", "HRIS sync", Some("employee records synced from the HR system"), false),
                    item("pos-integration", "POS integration", Some("sales data for forecasting and labour ratios"), false),
                    item("public-api", "Public API & webhooks", None, false),
                ],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_valid() {
        let catalog = Catalog::seed();
        assert!(catalog.validate().is_ok());
        assert!(!catalog.categories().is_empty());
        assert!(catalog.categories().iter().all(|c| !c.items().is_empty()));
    }

    #[test]
    fn test_validate_rejects_duplicate_category() {
        let catalog = Catalog::new(vec![
            FeatureCategory::new("a", "A", None, vec![]),
            FeatureCategory::new("a", "Again", None, vec![]),
        ]);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate category id 'a'"));
    }

    #[test]
    fn test_validate_rejects_duplicate_item_within_category() {
        let catalog = Catalog::new(vec![FeatureCategory::new(
            "a",
            "A",
            None,
            vec![
                FeatureItem::new("x", "X", None, false),
                FeatureItem::new("x", "X again", None, true),
            ],
        )]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_allows_same_item_id_in_different_categories() {
        let catalog = Catalog::new(vec![
            FeatureCategory::new("a", "A", None, vec![FeatureItem::new("x", "X", None, false)]),
            FeatureCategory::new("b", "B", None, vec![FeatureItem::new("x", "X", None, false)]),
        ]);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_blank_optional_fields_read_as_absent() {
        let item = FeatureItem::new("x", "X", Some("   "), false);
        assert_eq!(item.description(), None);

        let category = FeatureCategory::new("a", "A", Some(""), vec![]);
        assert_eq!(category.note(), None);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::seed();
        let item = catalog.item("scheduling", "shift-planner").unwrap();
        assert_eq!(item.label(), "Shift planner");
        assert!(catalog.item("scheduling", "missing").is_none());
        assert!(catalog.item("missing", "shift-planner").is_none());
    }
}
