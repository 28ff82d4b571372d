//! Состояние формы "Add Tax" и редьюсер действий пользователя
//!
//! Все изменения проходят через [`TaxFormState::dispatch`]; после каждого
//! действия флаги групп пересчитываются из текущего набора выбранных позиций.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::aggregate::ApplyTo;
use super::validation::{validate, FieldErrors};
use crate::domain::a001_catalog_item::PartitionedItems;

/// Editable text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxField {
    Name,
    Rate,
}

impl TaxField {
    pub const ALL: [TaxField; 2] = [TaxField::Name, TaxField::Rate];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaxField::Name => "name",
            TaxField::Rate => "rate",
        }
    }
}

/// Tri-state of a group checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// User intents understood by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxFormAction {
    SetField(TaxField, String),
    BlurField(TaxField),
    SetApplyMode(ApplyTo),
    ToggleSelectAll(bool),
    ToggleUncategorized(bool),
    ToggleCategory(String, bool),
    ToggleItem(String, bool),
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxFormState {
    pub name: String,
    pub rate: String,
    pub apply_to: ApplyTo,
    pub applicable_item_ids: HashSet<String>,
    pub select_all_uncategorized: bool,
    pub select_all_per_category: HashMap<String, bool>,
    pub touched: HashSet<TaxField>,
    /// Set by submit; every error is shown from then on
    pub submit_attempted: bool,
}

/// Pure form of [`TaxFormState::dispatch`].
pub fn reduce(
    catalog: &PartitionedItems,
    mut state: TaxFormState,
    action: TaxFormAction,
) -> TaxFormState {
    state.dispatch(catalog, action);
    state
}

impl TaxFormState {
    pub fn dispatch(&mut self, catalog: &PartitionedItems, action: TaxFormAction) {
        match action {
            TaxFormAction::SetField(TaxField::Name, value) => self.name = value,
            TaxFormAction::SetField(TaxField::Rate, value) => self.rate = value,
            TaxFormAction::BlurField(field) => {
                self.touched.insert(field);
            }
            TaxFormAction::SetApplyMode(ApplyTo::All) => {
                self.apply_to = ApplyTo::All;
                self.select_all(catalog);
            }
            TaxFormAction::SetApplyMode(ApplyTo::Specific) => {
                self.apply_to = ApplyTo::Specific;
                self.applicable_item_ids.clear();
            }
            TaxFormAction::ToggleSelectAll(true) => self.select_all(catalog),
            TaxFormAction::ToggleSelectAll(false) => self.applicable_item_ids.clear(),
            TaxFormAction::ToggleUncategorized(checked) => {
                self.set_members(catalog.uncategorized_ids(), checked);
            }
            TaxFormAction::ToggleCategory(category, checked) => {
                self.set_members(catalog.category_ids(&category), checked);
            }
            TaxFormAction::ToggleItem(id, checked) => {
                if catalog.contains_id(&id) {
                    self.set_members([id], checked);
                }
            }
            TaxFormAction::Reset => *self = TaxFormState::default(),
        }

        self.sync_derived(catalog);
    }

    fn select_all(&mut self, catalog: &PartitionedItems) {
        self.applicable_item_ids = catalog.all_ids().into_iter().collect();
    }

    fn set_members(&mut self, ids: impl IntoIterator<Item = String>, checked: bool) {
        if checked {
            self.applicable_item_ids.extend(ids);
        } else {
            for id in ids {
                self.applicable_item_ids.remove(&id);
            }
        }
    }

    fn sync_derived(&mut self, catalog: &PartitionedItems) {
        let known: HashSet<&str> = catalog.items().map(|item| item.id.as_str()).collect();
        self.applicable_item_ids
            .retain(|id| known.contains(id.as_str()));

        // "all" means the whole catalog; any removal falls back to an explicit subset
        if self.apply_to == ApplyTo::All && self.applicable_item_ids.len() != known.len() {
            self.apply_to = ApplyTo::Specific;
        }

        self.select_all_per_category = catalog
            .categories
            .iter()
            .map(|group| {
                let all = group
                    .ids()
                    .all(|id| self.applicable_item_ids.contains(id));
                (group.name.clone(), all)
            })
            .collect();

        self.select_all_uncategorized = !catalog.uncategorized.is_empty()
            && catalog
                .uncategorized
                .iter()
                .all(|item| self.applicable_item_ids.contains(&item.id));
    }

    // ------------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------------

    pub fn applicable_items_len(&self) -> usize {
        self.applicable_item_ids.len()
    }

    pub fn is_item_selected(&self, id: &str) -> bool {
        self.applicable_item_ids.contains(id)
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.select_all_per_category
            .get(category)
            .copied()
            .unwrap_or(false)
    }

    /// Selected ids in catalog order.
    pub fn selected_ids_in_order(&self, catalog: &PartitionedItems) -> Vec<String> {
        catalog
            .items()
            .filter(|item| self.applicable_item_ids.contains(&item.id))
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn category_state(&self, catalog: &PartitionedItems, category: &str) -> GroupCheckState {
        let ids = catalog.category_ids(category);
        self.group_state(&ids)
    }

    pub fn uncategorized_state(&self, catalog: &PartitionedItems) -> GroupCheckState {
        self.group_state(&catalog.uncategorized_ids())
    }

    fn group_state(&self, ids: &[String]) -> GroupCheckState {
        let selected = ids
            .iter()
            .filter(|id| self.applicable_item_ids.contains(*id))
            .count();
        if selected == 0 {
            GroupCheckState::Unchecked
        } else if selected == ids.len() {
            GroupCheckState::Checked
        } else {
            GroupCheckState::Indeterminate
        }
    }

    /// Текст кнопки отправки; нулевое количество не показывается
    pub fn submit_label(&self) -> String {
        match self.applicable_items_len() {
            0 => "Apply tax to item(s)".to_string(),
            n => format!("Apply tax to {} item(s)", n),
        }
    }

    /// Validation errors of touched fields, or all of them after a submit attempt.
    pub fn visible_errors(&self) -> FieldErrors {
        let errors = validate(self);
        if self.submit_attempted {
            errors
        } else {
            errors.only(&self.touched)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog_item::{partition_items, Item};

    fn catalog() -> PartitionedItems {
        partition_items(&[
            Item::new("b1", "Jasinthe Bracelet").with_category("Bracelets"),
            Item::new("b2", "Inspire Bracelet").with_category("Bracelets"),
            Item::new("e1", "Zero Stud Earrings").with_category("Earrings"),
            Item::new("u1", "Gift Card"),
            Item::new("u2", "Recurring Item"),
        ])
    }

    fn ids(state: &TaxFormState) -> Vec<String> {
        let mut ids: Vec<String> = state.applicable_item_ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    fn run(actions: Vec<TaxFormAction>) -> TaxFormState {
        let catalog = catalog();
        actions
            .into_iter()
            .fold(TaxFormState::default(), |state, action| {
                reduce(&catalog, state, action)
            })
    }

    #[test]
    fn test_set_field() {
        let state = run(vec![
            TaxFormAction::SetField(TaxField::Name, "VAT".into()),
            TaxFormAction::SetField(TaxField::Rate, "abc".into()),
        ]);
        assert_eq!(state.name, "VAT");
        assert_eq!(state.rate, "abc");
    }

    #[test]
    fn test_apply_mode_all_selects_everything() {
        let state = run(vec![TaxFormAction::SetApplyMode(ApplyTo::All)]);
        assert_eq!(state.apply_to, ApplyTo::All);
        assert_eq!(ids(&state), vec!["b1", "b2", "e1", "u1", "u2"]);
        assert!(state.is_category_selected("Bracelets"));
        assert!(state.is_category_selected("Earrings"));
        assert!(state.select_all_uncategorized);
    }

    #[test]
    fn test_apply_mode_some_clears() {
        let state = run(vec![
            TaxFormAction::SetApplyMode(ApplyTo::All),
            TaxFormAction::SetApplyMode(ApplyTo::Specific),
        ]);
        assert_eq!(state.apply_to, ApplyTo::Specific);
        assert!(state.applicable_item_ids.is_empty());
        assert!(!state.is_category_selected("Bracelets"));
        assert!(!state.select_all_uncategorized);
    }

    #[test]
    fn test_toggle_select_all_keeps_radio() {
        let state = run(vec![TaxFormAction::ToggleSelectAll(true)]);
        assert_eq!(state.apply_to, ApplyTo::Specific);
        assert_eq!(state.applicable_items_len(), 5);

        let state = run(vec![
            TaxFormAction::ToggleSelectAll(true),
            TaxFormAction::ToggleSelectAll(false),
        ]);
        assert!(state.applicable_item_ids.is_empty());
    }

    #[test]
    fn test_category_toggle_is_isolated() {
        let state = run(vec![
            TaxFormAction::ToggleItem("e1".into(), true),
            TaxFormAction::ToggleItem("b1".into(), true),
            TaxFormAction::ToggleCategory("Bracelets".into(), true),
        ]);
        assert_eq!(ids(&state), vec!["b1", "b2", "e1"]);
        assert!(state.is_category_selected("Bracelets"));

        let state = reduce(
            &catalog(),
            state,
            TaxFormAction::ToggleCategory("Bracelets".into(), false),
        );
        assert_eq!(ids(&state), vec!["e1"]);
        assert!(!state.is_category_selected("Bracelets"));
        assert!(state.is_category_selected("Earrings"));
    }

    #[test]
    fn test_unknown_category_is_noop() {
        let before = run(vec![TaxFormAction::ToggleItem("u1".into(), true)]);
        let after = reduce(
            &catalog(),
            before.clone(),
            TaxFormAction::ToggleCategory("Rings".into(), true),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_uncategorized_toggle_only_touches_uncategorized() {
        let state = run(vec![
            TaxFormAction::ToggleItem("b1".into(), true),
            TaxFormAction::ToggleUncategorized(true),
        ]);
        assert_eq!(ids(&state), vec!["b1", "u1", "u2"]);
        assert!(state.select_all_uncategorized);

        let state = reduce(&catalog(), state, TaxFormAction::ToggleUncategorized(false));
        assert_eq!(ids(&state), vec!["b1"]);
        assert!(!state.select_all_uncategorized);
    }

    #[test]
    fn test_item_toggle_roundtrip_restores_selection() {
        let before = run(vec![TaxFormAction::ToggleCategory("Earrings".into(), true)]);
        let catalog = catalog();
        let on = reduce(&catalog, before.clone(), TaxFormAction::ToggleItem("u2".into(), true));
        let off = reduce(&catalog, on, TaxFormAction::ToggleItem("u2".into(), false));
        assert_eq!(off.applicable_item_ids, before.applicable_item_ids);
    }

    #[test]
    fn test_item_toggles_recompute_group_flags() {
        let state = run(vec![
            TaxFormAction::ToggleItem("b1".into(), true),
            TaxFormAction::ToggleItem("b2".into(), true),
        ]);
        assert!(state.is_category_selected("Bracelets"));

        let state = reduce(&catalog(), state, TaxFormAction::ToggleItem("b2".into(), false));
        assert!(!state.is_category_selected("Bracelets"));
        assert_eq!(
            state.category_state(&catalog(), "Bracelets"),
            GroupCheckState::Indeterminate
        );
    }

    #[test]
    fn test_unknown_item_is_ignored() {
        let state = run(vec![TaxFormAction::ToggleItem("nope".into(), true)]);
        assert!(state.applicable_item_ids.is_empty());
    }

    #[test]
    fn test_removal_demotes_apply_all() {
        let state = run(vec![
            TaxFormAction::SetApplyMode(ApplyTo::All),
            TaxFormAction::ToggleItem("u1".into(), false),
        ]);
        assert_eq!(state.apply_to, ApplyTo::Specific);
        assert_eq!(state.applicable_items_len(), 4);
        assert!(!state.select_all_uncategorized);
        assert!(state.is_category_selected("Bracelets"));
    }

    #[test]
    fn test_selected_ids_follow_catalog_order() {
        let state = run(vec![
            TaxFormAction::ToggleItem("u2".into(), true),
            TaxFormAction::ToggleItem("b2".into(), true),
            TaxFormAction::ToggleItem("e1".into(), true),
        ]);
        assert_eq!(state.selected_ids_in_order(&catalog()), vec!["b2", "e1", "u2"]);
    }

    #[test]
    fn test_submit_label() {
        let state = TaxFormState::default();
        assert_eq!(state.submit_label(), "Apply tax to item(s)");

        let state = run(vec![TaxFormAction::ToggleCategory("Bracelets".into(), true)]);
        assert_eq!(state.submit_label(), "Apply tax to 2 item(s)");
    }

    #[test]
    fn test_reset() {
        let state = run(vec![
            TaxFormAction::SetField(TaxField::Name, "VAT".into()),
            TaxFormAction::SetApplyMode(ApplyTo::All),
            TaxFormAction::Reset,
        ]);
        assert_eq!(state.name, "");
        assert_eq!(state.apply_to, ApplyTo::Specific);
        assert!(state.applicable_item_ids.is_empty());
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let state = run(vec![]);
        assert!(state.visible_errors().is_empty());

        let state = run(vec![TaxFormAction::BlurField(TaxField::Name)]);
        let errors = state.visible_errors();
        assert_eq!(errors.get(TaxField::Name).map(|e| e.to_string()), Some("Required".into()));
        assert!(errors.get(TaxField::Rate).is_none());
    }

    #[test]
    fn test_reset_clears_submit_attempt() {
        let mut state = run(vec![]);
        state.submit_attempted = true;
        assert_eq!(state.visible_errors().len(), 2);

        let state = reduce(&catalog(), state, TaxFormAction::Reset);
        assert!(!state.submit_attempted);
        assert!(state.visible_errors().is_empty());
    }
}
