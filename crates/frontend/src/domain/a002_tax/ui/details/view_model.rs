use super::model::{self, SubmissionSink};
use crate::shared::config::AppConfig;
use contracts::domain::a001_catalog_item::PartitionedItems;
use contracts::domain::a002_tax::{
    submit, ApplyTo, GroupCheckState, TaxField, TaxFormAction, TaxFormState, TaxSubmission,
};
use leptos::prelude::*;

/// ViewModel for the "Add Tax" form
#[derive(Clone, Copy)]
pub struct TaxDetailsViewModel {
    pub catalog: StoredValue<PartitionedItems>,
    pub config: StoredValue<AppConfig>,
    pub form: RwSignal<TaxFormState>,
    pub search: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub last_submission: RwSignal<Option<TaxSubmission>>,
}

impl TaxDetailsViewModel {
    /// Create the ViewModel over the built-in catalog
    pub fn new(config: AppConfig) -> Self {
        Self::from_fetch(model::fetch_catalog(), config)
    }

    /// Empty catalog plus an error banner when loading failed
    fn from_fetch(catalog: anyhow::Result<PartitionedItems>, config: AppConfig) -> Self {
        match catalog {
            Ok(catalog) => Self::with_catalog(catalog, config),
            Err(e) => {
                log::error!("{:#}", e);
                let vm = Self::with_catalog(PartitionedItems::default(), config);
                vm.error.set(Some(format!("Failed to load catalog: {:#}", e)));
                vm
            }
        }
    }

    pub fn with_catalog(catalog: PartitionedItems, config: AppConfig) -> Self {
        Self {
            catalog: StoredValue::new(catalog),
            config: StoredValue::new(config),
            form: RwSignal::new(TaxFormState::default()),
            search: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            last_submission: RwSignal::new(None),
        }
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    pub fn dispatch(&self, action: TaxFormAction) {
        log::debug!("Tax form action: {:?}", action);
        let form = self.form;
        self.catalog
            .with_value(|catalog| form.update(|state| state.dispatch(catalog, action)));
    }

    pub fn set_field(&self, field: TaxField, value: String) {
        self.dispatch(TaxFormAction::SetField(field, value));
    }

    pub fn touch(&self, field: TaxField) {
        self.dispatch(TaxFormAction::BlurField(field));
    }

    pub fn set_apply_mode(&self, value: &str) {
        match ApplyTo::from_str_value(value) {
            Some(mode) => self.dispatch(TaxFormAction::SetApplyMode(mode)),
            None => log::warn!("Unknown apply mode: {}", value),
        }
    }

    pub fn toggle_category(&self, category: String, checked: bool) {
        self.dispatch(TaxFormAction::ToggleCategory(category, checked));
    }

    pub fn toggle_uncategorized(&self, checked: bool) {
        self.dispatch(TaxFormAction::ToggleUncategorized(checked));
    }

    pub fn toggle_item(&self, id: String, checked: bool) {
        self.dispatch(TaxFormAction::ToggleItem(id, checked));
    }

    /// Close button: drop everything entered so far
    pub fn reset_command(&self) {
        self.dispatch(TaxFormAction::Reset);
        self.search.set(String::new());
        self.error.set(None);
        self.last_submission.set(None);
    }

    /// Validate and hand the result to the sink
    pub fn submit_command(&self, sink: &dyn SubmissionSink) {
        let mut state = self.form.get_untracked();
        let result = self.catalog.with_value(|catalog| submit(catalog, &mut state));
        self.form.set(state);

        match result {
            Ok(submission) => match sink.emit(&submission) {
                Ok(()) => {
                    log::info!(
                        "Tax '{}' applied to {} item(s)",
                        submission.name,
                        submission.applicable_items.len()
                    );
                    self.error.set(None);
                    self.last_submission.set(Some(submission));
                }
                Err(e) => {
                    log::error!("Submission failed: {:#}", e);
                    self.error.set(Some(format!("Failed to submit: {:#}", e)));
                }
            },
            Err(errors) => {
                log::debug!("Tax form rejected: {}", errors);
                self.last_submission.set(None);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Reactive getters
    // ------------------------------------------------------------------------

    pub fn field_value(&self, field: TaxField) -> String {
        self.form.with(|f| match field {
            TaxField::Name => f.name.clone(),
            TaxField::Rate => f.rate.clone(),
        })
    }

    pub fn field_error(&self, field: TaxField) -> Option<String> {
        self.form
            .with(|f| f.visible_errors().get(field).map(|e| e.to_string()))
    }

    pub fn apply_to_value(&self) -> String {
        self.form.with(|f| f.apply_to.as_str().to_string())
    }

    pub fn is_item_selected(&self, id: &str) -> bool {
        self.form.with(|f| f.is_item_selected(id))
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.form.with(|f| f.is_category_selected(category))
    }

    pub fn is_category_partial(&self, category: &str) -> bool {
        let form = self.form;
        self.catalog.with_value(|catalog| {
            form.with(|f| f.category_state(catalog, category)) == GroupCheckState::Indeterminate
        })
    }

    pub fn is_uncategorized_selected(&self) -> bool {
        self.form.with(|f| f.select_all_uncategorized)
    }

    pub fn is_uncategorized_partial(&self) -> bool {
        let form = self.form;
        self.catalog.with_value(|catalog| {
            form.with(|f| f.uncategorized_state(catalog)) == GroupCheckState::Indeterminate
        })
    }

    pub fn submit_label(&self) -> String {
        self.form.with(|f| f.submit_label())
    }

    /// Search query if it is long enough to filter, otherwise empty
    pub fn active_query(&self) -> String {
        let query = self.search.get();
        if self.config.with_value(|c| c.is_search_active(&query)) {
            query
        } else {
            String::new()
        }
    }

    /// Catalog as rendered: filtered by the active search query
    pub fn visible_catalog(&self) -> PartitionedItems {
        let query = self.active_query();
        self.catalog.with_value(|catalog| {
            if query.is_empty() {
                catalog.clone()
            } else {
                catalog.filter_by_name(&query)
            }
        })
    }
}
