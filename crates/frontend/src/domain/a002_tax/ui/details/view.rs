use super::model::ConsoleSubmissionSink;
use super::view_model::TaxDetailsViewModel;
use crate::shared::components::ui::{Button, Checkbox, Input, RadioGroup};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::a001_catalog_item::Item;
use contracts::domain::a002_tax::TaxField;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn TaxDetails() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let min_chars = config.search_min_chars;
    let vm = TaxDetailsViewModel::new(config);

    let apply_options = Signal::derive(|| {
        vec![
            ("all".to_string(), "Apply to all items in collection".to_string()),
            ("some".to_string(), "Apply to specific items".to_string()),
        ]
    });

    view! {
        <div class="details-container tax-details">
            <form
                class="tax-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_command(&ConsoleSubmissionSink);
                }
            >
                <div class="details-header">
                    <h3>"Add Tax"</h3>
                    <Button
                        variant="ghost"
                        title="Close"
                        on_click=Callback::new(move |_| vm.reset_command())
                    >
                        {icon("close")}
                    </Button>
                </div>

                {move || vm.error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <div>{e}</div>
                    </MessageBar>
                })}

                {move || vm.last_submission.get().map(|s| view! {
                    <MessageBar intent=MessageBarIntent::Success>
                        <div>
                            {format!("Tax \"{}\" ({}) applied to {} item(s)", s.name, s.rate, s.applicable_items.len())}
                        </div>
                    </MessageBar>
                })}

                <div class="details-form tax-form__fields">
                    <Input
                        name="name"
                        placeholder="tax in letters"
                        class="tax-form__name"
                        value=Signal::derive(move || vm.field_value(TaxField::Name))
                        on_input=Callback::new(move |v: String| vm.set_field(TaxField::Name, v))
                        on_blur=Callback::new(move |_| vm.touch(TaxField::Name))
                        error=Signal::derive(move || vm.field_error(TaxField::Name))
                    />
                    <Input
                        name="rate"
                        placeholder="tax %"
                        suffix="%"
                        value=Signal::derive(move || vm.field_value(TaxField::Rate))
                        on_input=Callback::new(move |v: String| vm.set_field(TaxField::Rate, v))
                        on_blur=Callback::new(move |_| vm.touch(TaxField::Rate))
                        error=Signal::derive(move || vm.field_error(TaxField::Rate))
                    />
                </div>

                <RadioGroup
                    name="applyTo"
                    value=Signal::derive(move || vm.apply_to_value())
                    options=apply_options
                    on_change=Callback::new(move |v: String| vm.set_apply_mode(&v))
                />

                <div class="tax-form__items">
                    <SearchInput
                        value=vm.search
                        on_change=Callback::new(move |q: String| vm.search.set(q))
                        placeholder="Search Items"
                        min_chars=min_chars
                    />
                    <CategoryGroups vm=vm />
                    <UncategorizedGroup vm=vm />
                </div>

                <div class="details-actions">
                    <Button button_type="submit" class="tax-form__submit">
                        {move || vm.submit_label()}
                    </Button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn CategoryGroups(vm: TaxDetailsViewModel) -> impl IntoView {
    view! {
        <For
            each=move || vm.visible_catalog().categories
            key=|group| (group.name.clone(), group.ids().map(str::to_string).collect::<Vec<_>>())
            children=move |group| {
                let name = group.name.clone();
                let name_for_checked = name.clone();
                let name_for_partial = name.clone();
                let name_for_change = name.clone();
                view! {
                    <div class="tax-form__group">
                        <div class="tax-form__group-header">
                            <Checkbox
                                id=name.clone()
                                label=name
                                checkbox_class="custom-checkbox-box2"
                                checked=Signal::derive(move || vm.is_category_selected(&name_for_checked))
                                indeterminate=Signal::derive(move || Some(vm.is_category_partial(&name_for_partial)))
                                on_change=Callback::new(move |checked: bool| vm.toggle_category(name_for_change.clone(), checked))
                            />
                        </div>
                        <ItemRows vm=vm items=group.items />
                    </div>
                }
            }
        />
    }
}

#[component]
fn UncategorizedGroup(vm: TaxDetailsViewModel) -> impl IntoView {
    let items = Memo::new(move |_| vm.visible_catalog().uncategorized);

    view! {
        <Show when=move || !items.get().is_empty()>
            <div class="tax-form__group">
                <div class="tax-form__group-header">
                    <Checkbox
                        id="nonCategorized"
                        label=""
                        class="pr-2 py-2"
                        checkbox_class="custom-checkbox-box2"
                        checked=Signal::derive(move || vm.is_uncategorized_selected())
                        indeterminate=Signal::derive(move || Some(vm.is_uncategorized_partial()))
                        on_change=Callback::new(move |checked: bool| vm.toggle_uncategorized(checked))
                    />
                </div>
                {move || view! { <ItemRows vm=vm items=items.get() /> }}
            </div>
        </Show>
    }
}

#[component]
fn ItemRows(vm: TaxDetailsViewModel, items: Vec<Item>) -> impl IntoView {
    items
        .into_iter()
        .map(|item| {
            let id_for_checked = item.id.clone();
            let id_for_change = item.id.clone();
            let name = item.name;
            view! {
                <div class="tax-form__item">
                    <Checkbox
                        id=item.id
                        checkbox_class="custom-checkbox-box2"
                        checked=Signal::derive(move || vm.is_item_selected(&id_for_checked))
                        on_change=Callback::new(move |checked: bool| vm.toggle_item(id_for_change.clone(), checked))
                    >
                        {move || highlight_matches(&name, &vm.active_query())}
                    </Checkbox>
                </div>
            }
        })
        .collect_view()
}
