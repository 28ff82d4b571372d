use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Checkbox component: label wrapping the input, state owned by the caller
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Partially checked group (rendered as the native indeterminate state)
    #[prop(optional, into)]
    indeterminate: MaybeProp<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the checkbox element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Name attribute, defaults to the id
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// CSS class of the custom box span
    #[prop(optional, into)]
    checkbox_class: MaybeProp<String>,
    /// Additional CSS classes for the label wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Rich label content, replaces `label` when given
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let checkbox_name = move || name.get().or_else(|| id.get()).unwrap_or_default();
    let box_class = move || checkbox_class.get().unwrap_or_default();
    let wrapper_class = move || format!("custom-checkbox {}", class.get().unwrap_or_default());

    // indeterminate есть только у DOM-свойства, атрибута нет
    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        let is_indeterminate = indeterminate.get().unwrap_or(false);
        if let Some(input) = input_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <label class=wrapper_class>
            <input
                node_ref=input_ref
                id=checkbox_id
                name=checkbox_name
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class=box_class></span>
            {match children {
                Some(children) => children().into_any(),
                None => (move || label.get().unwrap_or_default()).into_any(),
            }}
        </label>
    }
}
