use leptos::prelude::*;

/// Text input with optional suffix and field error
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Blur event handler (marks the field touched)
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Name / ID of the input element
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Text shown after the input, e.g. "%"
    #[prop(optional, into)]
    suffix: MaybeProp<String>,
    /// Validation message shown under the input
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_name = move || name.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let has_error = move || error.get().is_some();

    view! {
        <div class="form__group">
            <div class=move || {
                if has_error() {
                    format!("form__input-box form__input-box--error {}", additional_class())
                } else {
                    format!("form__input-box {}", additional_class())
                }
            }>
                <input
                    id=input_name
                    name=input_name
                    class="form__input"
                    type="text"
                    prop:value=move || value.get()
                    placeholder=input_placeholder
                    on:input=move |ev| {
                        if let Some(handler) = on_input {
                            handler.run(event_target_value(&ev));
                        }
                    }
                    on:blur=move |_| {
                        if let Some(handler) = on_blur {
                            handler.run(());
                        }
                    }
                />
                {move || suffix.get().map(|s| view! { <span class="form__input-suffix">{s}</span> })}
            </div>
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
