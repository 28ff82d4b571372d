use leptos::prelude::*;

/// Button component with variants ("primary", "ghost")
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute, "button" by default
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Tooltip / accessible label
    #[prop(optional, into)]
    title: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {}", variant_class(), additional_class())
            title=move || title.get()
            aria-label=move || title.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
