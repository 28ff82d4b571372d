/// Поиск по списку позиций: поле ввода с debounce и подсветка совпадений
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 300;

/// Byte ranges of case-insensitive matches of `filter` in `text`.
///
/// Empty when some character changes byte length on lowercasing: offsets
/// in the lowercased text would not map back onto `text`.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return Vec::new();
    }

    let same_width = text
        .chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8());
    if !same_width {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any(),
        );
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Filter highlighting starts at this many characters
    #[prop(default = 1)]
    min_chars: usize,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search Items".to_string()
    } else {
        placeholder
    };

    // Local input state (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Pending timer; dropping a Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let is_filter_active = move || {
        let text = value.get();
        let text = text.trim();
        !text.is_empty() && text.chars().count() >= min_chars
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class=move || if is_filter_active() { "search-box search-box--active" } else { "search-box" }>
            {crate::shared::icons::icon("search")}
            <input
                type="search"
                class="search-box__input"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button
                    type="button"
                    class="search-box__clear"
                    on:click=clear_filter
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Inspire Bracelet", "bra"), vec![(8, 11)]);
        assert_eq!(match_ranges("Anna", "N"), vec![(1, 2), (2, 3)]);
        assert!(match_ranges("Gift Card", "  ").is_empty());
        assert!(match_ranges("Gift Card", "ring").is_empty());
    }

    #[test]
    fn test_match_ranges_stays_on_char_boundaries() {
        // ẞ shrinks and İ grows when lowercased; total length is unchanged
        assert!(match_ranges("ẞİx", "i").is_empty());

        let text = "Серьги Jasinthe";
        let ranges = match_ranges(text, "серь");
        assert_eq!(ranges, vec![(0, 8)]);
        assert_eq!(&text[0..8], "Серь");
    }
}
