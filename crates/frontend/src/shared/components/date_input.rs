use leptos::prelude::*;

/// Native date picker bound to a yyyy-mm-dd string.
///
/// The browser renders the value in the user's locale; the callback
/// always receives yyyy-mm-dd.
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let class = if class.is_empty() {
        "date-input".to_string()
    } else {
        class
    };

    view! {
        <input
            type="date"
            class=class
            prop:value=value
            on:input=move |ev| {
                on_change.run(event_target_value(&ev));
            }
        />
    }
}
