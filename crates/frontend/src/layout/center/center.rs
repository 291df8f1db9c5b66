use leptos::prelude::*;

/// Scrollable host for the open tab pages.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="tabs" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}
