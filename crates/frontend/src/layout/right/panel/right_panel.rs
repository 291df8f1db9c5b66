use super::windows_list::WindowsList;
use leptos::prelude::*;

/// Right info panel: currently just the open-windows list.
#[component]
pub fn RightPanel() -> impl IntoView {
    view! {
        <div class="app-panel__content">
            <WindowsList />
        </div>
    }
}
