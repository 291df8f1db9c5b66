use contracts::shared::RecordStatus;
use leptos::prelude::*;

/// Colored pill for the Active/Inactive flag on reference records.
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<RecordStatus>) -> impl IntoView {
    view! {
        <span class=move || {
            if status.get().is_active() {
                "status-badge status-badge--active"
            } else {
                "status-badge status-badge--inactive"
            }
        }>
            {move || status.get().as_str()}
        </span>
    }
}
