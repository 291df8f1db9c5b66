use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Collapsible container for the sidebar. Visibility is driven by
/// `AppGlobalContext::left_open`.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_open = move || ctx.left_open.get();

    view! {
        <div data-zone="left" class="app-sidebar" class:app-sidebar--hidden=move || !is_open()>
            {children()}
        </div>
    }
}
