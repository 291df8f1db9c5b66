use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

/// Wrapper for one open tab. Content is created once when the tab opens
/// and kept mounted; inactive tabs are hidden with CSS so their filter
/// and scroll state survives switching.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();

    let tab_key_for_active_check = tab_key.clone();
    let is_active = move || {
        tabs_store
            .active
            .get()
            .as_ref()
            .map(|active| active == &tab_key_for_active_check)
            .unwrap_or(false)
    };

    let tab_key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("tab content dropped: {}", tab_key_for_cleanup);
    });

    let content = render_tab_content(&tab_key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
