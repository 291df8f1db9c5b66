//! Application top bar: panel toggles, open-windows dropdown, theme
//! toggle and the signed-in operator's name.

pub mod windows_dropdown;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::session;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;
use windows_dropdown::WindowsDropdown;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let toggle_right_panel = move |_| {
        ctx.toggle_right();
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    let operator = session::user_display_name().unwrap_or_else(|| "Guest".to_string());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"LGU Financial Console"</span>
            </div>

            <WindowsDropdown />

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || {
                        if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                    }
                >
                    {icon("panel-left")}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=toggle_right_panel
                    title=move || {
                        if is_right_panel_visible() { "Hide side panel" } else { "Show side panel" }
                    }
                >
                    {icon("panel-right")}
                </button>

                <ThemeToggle />

                <div class="top-header__user">
                    {icon("user")}
                    <span>{operator}</span>
                </div>
            </div>
        </div>
    }
}
