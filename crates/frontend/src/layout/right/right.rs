use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;

/// Resizable container for the right info panel. Visibility is driven by
/// `AppGlobalContext::right_open`; the left edge drags to resize.
#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_open = move || ctx.right_open.get();

    // Width in px; the CSS default is 260.
    let width = RwSignal::new(260.0f64);
    let is_resizing = RwSignal::new(false);
    let start_x = RwSignal::new(0.0f64);
    let start_width = RwSignal::new(260.0f64);

    let on_resize_start = move |ev: leptos::ev::MouseEvent| {
        if !is_open() {
            return;
        }
        is_resizing.set(true);
        start_x.set(ev.client_x() as f64);
        start_width.set(width.get_untracked());
        ev.prevent_default();
    };

    // Drag tracking lives on window so the pointer can leave the panel
    // mid-drag without dropping the resize.
    let _ = window_event_listener(leptos::ev::mousemove, move |ev: leptos::ev::MouseEvent| {
        if !is_resizing.get_untracked() {
            return;
        }

        let window_width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1280.0);

        // Leave room for the sidebar and a usable center area.
        let max_available = window_width - 400.0 - 260.0;
        let max_width = max_available.min(window_width * 0.5);

        let dx = start_x.get_untracked() - ev.client_x() as f64;
        let new_width = (start_width.get_untracked() + dx).max(30.0).min(max_width);

        width.set(new_width);
    });

    let _ = window_event_listener(leptos::ev::mouseup, move |_ev: leptos::ev::MouseEvent| {
        if is_resizing.get_untracked() {
            is_resizing.set(false);
        }
    });

    Effect::new(move |_| {
        let resizing = is_resizing.get();

        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            if resizing {
                let _ = body.style().set_property("cursor", "col-resize");
                let _ = body.style().set_property("user-select", "none");
            } else {
                let _ = body.style().set_property("cursor", "");
                let _ = body.style().set_property("user-select", "");
            }
        }
    });

    view! {
        <div
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !is_open()
            class:right-panel--resizing=move || is_resizing.get()
            style:width=move || if is_open() { format!("{}px", width.get()) } else { "0px".to_string() }
        >
            <div class="right-panel__resizer" on:mousedown=on_resize_start></div>
            {children()}
        </div>
    }
}
