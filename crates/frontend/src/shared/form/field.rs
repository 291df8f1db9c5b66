use contracts::shared::validate::FieldErrors;
use leptos::prelude::*;

use super::values::FormValues;
use super::{FieldKind, FieldSpec};

/// Renders one declared field bound to the form's working copy, with its
/// validation message underneath when the last submit flagged it.
#[component]
pub fn FormField(
    spec: FieldSpec,
    values: RwSignal<FormValues>,
    #[prop(into)] errors: Signal<FieldErrors>,
) -> impl IntoView {
    let FieldSpec {
        key,
        label,
        kind,
        required,
    } = spec;

    let field_error = Memo::new(move |_| errors.with(|e| e.get(key).map(str::to_string)));

    let input = match kind {
        FieldKind::Text => view! {
            <input
                type="text"
                prop:value=move || values.with(|v| v.get(key))
                on:input=move |ev| values.update(|v| v.set(key, event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldKind::Date => view! {
            <input
                type="date"
                prop:value=move || values.with(|v| v.get(key))
                on:input=move |ev| values.update(|v| v.set(key, event_target_value(&ev)))
            />
        }
        .into_any(),
        FieldKind::Textarea => view! {
            <textarea
                prop:value=move || values.with(|v| v.get(key))
                on:input=move |ev| values.update(|v| v.set(key, event_target_value(&ev)))
            ></textarea>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                prop:checked=move || values.with(|v| v.flag(key))
                on:change=move |ev| values.update(|v| v.set_flag(key, event_target_checked(&ev)))
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                prop:value=move || values.with(|v| v.get(key))
                on:change=move |ev| values.update(|v| v.set(key, event_target_value(&ev)))
            >
                <option value="">"-- Select --"</option>
                {options
                    .into_iter()
                    .map(|opt| view! { <option value=opt.value.clone()>{opt.label.clone()}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="form-group" class:has-error=move || field_error.get().is_some()>
            <label>
                {label}
                {required.then(|| view! { <span class="required-mark">" *"</span> })}
            </label>
            {input}
            {move || field_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
        </div>
    }
}

/// Inline failure banner for list pages and form tops. Replaces nothing:
/// the page below it keeps rendering whatever state it has.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-banner">{move || error.get().unwrap_or_default()}</div>
        </Show>
    }
}
