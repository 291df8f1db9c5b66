use contracts::domain::a010_region::Region;
use contracts::domain::a011_province::{Province, ProvinceDraft};
use contracts::shared::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::form::ErrorBanner;
use crate::shared::store::ResourceStore;

#[component]
pub fn ProvinceDetails(
    #[prop(optional_no_strip)] record: Option<Province>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = ResourceStore::<Province>::expect_context();
    let regions = ResourceStore::<Region>::expect_context();

    if regions.items().get_untracked().is_empty() {
        spawn_local(regions.fetch_all());
    }

    let editing_id = record.as_ref().map(|r| r.id);
    let form = RwSignal::new(record.as_ref().map(ProvinceDraft::from).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());
    let (save_error, set_save_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let field_error =
        move |key: &'static str| Memo::new(move |_| errors.with(|e| e.get(key).map(str::to_string)));
    let name_error = field_error("Name");
    let region_error = field_error("RegionCode");

    let submit = move |_| {
        let draft = form.get();
        match draft.validate() {
            Err(field_errors) => errors.set(field_errors),
            Ok(()) => {
                errors.set(FieldErrors::new());
                set_save_error.set(None);
                set_saving.set(true);
                spawn_local(async move {
                    let outcome = match editing_id {
                        Some(id) => store.update(draft.into_record(id)).await.map(|_| ()),
                        None => store.add(draft).await.map(|_| ()),
                    };
                    set_saving.set(false);
                    match outcome {
                        Ok(()) => on_saved.run(()),
                        Err(message) => set_save_error.set(Some(message)),
                    }
                });
            }
        }
    };

    view! {
        <div class="details">
            <div class="details__header">
                <h2 class="details__title">
                    {if editing_id.is_some() { "Edit Province" } else { "New Province" }}
                </h2>
            </div>

            <ErrorBanner error=save_error/>

            <div class="details__body">
                <div class="form-group" class:has-error=move || name_error.get().is_some()>
                    <label>"Province Name" <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    {move || name_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group" class:has-error=move || region_error.get().is_some()>
                    <label>"Region" <span class="required-mark">" *"</span></label>
                    <select
                        prop:value=move || {
                            form.with(|f| f.region_code.map(|id| id.to_string()).unwrap_or_default())
                        }
                        on:change=move |ev| {
                            form.update(|f| f.region_code = event_target_value(&ev).parse().ok());
                        }
                    >
                        <option value="">"-- Select --"</option>
                        <For
                            each=move || regions.items().get()
                            key=|r| r.id
                            children=move |r: Region| {
                                view! { <option value=r.id.to_string()>{r.name.clone()}</option> }
                            }
                        />
                    </select>
                    {move || region_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>
            </div>

            <div class="details__actions">
                <button class="button button--primary" on:click=submit disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
