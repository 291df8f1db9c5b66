use contracts::domain::a010_region::Region;
use contracts::domain::a011_province::Province;
use contracts::domain::a012_municipality::{Municipality, MunicipalityDraft};
use contracts::shared::{AddressSelection, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::form::ErrorBanner;
use crate::shared::store::ResourceStore;

/// Municipality form. The parent selects run through [`AddressSelection`],
/// so picking a province back-fills the region in the same change.
#[component]
pub fn MunicipalityDetails(
    #[prop(optional_no_strip)] record: Option<Municipality>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = ResourceStore::<Municipality>::expect_context();
    let provinces = ResourceStore::<Province>::expect_context();
    let regions = ResourceStore::<Region>::expect_context();

    if provinces.items().get_untracked().is_empty() {
        spawn_local(provinces.fetch_all());
    }
    if regions.items().get_untracked().is_empty() {
        spawn_local(regions.fetch_all());
    }

    let editing_id = record.as_ref().map(|r| r.id);
    let name = RwSignal::new(record.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let parents = RwSignal::new(AddressSelection {
        province_id: record.as_ref().map(|r| r.province_code),
        region_id: record.as_ref().map(|r| r.region_code),
        ..Default::default()
    });
    let errors = RwSignal::new(FieldErrors::new());
    let (save_error, set_save_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let field_error =
        move |key: &'static str| Memo::new(move |_| errors.with(|e| e.get(key).map(str::to_string)));
    let name_error = field_error("Name");
    let province_error = field_error("ProvinceCode");
    let region_error = field_error("RegionCode");

    let change_province = move |ev: leptos::ev::Event| {
        let list = provinces.items().get();
        parents.update(|p| p.select_province(event_target_value(&ev).parse().ok(), &list));
    };

    let change_region = move |ev: leptos::ev::Event| {
        parents.update(|p| p.select_region(event_target_value(&ev).parse().ok()));
    };

    let submit = move |_| {
        let selection = parents.get();
        let draft = MunicipalityDraft {
            name: name.get(),
            province_code: selection.province_id,
            region_code: selection.region_id,
        };
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
                    {if editing_id.is_some() { "Edit Municipality" } else { "New Municipality" }}
                </h2>
            </div>

            <ErrorBanner error=save_error/>

            <div class="details__body">
                <div class="form-group" class:has-error=move || name_error.get().is_some()>
                    <label>"Municipality Name" <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    {move || name_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group" class:has-error=move || province_error.get().is_some()>
                    <label>"Province" <span class="required-mark">" *"</span></label>
                    <select
                        prop:value=move || {
                            parents.with(|p| p.province_id.map(|id| id.to_string()).unwrap_or_default())
                        }
                        on:change=change_province
                    >
                        <option value="">"-- Select --"</option>
                        <For
                            each=move || provinces.items().get()
                            key=|p| p.id
                            children=move |p: Province| {
                                view! { <option value=p.id.to_string()>{p.name.clone()}</option> }
                            }
                        />
                    </select>
                    {move || {
                        province_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
                </div>

                <div class="form-group" class:has-error=move || region_error.get().is_some()>
                    <label>"Region" <span class="required-mark">" *"</span></label>
                    <select
                        prop:value=move || {
                            parents.with(|p| p.region_id.map(|id| id.to_string()).unwrap_or_default())
                        }
                        on:change=change_region
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
