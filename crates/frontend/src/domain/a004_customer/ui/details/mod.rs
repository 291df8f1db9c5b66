use contracts::domain::a004_customer::{Customer, CustomerDraft};
use contracts::domain::a010_region::Region;
use contracts::domain::a011_province::Province;
use contracts::domain::a012_municipality::Municipality;
use contracts::domain::a013_barangay::Barangay;
use contracts::shared::{FieldErrors, RecordStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::AddressFields;
use crate::shared::form::ErrorBanner;
use crate::shared::store::ResourceStore;

/// Customer form. The four location catalogs feed the address selects,
/// so they load on open when another page has not pulled them yet.
#[component]
pub fn CustomerDetails(
    #[prop(optional_no_strip)] record: Option<Customer>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = ResourceStore::<Customer>::expect_context();
    let regions = ResourceStore::<Region>::expect_context();
    let provinces = ResourceStore::<Province>::expect_context();
    let municipalities = ResourceStore::<Municipality>::expect_context();
    let barangays = ResourceStore::<Barangay>::expect_context();

    if regions.items().get_untracked().is_empty() {
        spawn_local(regions.fetch_all());
    }
    if provinces.items().get_untracked().is_empty() {
        spawn_local(provinces.fetch_all());
    }
    if municipalities.items().get_untracked().is_empty() {
        spawn_local(municipalities.fetch_all());
    }
    if barangays.items().get_untracked().is_empty() {
        spawn_local(barangays.fetch_all());
    }

    let editing_id = record.as_ref().map(|r| r.id);
    let form = RwSignal::new(record.as_ref().map(CustomerDraft::from).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());
    let (save_error, set_save_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let field_error =
        move |key: &'static str| Memo::new(move |_| errors.with(|e| e.get(key).map(str::to_string)));
    let name_error = field_error("Name");
    let tin_error = field_error("TIN");
    let email_error = field_error("Email");

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
                    {if editing_id.is_some() { "Edit Customer" } else { "New Customer" }}
                </h2>
            </div>

            <ErrorBanner error=save_error/>

            <div class="details__body">
                <div class="form-group" class:has-error=move || name_error.get().is_some()>
                    <label>"Customer Name" <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    {move || name_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group" class:has-error=move || tin_error.get().is_some()>
                    <label>"TIN"</label>
                    <input
                        type="text"
                        maxlength="12"
                        placeholder="9 or 12 digits"
                        prop:value=move || form.with(|f| f.tin.clone())
                        on:input=move |ev| form.update(|f| f.tin = event_target_value(&ev))
                    />
                    {move || tin_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <AddressFields
                    value=Signal::derive(move || form.with(|f| f.address))
                    on_change=Callback::new(move |selection| form.update(|f| f.address = selection))
                />

                <div class="form-group">
                    <label>"Street / House No."</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.street.clone())
                        on:input=move |ev| form.update(|f| f.street = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Contact Person"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.contact_person.clone())
                        on:input=move |ev| form.update(|f| f.contact_person = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Contact No."</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.contact_no.clone())
                        on:input=move |ev| form.update(|f| f.contact_no = event_target_value(&ev))
                    />
                </div>

                <div class="form-group" class:has-error=move || email_error.get().is_some()>
                    <label>"Email"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    {move || email_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group">
                    <label>"Status"</label>
                    <select
                        prop:value=move || form.with(|f| f.status.as_str().to_string())
                        on:change=move |ev| {
                            form.update(|f| f.status = RecordStatus::parse(&event_target_value(&ev)));
                        }
                    >
                        {RecordStatus::all()
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                            .collect_view()}
                    </select>
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
