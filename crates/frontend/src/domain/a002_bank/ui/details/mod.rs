use contracts::domain::a001_fund::Fund;
use contracts::domain::a002_bank::{Bank, BankDraft};
use contracts::shared::{FieldErrors, RecordStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::form::ErrorBanner;
use crate::shared::store::ResourceStore;

#[component]
pub fn BankDetails(
    #[prop(optional_no_strip)] record: Option<Bank>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = ResourceStore::<Bank>::expect_context();
    let funds = ResourceStore::<Fund>::expect_context();

    if funds.items().get_untracked().is_empty() {
        spawn_local(funds.fetch_all());
    }

    let editing_id = record.as_ref().map(|r| r.id);
    let form = RwSignal::new(record.as_ref().map(BankDraft::from).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());
    let (save_error, set_save_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let field_error =
        move |key: &'static str| Memo::new(move |_| errors.with(|e| e.get(key).map(str::to_string)));
    let name_error = field_error("Name");
    let account_no_error = field_error("AccountNo");
    let fund_error = field_error("FundID");

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
                    {if editing_id.is_some() { "Edit Bank" } else { "New Bank" }}
                </h2>
            </div>

            <ErrorBanner error=save_error/>

            <div class="details__body">
                <div class="form-group" class:has-error=move || name_error.get().is_some()>
                    <label>"Bank Name" <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    {move || name_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group">
                    <label>"Branch"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.branch.clone())
                        on:input=move |ev| form.update(|f| f.branch = event_target_value(&ev))
                    />
                </div>

                <div class="form-group" class:has-error=move || account_no_error.get().is_some()>
                    <label>"Account Number" <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.account_no.clone())
                        on:input=move |ev| form.update(|f| f.account_no = event_target_value(&ev))
                    />
                    {move || {
                        account_no_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label>"Account Name"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.account_name.clone())
                        on:input=move |ev| form.update(|f| f.account_name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group" class:has-error=move || fund_error.get().is_some()>
                    <label>"Fund" <span class="required-mark">" *"</span></label>
                    <select
                        prop:value=move || {
                            form.with(|f| f.fund_id.map(|id| id.to_string()).unwrap_or_default())
                        }
                        on:change=move |ev| {
                            form.update(|f| f.fund_id = event_target_value(&ev).parse().ok());
                        }
                    >
                        <option value="">"-- Select --"</option>
                        <For
                            each=move || funds.items().get()
                            key=|fund| fund.id
                            children=move |fund: Fund| {
                                view! { <option value=fund.id.to_string()>{fund.name.clone()}</option> }
                            }
                        />
                    </select>
                    {move || fund_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group">
                    <label>"Address"</label>
                    <textarea
                        prop:value=move || form.with(|f| f.address.clone())
                        on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                    ></textarea>
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
