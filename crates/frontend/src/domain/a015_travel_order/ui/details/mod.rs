use contracts::domain::a014_document_detail::{next_number, DocumentDetail, DocumentTypeCategory};
use contracts::domain::a015_travel_order::{TravelOrder, TravelOrderDraft};
use contracts::shared::{FieldErrors, RecordStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::shared::components::DateInput;
use crate::shared::date_utils::today_iso;
use crate::shared::form::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::store::ResourceStore;

fn format_file_size(size: Option<i64>) -> String {
    match size {
        Some(bytes) if bytes >= 1_048_576 => format!("{:.1} MB", bytes as f64 / 1_048_576.0),
        Some(bytes) if bytes >= 1024 => format!("{:.0} KB", bytes as f64 / 1024.0),
        Some(bytes) => format!("{} B", bytes),
        None => String::new(),
    }
}

/// Travel order form. Saves through the multipart endpoint so newly
/// picked files ride along with the JSON part; files already stored on
/// the order are listed read-only.
///
/// A new order seeds its document number from the active travel-order
/// numbering series once that list is in. The seed is a read: the series
/// advances only when the server accepts the document.
#[component]
pub fn TravelOrderDetails(
    #[prop(optional_no_strip)] record: Option<TravelOrder>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = ResourceStore::<TravelOrder>::expect_context();
    let document_details = ResourceStore::<DocumentDetail>::expect_context();

    if document_details.items().get_untracked().is_empty() {
        spawn_local(document_details.fetch_all());
    }

    let editing_id = record.as_ref().map(|r| r.id);
    let existing_attachments = record.as_ref().map(|r| r.attachments.clone()).unwrap_or_default();
    let stored_files = (!existing_attachments.is_empty()).then(|| {
        view! {
            <ul class="attachment-list">
                {existing_attachments
                    .iter()
                    .map(|attachment| {
                        let label = format!(
                            "{} ({})",
                            attachment.file_name,
                            format_file_size(attachment.size),
                        );
                        view! {
                            <li class="attachment-list__item">
                                {icon("paperclip")}
                                {label}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
    });

    let form = RwSignal::new(match record.as_ref() {
        Some(r) => TravelOrderDraft::from(r),
        None => TravelOrderDraft {
            date: today_iso(),
            status: RecordStatus::Active,
            ..Default::default()
        },
    });
    let pending_files = RwSignal::new_local(Vec::<web_sys::File>::new());
    let errors = RwSignal::new(FieldErrors::new());
    let (save_error, set_save_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    // Fill the document number once the series list arrives, but never
    // overwrite something already typed.
    if editing_id.is_none() {
        Effect::new(move |_| {
            let details = document_details.items().get();
            if form.with_untracked(|f| f.document_no.is_empty()) {
                if let Some(number) = next_number(&details, DocumentTypeCategory::TravelOrder) {
                    form.update(|f| f.document_no = number.to_string());
                }
            }
        });
    }

    let field_error =
        move |key: &'static str| Memo::new(move |_| errors.with(|e| e.get(key).map(str::to_string)));
    let document_no_error = field_error("DocumentNo");
    let employee_error = field_error("EmployeeName");
    let destination_error = field_error("Destination");
    let date_from_error = field_error("DateFrom");
    let date_to_error = field_error("DateTo");

    let handle_file_pick = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(files) = input.files() {
                pending_files.update(|pending| {
                    for index in 0..files.length() {
                        if let Some(file) = files.get(index) {
                            pending.push(file);
                        }
                    }
                });
            }
            // Allow re-picking the same file after removal.
            input.set_value("");
        }
    };

    let remove_pending = move |index: usize| {
        pending_files.update(|pending| {
            if index < pending.len() {
                pending.remove(index);
            }
        });
    };

    let submit = move |_| {
        let draft = form.get();
        match draft.validate() {
            Err(field_errors) => errors.set(field_errors),
            Ok(()) => {
                errors.set(FieldErrors::new());
                set_save_error.set(None);
                set_saving.set(true);
                let files = pending_files.get_untracked();
                spawn_local(async move {
                    let outcome = match editing_id {
                        Some(id) => store.update_with_files(id, draft, files).await.map(|_| ()),
                        None => store.add_with_files(draft, files).await.map(|_| ()),
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
                    {if editing_id.is_some() { "Edit Travel Order" } else { "New Travel Order" }}
                </h2>
            </div>

            <ErrorBanner error=save_error/>

            <div class="details__body">
                <div class="form-group" class:has-error=move || document_no_error.get().is_some()>
                    <label>"Document No." <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.document_no.clone())
                        on:input=move |ev| form.update(|f| f.document_no = event_target_value(&ev))
                    />
                    {move || {
                        document_no_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label>"Date"</label>
                    <DateInput
                        value=Signal::derive(move || form.with(|f| f.date.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.date = value))
                    />
                </div>

                <div class="form-group" class:has-error=move || employee_error.get().is_some()>
                    <label>"Employee Name" <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.employee_name.clone())
                        on:input=move |ev| form.update(|f| f.employee_name = event_target_value(&ev))
                    />
                    {move || {
                        employee_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label>"Position"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.position.clone())
                        on:input=move |ev| form.update(|f| f.position = event_target_value(&ev))
                    />
                </div>

                <div class="form-group" class:has-error=move || destination_error.get().is_some()>
                    <label>"Destination" <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.destination.clone())
                        on:input=move |ev| form.update(|f| f.destination = event_target_value(&ev))
                    />
                    {move || {
                        destination_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label>"Purpose"</label>
                    <textarea
                        prop:value=move || form.with(|f| f.purpose.clone())
                        on:input=move |ev| form.update(|f| f.purpose = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group" class:has-error=move || date_from_error.get().is_some()>
                    <label>"Departure Date" <span class="required-mark">" *"</span></label>
                    <DateInput
                        value=Signal::derive(move || form.with(|f| f.date_from.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.date_from = value))
                    />
                    {move || {
                        date_from_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
                </div>

                <div class="form-group" class:has-error=move || date_to_error.get().is_some()>
                    <label>"Return Date" <span class="required-mark">" *"</span></label>
                    <DateInput
                        value=Signal::derive(move || form.with(|f| f.date_to.clone()))
                        on_change=Callback::new(move |value| form.update(|f| f.date_to = value))
                    />
                    {move || {
                        date_to_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
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

                <div class="form-group">
                    <label>"Attachments"</label>
                    {stored_files}

                    <input type="file" multiple on:change=handle_file_pick/>

                    <Show when=move || !pending_files.with(|p| p.is_empty())>
                        <ul class="attachment-list attachment-list--pending">
                            {move || {
                                pending_files
                                    .with(|pending| {
                                        pending
                                            .iter()
                                            .enumerate()
                                            .map(|(index, file)| {
                                                let label = format!(
                                                    "{} ({})",
                                                    file.name(),
                                                    format_file_size(Some(file.size() as i64)),
                                                );
                                                view! {
                                                    <li class="attachment-list__item">
                                                        {icon("paperclip")}
                                                        {label}
                                                        <button
                                                            class="attachment-list__remove"
                                                            on:click=move |_| remove_pending(index)
                                                        >
                                                            {icon("x")}
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect_view()
                                    })
                            }}
                        </ul>
                    </Show>
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
