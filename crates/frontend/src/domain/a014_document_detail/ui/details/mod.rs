use contracts::domain::a014_document_detail::{
    DocumentDetail, DocumentDetailDraft, DocumentNumber, DocumentTypeCategory,
};
use contracts::shared::{FieldErrors, RecordStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::form::ErrorBanner;
use crate::shared::store::ResourceStore;

/// Numbering series form with a live preview of the number the next
/// document would take. Issuance advances `current_number` on the server;
/// this form only seeds and corrects the series.
#[component]
pub fn DocumentDetailDetails(
    #[prop(optional_no_strip)] record: Option<DocumentDetail>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = ResourceStore::<DocumentDetail>::expect_context();

    let editing_id = record.as_ref().map(|r| r.id);
    let form = RwSignal::new(
        record
            .as_ref()
            .map(DocumentDetailDraft::from)
            .unwrap_or_default(),
    );
    let errors = RwSignal::new(FieldErrors::new());
    let (save_error, set_save_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let field_error =
        move |key: &'static str| Memo::new(move |_| errors.with(|e| e.get(key).map(str::to_string)));
    let name_error = field_error("Name");
    let category_error = field_error("DocumentTypeCategory");
    let start_error = field_error("StartNumber");
    let current_error = field_error("CurrentNumber");

    let preview = Memo::new(move |_| {
        form.with(|f| {
            DocumentNumber {
                prefix: f.prefix.clone(),
                number: f.current_number,
                suffix: f.suffix.clone(),
            }
            .to_string()
        })
    });

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
                    {if editing_id.is_some() { "Edit Document Detail" } else { "New Document Detail" }}
                </h2>
            </div>

            <ErrorBanner error=save_error/>

            <div class="details__body">
                <div class="form-group" class:has-error=move || name_error.get().is_some()>
                    <label>"Series Name" <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    {move || name_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group">
                    <label>"Code"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.code.clone())
                        on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                    />
                </div>

                <div class="form-group" class:has-error=move || category_error.get().is_some()>
                    <label>"Document Type" <span class="required-mark">" *"</span></label>
                    <select
                        prop:value=move || {
                            form.with(|f| match f.document_type_category {
                                DocumentTypeCategory::Unknown => String::new(),
                                other => other.as_str().to_string(),
                            })
                        }
                        on:change=move |ev| {
                            form.update(|f| {
                                f.document_type_category = DocumentTypeCategory::parse(
                                    &event_target_value(&ev),
                                );
                            });
                        }
                    >
                        <option value="">"-- Select --"</option>
                        {DocumentTypeCategory::all()
                            .into_iter()
                            .map(|c| view! { <option value=c.as_str()>{c.display_name()}</option> })
                            .collect_view()}
                    </select>
                    {move || {
                        category_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label>"Prefix"</label>
                    <input
                        type="text"
                        placeholder="e.g. TO-2026-"
                        prop:value=move || form.with(|f| f.prefix.clone())
                        on:input=move |ev| form.update(|f| f.prefix = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Suffix"</label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.suffix.clone())
                        on:input=move |ev| form.update(|f| f.suffix = event_target_value(&ev))
                    />
                </div>

                <div class="form-group" class:has-error=move || start_error.get().is_some()>
                    <label>"Start Number" <span class="required-mark">" *"</span></label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.start_number.to_string())
                        on:input=move |ev| {
                            form.update(|f| {
                                f.start_number = event_target_value(&ev).parse().unwrap_or(0);
                            });
                        }
                    />
                    {move || start_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group" class:has-error=move || current_error.get().is_some()>
                    <label>"Current Number" <span class="required-mark">" *"</span></label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.with(|f| f.current_number.to_string())
                        on:input=move |ev| {
                            form.update(|f| {
                                f.current_number = event_target_value(&ev).parse().unwrap_or(0);
                            });
                        }
                    />
                    {move || {
                        current_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })
                    }}
                </div>

                <div class="form-group">
                    <label>"Next Number Preview"</label>
                    <div class="document-number-preview">{move || preview.get()}</div>
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
