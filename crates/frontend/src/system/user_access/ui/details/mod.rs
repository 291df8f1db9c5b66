use contracts::shared::FieldErrors;
use contracts::system::module::SystemModule;
use contracts::system::user_access::{UserAccess, UserAccessDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::form::ErrorBanner;
use crate::shared::store::ResourceStore;

#[component]
pub fn UserAccessDetails(
    #[prop(optional_no_strip)] record: Option<UserAccess>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = ResourceStore::<UserAccess>::expect_context();
    let modules = ResourceStore::<SystemModule>::expect_context();

    if modules.items().get_untracked().is_empty() {
        spawn_local(modules.fetch_all());
    }

    let editing_id = record.as_ref().map(|r| r.id);
    let form = RwSignal::new(record.as_ref().map(UserAccessDraft::from).unwrap_or_default());
    let errors = RwSignal::new(FieldErrors::new());
    let (save_error, set_save_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let field_error =
        move |key: &'static str| Memo::new(move |_| errors.with(|e| e.get(key).map(str::to_string)));
    let user_error = field_error("UserName");
    let module_error = field_error("ModuleID");

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
                    {if editing_id.is_some() { "Edit User Access" } else { "New User Access" }}
                </h2>
            </div>

            <ErrorBanner error=save_error/>

            <div class="details__body">
                <div class="form-group" class:has-error=move || user_error.get().is_some()>
                    <label>"User Name" <span class="required-mark">" *"</span></label>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.user_name.clone())
                        on:input=move |ev| form.update(|f| f.user_name = event_target_value(&ev))
                    />
                    {move || user_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group" class:has-error=move || module_error.get().is_some()>
                    <label>"Module" <span class="required-mark">" *"</span></label>
                    <select
                        prop:value=move || {
                            form.with(|f| f.module_id.map(|id| id.to_string()).unwrap_or_default())
                        }
                        on:change=move |ev| {
                            form.update(|f| f.module_id = event_target_value(&ev).parse().ok());
                        }
                    >
                        <option value="">"-- Select --"</option>
                        <For
                            each=move || modules.items().get()
                            key=|m| m.id
                            children=move |m: SystemModule| {
                                view! { <option value=m.id.to_string()>{m.name.clone()}</option> }
                            }
                        />
                    </select>
                    {move || module_error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
                </div>

                <div class="form-group form-group--checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.can_view)
                            on:change=move |ev| {
                                form.update(|f| f.can_view = event_target_checked(&ev));
                            }
                        />
                        " Can view"
                    </label>
                </div>

                <div class="form-group form-group--checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.can_add)
                            on:change=move |ev| {
                                form.update(|f| f.can_add = event_target_checked(&ev));
                            }
                        />
                        " Can add"
                    </label>
                </div>

                <div class="form-group form-group--checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.can_edit)
                            on:change=move |ev| {
                                form.update(|f| f.can_edit = event_target_checked(&ev));
                            }
                        />
                        " Can edit"
                    </label>
                </div>

                <div class="form-group form-group--checkbox">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.can_delete)
                            on:change=move |ev| {
                                form.update(|f| f.can_delete = event_target_checked(&ev));
                            }
                        />
                        " Can delete"
                    </label>
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
