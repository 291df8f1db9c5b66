//! Generic list/details pair for the flat reference entities.
//!
//! Funds, currencies, vendor types and the other simple catalogs differ
//! only in their columns and form fields. Each implements
//! [`ReferenceEntity`] and the pages below do the rest; entities with
//! richer forms (banks, customers, vendors, documents) keep hand-written
//! pages instead.

use std::collections::HashSet;
use std::marker::PhantomData;

use contracts::shared::{FieldErrors, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::TableCheckbox;
use crate::shared::form::{ErrorBanner, FieldSpec, FormField, FormValues};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput, Searchable};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::store::ResourceStore;

/// Column layout and form wiring for one flat reference entity.
pub trait ReferenceEntity: Resource + Searchable {
    /// (cell key, column header) pairs, in display order.
    const COLUMNS: &'static [(&'static str, &'static str)];

    fn fields() -> Vec<FieldSpec>;

    /// Working copy for a new record. Entities with non-blank defaults
    /// (status flags, seed numbers) override this.
    fn default_values() -> FormValues {
        FormValues::new()
    }

    fn to_values(&self) -> FormValues;
    fn draft_from(values: &FormValues) -> Self::Draft;
    fn validate(draft: &Self::Draft) -> Result<(), FieldErrors>;
    fn with_id(id: i32, draft: Self::Draft) -> Self;

    /// Cell text for a `COLUMNS` key.
    fn cell(&self, key: &str) -> String;
}

#[component]
pub fn ReferenceListPage<T: ReferenceEntity + PartialEq>(
    #[prop(marker)] _marker: PhantomData<T>,
) -> impl IntoView {
    let store = ResourceStore::<T>::expect_context();
    let modal_stack = ModalStackService::expect_context();

    let (filter, set_filter) = signal(String::new());
    let (selected, set_selected) = signal::<HashSet<i32>>(HashSet::new());

    let filtered = Memo::new(move |_| filter_list(store.items().get(), &filter.get()));

    let open_details = move |record: Option<T>| {
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("reference-details-modal".to_string()),
            move |handle| {
                let record = record.clone();
                let on_saved = Callback::new(move |_| handle.close());
                let on_cancel = Callback::new(move |_| handle.close());
                view! {
                    <ReferenceDetails<T> record=record on_saved=on_saved on_cancel=on_cancel/>
                }
                .into_any()
            },
        );
    };

    let toggle_select = move |id: i32, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let delete_selected = move || {
        let ids: Vec<i32> = selected.get().into_iter().collect();
        if ids.is_empty() {
            return;
        }

        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&format!("Delete {} selected record(s)?", ids.len()))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_selected.set(HashSet::new());
        spawn_local(async move {
            for id in ids {
                let _ = store.remove(id).await;
            }
        });
    };

    let refresh = move || spawn_local(store.fetch_all());

    refresh();

    let empty_colspan = (T::COLUMNS.len() + 1).to_string();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{T::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |text| set_filter.set(text))
                    />
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {format!("New {}", T::element_name())}
                    </button>
                    <button class="button button--secondary" on:click=move |_| refresh()>
                        "Refresh"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| delete_selected()
                        disabled=move || selected.get().is_empty()
                    >
                        {icon("x")}
                        {move || format!("Delete ({})", selected.get().len())}
                    </button>
                </div>
            </div>

            <ErrorBanner error=store.error()/>

            <Show when=move || store.is_loading().get()>
                <div class="table__loading">"Loading..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        if checked {
                                            let ids: HashSet<i32> = filtered
                                                .get()
                                                .iter()
                                                .map(|r| r.id())
                                                .collect();
                                            set_selected.set(ids);
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            {T::COLUMNS
                                .iter()
                                .map(|&(_, header)| {
                                    view! { <th class="table__header-cell">{header}</th> }
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filtered.get()
                            key=|record| record.id()
                            children=move |record: T| {
                                let id = record.id();
                                let record_for_click = record.clone();
                                let cells = T::COLUMNS
                                    .iter()
                                    .map(|&(key, _)| {
                                        let record = record.clone();
                                        view! {
                                            <td class="table__cell">
                                                {move || highlight_matches(&record.cell(key), &filter.get())}
                                            </td>
                                        }
                                    })
                                    .collect_view();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || selected.get().contains(&id)
                                        on:click=move |_| open_details(Some(record_for_click.clone()))
                                    >
                                        <TableCheckbox
                                            checked=Signal::derive(move || selected.get().contains(&id))
                                            on_change=Callback::new(move |checked| toggle_select(id, checked))
                                        />
                                        {cells}
                                    </tr>
                                }
                            }
                        />
                        <Show when=move || !store.is_loading().get() && filtered.get().is_empty()>
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan=empty_colspan.clone()>
                                    "No records."
                                </td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Modal form shared by every [`ReferenceEntity`]. Creating posts the
/// draft, editing puts the full record back under its id.
#[component]
pub fn ReferenceDetails<T: ReferenceEntity>(
    #[prop(optional_no_strip)] record: Option<T>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = ResourceStore::<T>::expect_context();

    let editing_id = record.as_ref().map(|r| r.id());
    let initial = record
        .as_ref()
        .map(|r| r.to_values())
        .unwrap_or_else(T::default_values);

    let values = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::new());
    let (save_error, set_save_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = match editing_id {
        Some(_) => format!("Edit {}", T::element_name()),
        None => format!("New {}", T::element_name()),
    };

    let submit = move |_| {
        let draft = T::draft_from(&values.get());
        match T::validate(&draft) {
            Err(field_errors) => errors.set(field_errors),
            Ok(()) => {
                errors.set(FieldErrors::new());
                set_save_error.set(None);
                set_saving.set(true);
                spawn_local(async move {
                    let outcome = match editing_id {
                        Some(id) => store.update(T::with_id(id, draft)).await.map(|_| ()),
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
                <h2 class="details__title">{title}</h2>
            </div>

            <ErrorBanner error=save_error/>

            <div class="details__body">
                {T::fields()
                    .into_iter()
                    .map(|spec| view! { <FormField spec=spec values=values errors=errors/> })
                    .collect_view()}
            </div>

            <div class="details__actions">
                <button
                    class="button button--primary"
                    on:click=submit
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
