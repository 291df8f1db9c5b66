use std::collections::HashSet;

use contracts::domain::a014_document_detail::DocumentDetail;
use contracts::domain::a015_travel_order::TravelOrder;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::TravelOrderDetails;
use crate::shared::components::{StatusBadge, TableCheckbox};
use crate::shared::date_utils::format_date;
use crate::shared::form::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::store::ResourceStore;

/// Travel order register. The numbering series list is loaded alongside
/// so a new order can seed its document number without a second trip.
#[component]
pub fn TravelOrderListPage() -> impl IntoView {
    let store = ResourceStore::<TravelOrder>::expect_context();
    let document_details = ResourceStore::<DocumentDetail>::expect_context();
    let modal_stack = ModalStackService::expect_context();

    let (filter, set_filter) = signal(String::new());
    let (selected, set_selected) = signal::<HashSet<i32>>(HashSet::new());

    let filtered = Memo::new(move |_| filter_list(store.items().get(), &filter.get()));

    let open_details = move |record: Option<TravelOrder>| {
        modal_stack.push_with_frame(
            Some("max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()),
            Some("reference-details-modal".to_string()),
            move |handle| {
                let record = record.clone();
                let on_saved = Callback::new(move |_| handle.close());
                let on_cancel = Callback::new(move |_| handle.close());
                view! {
                    <TravelOrderDetails record=record on_saved=on_saved on_cancel=on_cancel/>
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

    let refresh = move || {
        spawn_local(store.fetch_all());
        spawn_local(document_details.fetch_all());
    };

    refresh();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Travel Orders"</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |text| set_filter.set(text))
                    />
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        "New Travel Order"
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
                                                .map(|r| r.id)
                                                .collect();
                                            set_selected.set(ids);
                                        } else {
                                            set_selected.set(HashSet::new());
                                        }
                                    }
                                />
                            </th>
                            <th class="table__header-cell">"Document No."</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Employee"</th>
                            <th class="table__header-cell">"Destination"</th>
                            <th class="table__header-cell">"Travel Dates"</th>
                            <th class="table__header-cell">"Files"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filtered.get()
                            key=|record| record.id
                            children=move |record: TravelOrder| {
                                let id = record.id;
                                let status = record.status;
                                let record_for_click = record.clone();
                                let document_no = record.document_no.clone();
                                let date = format_date(&record.date);
                                let employee_name = record.employee_name.clone();
                                let destination = record.destination.clone();
                                let travel_dates = format!(
                                    "{} to {}",
                                    format_date(&record.date_from),
                                    format_date(&record.date_to),
                                );
                                let attachment_count = record.attachments.len();
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
                                        <td class="table__cell">
                                            {move || highlight_matches(&document_no, &filter.get())}
                                        </td>
                                        <td class="table__cell">{date}</td>
                                        <td class="table__cell">
                                            {move || highlight_matches(&employee_name, &filter.get())}
                                        </td>
                                        <td class="table__cell">
                                            {move || highlight_matches(&destination, &filter.get())}
                                        </td>
                                        <td class="table__cell">{travel_dates}</td>
                                        <td class="table__cell">
                                            {(attachment_count > 0)
                                                .then(|| {
                                                    view! {
                                                        {icon("paperclip")}
                                                        {format!(" {}", attachment_count)}
                                                    }
                                                })}
                                        </td>
                                        <td class="table__cell">
                                            <StatusBadge status=status/>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                        <Show when=move || !store.is_loading().get() && filtered.get().is_empty()>
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan="8">
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
