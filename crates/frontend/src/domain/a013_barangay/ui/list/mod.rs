use std::collections::HashSet;

use contracts::domain::a010_region::Region;
use contracts::domain::a011_province::Province;
use contracts::domain::a012_municipality::Municipality;
use contracts::domain::a013_barangay::Barangay;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::BarangayDetails;
use crate::shared::components::TableCheckbox;
use crate::shared::form::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::store::ResourceStore;

#[component]
pub fn BarangayListPage() -> impl IntoView {
    let store = ResourceStore::<Barangay>::expect_context();
    let municipalities = ResourceStore::<Municipality>::expect_context();
    let provinces = ResourceStore::<Province>::expect_context();
    let regions = ResourceStore::<Region>::expect_context();
    let modal_stack = ModalStackService::expect_context();

    let (filter, set_filter) = signal(String::new());
    let (selected, set_selected) = signal::<HashSet<i32>>(HashSet::new());

    let filtered = Memo::new(move |_| filter_list(store.items().get(), &filter.get()));

    let municipality_name = move |code: i32| {
        municipalities.items().with(|list| {
            list.iter()
                .find(|m| m.id == code)
                .map(|m| m.name.clone())
                .unwrap_or_default()
        })
    };

    let province_name = move |code: i32| {
        provinces.items().with(|list| {
            list.iter()
                .find(|p| p.id == code)
                .map(|p| p.name.clone())
                .unwrap_or_default()
        })
    };

    let region_name = move |code: i32| {
        regions.items().with(|list| {
            list.iter()
                .find(|r| r.id == code)
                .map(|r| r.name.clone())
                .unwrap_or_default()
        })
    };

    let open_details = move |record: Option<Barangay>| {
        modal_stack.push_with_frame(
            Some("max-width: min(560px, 95vw); width: min(560px, 95vw);".to_string()),
            Some("reference-details-modal".to_string()),
            move |handle| {
                let record = record.clone();
                let on_saved = Callback::new(move |_| handle.close());
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <BarangayDetails record=record on_saved=on_saved on_cancel=on_cancel/> }
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
        spawn_local(municipalities.fetch_all());
        spawn_local(provinces.fetch_all());
        spawn_local(regions.fetch_all());
    };

    refresh();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Barangays"</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |text| set_filter.set(text))
                    />
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        "New Barangay"
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
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Municipality"</th>
                            <th class="table__header-cell">"Province"</th>
                            <th class="table__header-cell">"Region"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filtered.get()
                            key=|record| record.id
                            children=move |record: Barangay| {
                                let id = record.id;
                                let municipality_code = record.municipality_code;
                                let province_code = record.province_code;
                                let region_code = record.region_code;
                                let record_for_click = record.clone();
                                let name = record.name.clone();
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
                                            {move || highlight_matches(&name, &filter.get())}
                                        </td>
                                        <td class="table__cell">
                                            {move || municipality_name(municipality_code)}
                                        </td>
                                        <td class="table__cell">{move || province_name(province_code)}</td>
                                        <td class="table__cell">{move || region_name(region_code)}</td>
                                    </tr>
                                }
                            }
                        />
                        <Show when=move || !store.is_loading().get() && filtered.get().is_empty()>
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan="5">
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
