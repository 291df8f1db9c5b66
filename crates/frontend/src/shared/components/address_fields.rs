use contracts::domain::a010_region::Region;
use contracts::domain::a011_province::Province;
use contracts::domain::a012_municipality::Municipality;
use contracts::domain::a013_barangay::Barangay;
use contracts::shared::AddressSelection;
use leptos::prelude::*;

use crate::shared::store::ResourceStore;

fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

fn id_value(id: Option<i32>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}

/// Region / province / municipality / barangay selects for customer and
/// vendor forms.
///
/// Picking any level routes through [`AddressSelection`], so a barangay
/// pick back-fills the three ancestors in one change. Option lists narrow
/// to the selected ancestor; a descendant kept from before an ancestor
/// change stays in the selection even when it no longer appears in the
/// narrowed list.
#[component]
pub fn AddressFields(
    #[prop(into)] value: Signal<AddressSelection>,
    on_change: Callback<AddressSelection>,
) -> impl IntoView {
    let regions = ResourceStore::<Region>::expect_context();
    let provinces = ResourceStore::<Province>::expect_context();
    let municipalities = ResourceStore::<Municipality>::expect_context();
    let barangays = ResourceStore::<Barangay>::expect_context();

    let province_options = Memo::new(move |_| {
        let all = provinces.items().get();
        match value.get().region_id {
            Some(region) => all.into_iter().filter(|p| p.region_code == region).collect(),
            None => all,
        }
    });

    let municipality_options = Memo::new(move |_| {
        let all = municipalities.items().get();
        let selection = value.get();
        if let Some(province) = selection.province_id {
            all.into_iter()
                .filter(|m| m.province_code == province)
                .collect()
        } else if let Some(region) = selection.region_id {
            all.into_iter().filter(|m| m.region_code == region).collect()
        } else {
            all
        }
    });

    let barangay_options = Memo::new(move |_| {
        let all = barangays.items().get();
        match value.get().municipality_id {
            Some(municipality) => all
                .into_iter()
                .filter(|b| b.municipality_code == municipality)
                .collect(),
            None => all,
        }
    });

    let change_region = move |ev: leptos::ev::Event| {
        let mut selection = value.get();
        selection.select_region(parse_id(&event_target_value(&ev)));
        on_change.run(selection);
    };

    let change_province = move |ev: leptos::ev::Event| {
        let mut selection = value.get();
        let list = provinces.items().get();
        selection.select_province(parse_id(&event_target_value(&ev)), &list);
        on_change.run(selection);
    };

    let change_municipality = move |ev: leptos::ev::Event| {
        let mut selection = value.get();
        let list = municipalities.items().get();
        selection.select_municipality(parse_id(&event_target_value(&ev)), &list);
        on_change.run(selection);
    };

    let change_barangay = move |ev: leptos::ev::Event| {
        let mut selection = value.get();
        let list = barangays.items().get();
        selection.select_barangay(parse_id(&event_target_value(&ev)), &list);
        on_change.run(selection);
    };

    view! {
        <div class="address-fields">
            <div class="form-group">
                <label>"Region"</label>
                <select
                    class="form-select"
                    prop:value=move || id_value(value.get().region_id)
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
            </div>

            <div class="form-group">
                <label>"Province"</label>
                <select
                    class="form-select"
                    prop:value=move || id_value(value.get().province_id)
                    on:change=change_province
                >
                    <option value="">"-- Select --"</option>
                    <For
                        each=move || province_options.get()
                        key=|p| p.id
                        children=move |p: Province| {
                            view! { <option value=p.id.to_string()>{p.name.clone()}</option> }
                        }
                    />
                </select>
            </div>

            <div class="form-group">
                <label>"Municipality"</label>
                <select
                    class="form-select"
                    prop:value=move || id_value(value.get().municipality_id)
                    on:change=change_municipality
                >
                    <option value="">"-- Select --"</option>
                    <For
                        each=move || municipality_options.get()
                        key=|m| m.id
                        children=move |m: Municipality| {
                            view! { <option value=m.id.to_string()>{m.name.clone()}</option> }
                        }
                    />
                </select>
            </div>

            <div class="form-group">
                <label>"Barangay"</label>
                <select
                    class="form-select"
                    prop:value=move || id_value(value.get().barangay_id)
                    on:change=change_barangay
                >
                    <option value="">"-- Select --"</option>
                    <For
                        each=move || barangay_options.get()
                        key=|b| b.id
                        children=move |b: Barangay| {
                            view! { <option value=b.id.to_string()>{b.name.clone()}</option> }
                        }
                    />
                </select>
            </div>
        </div>
    }
}
