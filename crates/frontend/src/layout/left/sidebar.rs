//! Sidebar with collapsible menu groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<&'static str>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "references",
            label: "References",
            icon: "references",
            items: vec![
                "a001_fund",
                "a002_bank",
                "a003_currency",
                "a004_customer",
                "a005_vendor",
                "a006_vendor_type",
                "a007_industry_type",
                "a008_payment_terms",
                "a009_payment_method",
            ],
        },
        MenuGroup {
            id: "locations",
            label: "Locations",
            icon: "locations",
            items: vec![
                "a010_region",
                "a011_province",
                "a012_municipality",
                "a013_barangay",
            ],
        },
        MenuGroup {
            id: "documents",
            label: "Documents",
            icon: "documents",
            items: vec!["a014_document_detail", "a015_travel_order"],
        },
        MenuGroup {
            id: "reports",
            label: "Reports",
            icon: "reports",
            items: vec![
                "p901_cashbook",
                "p902_general_journal",
                "p903_trial_balance",
                "p904_subsidiary_ledger",
            ],
        },
        MenuGroup {
            id: "system",
            label: "System",
            icon: "system",
            items: vec!["sys_modules", "sys_user_access"],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["references".to_string()]);

    let groups = menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || {
                                    expanded_groups.get().contains(&group_id_for_exp)
                                }
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        {
                            let gid_show = group_id.clone();
                            let items = group.items.clone();
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items.iter().map(|&id| {
                                            let item_id = StoredValue::new(id.to_string());
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        let iid = item_id.get_value();
                                                        ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                                                    }
                                                    on:click=move |_| {
                                                        ctx.open_tab(id, tab_label_for_key(id));
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon("item")}
                                                        <span>{tab_label_for_key(id)}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        }
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
