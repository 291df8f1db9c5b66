use contracts::domain::a001_fund::Fund;
use contracts::domain::a002_bank::Bank;
use contracts::projections::p901_cashbook::{totals, CashbookRequest, CashbookRow, VIEW_PATH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api;
use crate::shared::components::{DateInput, MoneyCell, TableTotalsRow};
use crate::shared::date_utils::{current_month_range, format_date};
use crate::shared::form::ErrorBanner;
use crate::shared::list_utils::get_sort_indicator;
use crate::shared::store::ResourceStore;

#[derive(Clone, Copy, PartialEq)]
enum SortColumn {
    Date,
    Reference,
    Particulars,
    Debit,
    Credit,
    Balance,
}

/// Cashbook view: receipts and disbursements of one depository account
/// over a period, with the server-computed running balance.
#[component]
pub fn CashbookPage() -> impl IntoView {
    let banks = ResourceStore::<Bank>::expect_context();
    let funds = ResourceStore::<Fund>::expect_context();

    if banks.items().get_untracked().is_empty() {
        spawn_local(banks.fetch_all());
    }
    if funds.items().get_untracked().is_empty() {
        spawn_local(funds.fetch_all());
    }

    const FORM_KEY: &str = "p901_cashbook";
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let restored = ctx.get_form_state(FORM_KEY);

    let (default_from, default_to) = current_month_range();
    let init_bank = restored
        .as_ref()
        .and_then(|s| s.get("bank_id").and_then(|v| v.as_i64()))
        .map(|v| v as i32);
    let init_fund = restored
        .as_ref()
        .and_then(|s| s.get("fund_id").and_then(|v| v.as_i64()))
        .map(|v| v as i32);
    let init_from = restored
        .as_ref()
        .and_then(|s| s.get("date_from").and_then(|v| v.as_str()))
        .unwrap_or(&default_from)
        .to_string();
    let init_to = restored
        .as_ref()
        .and_then(|s| s.get("date_to").and_then(|v| v.as_str()))
        .unwrap_or(&default_to)
        .to_string();

    let (bank_id, set_bank_id) = signal(init_bank);
    let (fund_id, set_fund_id) = signal(init_fund);
    let (date_from, set_date_from) = signal(init_from);
    let (date_to, set_date_to) = signal(init_to);

    // Filters survive tab close/reopen within the session.
    Effect::new(move |_| {
        let state = json!({
            "bank_id": bank_id.get(),
            "fund_id": fund_id.get(),
            "date_from": date_from.get(),
            "date_to": date_to.get(),
        });
        ctx.set_form_state(FORM_KEY.to_string(), state);
    });

    let rows = RwSignal::new(Vec::<CashbookRow>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (has_run, set_has_run) = signal(false);

    let sort_by = RwSignal::new(SortColumn::Date);
    let ascending = RwSignal::new(true);

    let toggle_sort = move |column: SortColumn| {
        if sort_by.get() == column {
            ascending.update(|a| *a = !*a);
        } else {
            sort_by.set(column);
            ascending.set(true);
        }
    };

    let sorted = Memo::new(move |_| {
        let mut list = rows.get();
        let column = sort_by.get();
        let asc = ascending.get();
        list.sort_by(|a, b| {
            let ord = match column {
                SortColumn::Date => a.date.cmp(&b.date),
                SortColumn::Reference => a.reference.cmp(&b.reference),
                SortColumn::Particulars => a.particulars.cmp(&b.particulars),
                SortColumn::Debit => a.debit.total_cmp(&b.debit),
                SortColumn::Credit => a.credit.total_cmp(&b.credit),
                SortColumn::Balance => a.balance.total_cmp(&b.balance),
            };
            if asc {
                ord
            } else {
                ord.reverse()
            }
        });
        list
    });

    let report_totals = Memo::new(move |_| rows.with(|r| totals(r)));

    let run = move || {
        let request = CashbookRequest {
            bank_id: bank_id.get(),
            fund_id: fund_id.get(),
            date_from: date_from.get(),
            date_to: date_to.get(),
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_report::<_, CashbookRow>(VIEW_PATH, &request).await {
                Ok(data) => rows.set(data),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
            set_has_run.set(true);
        });
    };

    let sortable_header = move |label: &'static str, column: SortColumn| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| toggle_sort(column)
            >
                {label}
                {move || get_sort_indicator(sort_by.get() == column, ascending.get())}
            </th>
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Cashbook"</h1>
                </div>
            </div>

            <div class="report-filters">
                <div class="report-filters__field">
                    <label>"Bank"</label>
                    <select
                        on:change=move |ev| {
                            set_bank_id.set(event_target_value(&ev).parse().ok());
                        }
                        prop:value=move || bank_id.get().map(|v| v.to_string()).unwrap_or_default()
                    >
                        <option value="">"All banks"</option>
                        <For
                            each=move || banks.items().get()
                            key=|b| b.id
                            children=move |b: Bank| {
                                view! { <option value=b.id.to_string()>{b.name.clone()}</option> }
                            }
                        />
                    </select>
                </div>

                <div class="report-filters__field">
                    <label>"Fund"</label>
                    <select
                        on:change=move |ev| {
                            set_fund_id.set(event_target_value(&ev).parse().ok());
                        }
                        prop:value=move || fund_id.get().map(|v| v.to_string()).unwrap_or_default()
                    >
                        <option value="">"All funds"</option>
                        <For
                            each=move || funds.items().get()
                            key=|f| f.id
                            children=move |f: Fund| {
                                view! { <option value=f.id.to_string()>{f.name.clone()}</option> }
                            }
                        />
                    </select>
                </div>

                <div class="report-filters__field">
                    <label>"From"</label>
                    <DateInput
                        value=date_from
                        on_change=Callback::new(move |value| set_date_from.set(value))
                    />
                </div>

                <div class="report-filters__field">
                    <label>"To"</label>
                    <DateInput
                        value=date_to
                        on_change=Callback::new(move |value| set_date_to.set(value))
                    />
                </div>

                <button
                    class="button button--primary"
                    on:click=move |_| run()
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Loading..." } else { "Run Report" }}
                </button>
            </div>

            <ErrorBanner error=error/>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {sortable_header("Date", SortColumn::Date)}
                            {sortable_header("Reference", SortColumn::Reference)}
                            {sortable_header("Particulars", SortColumn::Particulars)}
                            {sortable_header("Debit", SortColumn::Debit)}
                            {sortable_header("Credit", SortColumn::Credit)}
                            {sortable_header("Balance", SortColumn::Balance)}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || sorted.get().into_iter().enumerate()
                            key=|(index, _)| *index
                            children=move |(_, row): (usize, CashbookRow)| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format_date(&row.date)}</td>
                                        <td class="table__cell">{row.reference.clone()}</td>
                                        <td class="table__cell">{row.particulars.clone()}</td>
                                        <MoneyCell value=row.debit/>
                                        <MoneyCell value=row.credit/>
                                        <MoneyCell value=row.balance show_zero=true/>
                                    </tr>
                                }
                            }
                        />
                        <Show when=move || has_run.get() && !loading.get() && rows.with(|r| r.is_empty())>
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan="6">
                                    "No transactions in the selected period."
                                </td>
                            </tr>
                        </Show>
                        <Show when=move || !rows.with(|r| r.is_empty())>
                            <TableTotalsRow>
                                <td class="table__cell" colspan="3">"Totals"</td>
                                <MoneyCell
                                    value=Signal::derive(move || report_totals.get().debit)
                                    show_zero=true
                                    bold=true
                                />
                                <MoneyCell
                                    value=Signal::derive(move || report_totals.get().credit)
                                    show_zero=true
                                    bold=true
                                />
                                <td class="table__cell"></td>
                            </TableTotalsRow>
                        </Show>
                    </tbody>
                </table>
            </div>
        </div>
    }
}
