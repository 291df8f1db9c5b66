use contracts::domain::a001_fund::Fund;
use contracts::projections::p903_trial_balance::{
    totals, TrialBalanceRequest, TrialBalanceRow, VIEW_PATH,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api;
use crate::shared::components::{DateInput, MoneyCell, TableTotalsRow};
use crate::shared::date_utils::current_month_range;
use crate::shared::form::ErrorBanner;
use crate::shared::list_utils::get_sort_indicator;
use crate::shared::store::ResourceStore;

#[derive(Clone, Copy, PartialEq)]
enum SortColumn {
    AccountCode,
    AccountTitle,
    Debit,
    Credit,
}

/// Trial balance view: per-account debit and credit totals for the
/// period, with a balance check on the column totals.
#[component]
pub fn TrialBalancePage() -> impl IntoView {
    let funds = ResourceStore::<Fund>::expect_context();

    if funds.items().get_untracked().is_empty() {
        spawn_local(funds.fetch_all());
    }

    let (default_from, default_to) = current_month_range();
    let (fund_id, set_fund_id) = signal::<Option<i32>>(None);
    let (date_from, set_date_from) = signal(default_from);
    let (date_to, set_date_to) = signal(default_to);

    let rows = RwSignal::new(Vec::<TrialBalanceRow>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (has_run, set_has_run) = signal(false);

    let sort_by = RwSignal::new(SortColumn::AccountCode);
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
                SortColumn::AccountCode => a.account_code.cmp(&b.account_code),
                SortColumn::AccountTitle => a.account_title.cmp(&b.account_title),
                SortColumn::Debit => a.debit.total_cmp(&b.debit),
                SortColumn::Credit => a.credit.total_cmp(&b.credit),
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
        let request = TrialBalanceRequest {
            fund_id: fund_id.get(),
            date_from: date_from.get(),
            date_to: date_to.get(),
        };
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_report::<_, TrialBalanceRow>(VIEW_PATH, &request).await {
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
                    <h1 class="header__title">"Trial Balance"</h1>
                </div>
            </div>

            <div class="report-filters">
                <div class="report-filters__field">
                    <label>"Fund"</label>
                    <select on:change=move |ev| {
                        set_fund_id.set(event_target_value(&ev).parse().ok());
                    }>
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
                            {sortable_header("Account Code", SortColumn::AccountCode)}
                            {sortable_header("Account Title", SortColumn::AccountTitle)}
                            {sortable_header("Debit", SortColumn::Debit)}
                            {sortable_header("Credit", SortColumn::Credit)}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || sorted.get().into_iter().enumerate()
                            key=|(index, _)| *index
                            children=move |(_, row): (usize, TrialBalanceRow)| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.account_code.clone()}</td>
                                        <td class="table__cell">{row.account_title.clone()}</td>
                                        <MoneyCell value=row.debit/>
                                        <MoneyCell value=row.credit/>
                                    </tr>
                                }
                            }
                        />
                        <Show when=move || has_run.get() && !loading.get() && rows.with(|r| r.is_empty())>
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan="4">
                                    "No postings in the selected period."
                                </td>
                            </tr>
                        </Show>
                        <Show when=move || !rows.with(|r| r.is_empty())>
                            <TableTotalsRow>
                                <td class="table__cell" colspan="2">"Totals"</td>
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
                            </TableTotalsRow>
                        </Show>
                    </tbody>
                </table>
            </div>

            <Show when=move || !rows.with(|r| r.is_empty())>
                <div class=move || {
                    if report_totals.get().is_balanced() {
                        "report-balance report-balance--ok"
                    } else {
                        "report-balance report-balance--off"
                    }
                }>
                    {move || {
                        if report_totals.get().is_balanced() {
                            "Debits equal credits."
                        } else {
                            "Out of balance: debit and credit totals differ."
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
