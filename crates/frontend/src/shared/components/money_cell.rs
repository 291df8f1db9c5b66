use leptos::prelude::*;

use crate::shared::number_format::format_money;

/// Right-aligned table cell for monetary amounts.
///
/// Formats with two decimals and a thousands separator. A zero renders
/// as an empty cell unless `show_zero` is set, matching how the printed
/// ledgers leave blank debit/credit columns.
#[component]
pub fn MoneyCell(
    #[prop(into)] value: Signal<f64>,
    #[prop(optional)] show_zero: bool,
    #[prop(optional)] bold: bool,
) -> impl IntoView {
    let text = move || {
        let v = value.get();
        if v == 0.0 && !show_zero {
            String::new()
        } else {
            format_money(v)
        }
    };

    let style = if bold { "font-weight: 600;" } else { "" };

    view! {
        <td class="table__cell table__cell--right">
            <span style=style>{text}</span>
        </td>
    }
}
