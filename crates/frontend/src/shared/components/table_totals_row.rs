use leptos::prelude::*;

/// Totals row for report tables.
///
/// Renders a `<tr class="table__totals-row">` around the caller's `<td>`
/// cells so every report styles its totals the same way.
#[component]
pub fn TableTotalsRow(
    children: Children,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let row_class = if class.is_empty() {
        "table__totals-row".to_string()
    } else {
        format!("table__totals-row {}", class)
    };

    view! {
        <tr class=row_class>
            {children()}
        </tr>
    }
}
