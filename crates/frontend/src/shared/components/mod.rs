pub mod address_fields;
pub mod date_input;
pub mod money_cell;
pub mod status_badge;
pub mod table_checkbox;
pub mod table_totals_row;

pub use address_fields::AddressFields;
pub use date_input::DateInput;
pub use money_cell::MoneyCell;
pub use status_badge::StatusBadge;
pub use table_checkbox::TableCheckbox;
pub use table_totals_row::TableTotalsRow;
