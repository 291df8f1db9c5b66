//! Tab content registry: the one place mapping tab keys to views.

use contracts::domain::a001_fund::Fund;
use contracts::domain::a003_currency::Currency;
use contracts::domain::a006_vendor_type::VendorType;
use contracts::domain::a007_industry_type::IndustryType;
use contracts::domain::a008_payment_terms::PaymentTerms;
use contracts::domain::a009_payment_method::PaymentMethod;
use contracts::domain::a010_region::Region;
use contracts::system::module::SystemModule;
use leptos::logging::log;
use leptos::prelude::*;

use crate::domain::a002_bank::ui::list::BankListPage;
use crate::domain::a004_customer::ui::list::CustomerListPage;
use crate::domain::a005_vendor::ui::list::VendorListPage;
use crate::domain::a011_province::ui::list::ProvinceListPage;
use crate::domain::a012_municipality::ui::list::MunicipalityListPage;
use crate::domain::a013_barangay::ui::list::BarangayListPage;
use crate::domain::a014_document_detail::ui::list::DocumentDetailListPage;
use crate::domain::a015_travel_order::ui::list::TravelOrderListPage;
use crate::projections::p901_cashbook::ui::list::CashbookPage;
use crate::projections::p902_general_journal::ui::list::GeneralJournalPage;
use crate::projections::p903_trial_balance::ui::list::TrialBalancePage;
use crate::projections::p904_subsidiary_ledger::ui::list::SubsidiaryLedgerPage;
use crate::shared::reference_page::ReferenceListPage;
use crate::system::user_access::ui::list::UserAccessListPage;

/// Renders the content for a tab key. Unknown keys get a placeholder so
/// a stale URL never breaks the workspace.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_fund" => view! { <ReferenceListPage<Fund>/> }.into_any(),
        "a002_bank" => view! { <BankListPage/> }.into_any(),
        "a003_currency" => view! { <ReferenceListPage<Currency>/> }.into_any(),
        "a004_customer" => view! { <CustomerListPage/> }.into_any(),
        "a005_vendor" => view! { <VendorListPage/> }.into_any(),
        "a006_vendor_type" => view! { <ReferenceListPage<VendorType>/> }.into_any(),
        "a007_industry_type" => view! { <ReferenceListPage<IndustryType>/> }.into_any(),
        "a008_payment_terms" => view! { <ReferenceListPage<PaymentTerms>/> }.into_any(),
        "a009_payment_method" => view! { <ReferenceListPage<PaymentMethod>/> }.into_any(),
        "a010_region" => view! { <ReferenceListPage<Region>/> }.into_any(),
        "a011_province" => view! { <ProvinceListPage/> }.into_any(),
        "a012_municipality" => view! { <MunicipalityListPage/> }.into_any(),
        "a013_barangay" => view! { <BarangayListPage/> }.into_any(),
        "a014_document_detail" => view! { <DocumentDetailListPage/> }.into_any(),
        "a015_travel_order" => view! { <TravelOrderListPage/> }.into_any(),

        "p901_cashbook" => view! { <CashbookPage/> }.into_any(),
        "p902_general_journal" => view! { <GeneralJournalPage/> }.into_any(),
        "p903_trial_balance" => view! { <TrialBalancePage/> }.into_any(),
        "p904_subsidiary_ledger" => view! { <SubsidiaryLedgerPage/> }.into_any(),

        "sys_modules" => view! { <ReferenceListPage<SystemModule>/> }.into_any(),
        "sys_user_access" => view! { <UserAccessListPage/> }.into_any(),

        _ => {
            log!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    }
}
