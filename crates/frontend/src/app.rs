use contracts::domain::a001_fund::Fund;
use contracts::domain::a002_bank::Bank;
use contracts::domain::a003_currency::Currency;
use contracts::domain::a004_customer::Customer;
use contracts::domain::a005_vendor::Vendor;
use contracts::domain::a006_vendor_type::VendorType;
use contracts::domain::a007_industry_type::IndustryType;
use contracts::domain::a008_payment_terms::PaymentTerms;
use contracts::domain::a009_payment_method::PaymentMethod;
use contracts::domain::a010_region::Region;
use contracts::domain::a011_province::Province;
use contracts::domain::a012_municipality::Municipality;
use contracts::domain::a013_barangay::Barangay;
use contracts::domain::a014_document_detail::DocumentDetail;
use contracts::domain::a015_travel_order::TravelOrder;
use contracts::system::module::SystemModule;
use contracts::system::user_access::UserAccess;
use leptos::prelude::*;

use crate::app_shell::MainLayout;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::theme::ThemeProvider;
use crate::shared::store::ResourceStore;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());

    // One store per REST collection; pages look them up via context.
    ResourceStore::<Fund>::provide();
    ResourceStore::<Bank>::provide();
    ResourceStore::<Currency>::provide();
    ResourceStore::<Customer>::provide();
    ResourceStore::<Vendor>::provide();
    ResourceStore::<VendorType>::provide();
    ResourceStore::<IndustryType>::provide();
    ResourceStore::<PaymentTerms>::provide();
    ResourceStore::<PaymentMethod>::provide();
    ResourceStore::<Region>::provide();
    ResourceStore::<Province>::provide();
    ResourceStore::<Municipality>::provide();
    ResourceStore::<Barangay>::provide();
    ResourceStore::<DocumentDetail>::provide();
    ResourceStore::<TravelOrder>::provide();
    ResourceStore::<SystemModule>::provide();
    ResourceStore::<UserAccess>::provide();

    view! {
        <ThemeProvider>
            <MainLayout />
            <ModalHost />
        </ThemeProvider>
    }
}
