//! Single source of truth for tab titles.
//!
//! Reference entities take their plural `list_name` from contracts;
//! report and system pages are named here.

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
use contracts::shared::Resource;
use contracts::system::module::SystemModule;
use contracts::system::user_access::UserAccess;

/// Readable tab title for a key. Falls back to the empty string for
/// unknown keys; callers substitute the key itself then.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_fund" => Fund::list_name(),
        "a002_bank" => Bank::list_name(),
        "a003_currency" => Currency::list_name(),
        "a004_customer" => Customer::list_name(),
        "a005_vendor" => Vendor::list_name(),
        "a006_vendor_type" => VendorType::list_name(),
        "a007_industry_type" => IndustryType::list_name(),
        "a008_payment_terms" => PaymentTerms::list_name(),
        "a009_payment_method" => PaymentMethod::list_name(),
        "a010_region" => Region::list_name(),
        "a011_province" => Province::list_name(),
        "a012_municipality" => Municipality::list_name(),
        "a013_barangay" => Barangay::list_name(),
        "a014_document_detail" => DocumentDetail::list_name(),
        "a015_travel_order" => TravelOrder::list_name(),

        "p901_cashbook" => "Cashbook",
        "p902_general_journal" => "General Journal",
        "p903_trial_balance" => "Trial Balance",
        "p904_subsidiary_ledger" => "Subsidiary Ledger",

        "sys_modules" => SystemModule::list_name(),
        "sys_user_access" => UserAccess::list_name(),

        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_have_labels() {
        for key in [
            "a001_fund",
            "a009_payment_method",
            "a015_travel_order",
            "p901_cashbook",
            "p904_subsidiary_ledger",
            "sys_modules",
            "sys_user_access",
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "no label for {}", key);
        }
    }

    #[test]
    fn unknown_key_yields_empty() {
        assert_eq!(tab_label_for_key("a999_unknown"), "");
    }
}
