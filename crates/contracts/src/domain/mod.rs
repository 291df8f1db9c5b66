pub mod a001_fund;
pub mod a002_bank;
pub mod a003_currency;
pub mod a004_customer;
pub mod a005_vendor;
pub mod a006_vendor_type;
pub mod a007_industry_type;
pub mod a008_payment_terms;
pub mod a009_payment_method;
pub mod a010_region;
pub mod a011_province;
pub mod a012_municipality;
pub mod a013_barangay;
pub mod a014_document_detail;
pub mod a015_travel_order;
