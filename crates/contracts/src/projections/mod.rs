pub mod p901_cashbook;
pub mod p902_general_journal;
pub mod p903_trial_balance;
pub mod p904_subsidiary_ledger;
