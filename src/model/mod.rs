pub mod command;
pub mod ledger;
pub mod session;
