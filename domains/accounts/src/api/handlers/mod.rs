pub mod account;
pub mod categories;
