pub mod catalog;
pub mod ledger;
pub mod order_service;
pub mod store;

pub use store::Store;
