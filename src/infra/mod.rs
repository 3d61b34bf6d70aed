pub mod cache;
pub mod countries;
