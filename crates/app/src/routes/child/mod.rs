pub mod main;
pub mod store_detail;
pub mod user;
