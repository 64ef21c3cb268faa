pub mod booking;
pub mod manage;
pub mod register;
pub mod store;
