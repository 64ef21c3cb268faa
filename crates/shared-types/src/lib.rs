pub mod booking;
pub mod member;
pub mod menu;
pub mod models;
pub mod requests;
pub mod store;

pub use booking::*;
pub use member::*;
pub use menu::*;
pub use models::*;
pub use requests::*;
pub use store::*;
