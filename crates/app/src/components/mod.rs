pub mod store_menu;

pub use store_menu::StoreMenu;
