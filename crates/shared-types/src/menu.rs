use serde::{Deserialize, Serialize};

/// Menu row shown to members, supporters, and owners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub menu_id: i64,
    pub menu_name: String,
    pub menu_price: i64,
    /// Remaining stock for the day.
    pub menu_count: i64,
    pub menu_image: Option<String>,
    pub menu_image_name: Option<String>,
}

/// Menu row shown to child accounts, carrying the per-child favorite flag
/// instead of stock information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildMenuItem {
    pub menu_id: i64,
    pub menu_name: String,
    pub menu_price: i64,
    pub favorite_menu: bool,
    pub menu_image: Option<String>,
    pub menu_image_name: Option<String>,
}
