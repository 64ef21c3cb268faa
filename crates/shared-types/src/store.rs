use serde::{Deserialize, Serialize};

use crate::menu::{ChildMenuItem, MenuItem};

/// `GET stores/{id}` response — the standard store detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDetail {
    pub store_name: String,
    #[serde(rename = "menuMemberResponseDTOList", default)]
    pub menus: Vec<MenuItem>,
}

/// `GET stores/child/{id}` response — the child store detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildStoreDetail {
    pub store_name: String,
    #[serde(rename = "menuChildResponseDTOList", default)]
    pub menus: Vec<ChildMenuItem>,
}

/// The two mutually exclusive shapes of a store's menu resource.
///
/// Exactly one variant exists per fetch, selected by the session role, so
/// the standard and child lists can never be populated at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreMenus {
    Standard(StoreDetail),
    Child(ChildStoreDetail),
}

impl StoreMenus {
    pub fn store_name(&self) -> &str {
        match self {
            StoreMenus::Standard(detail) => &detail.store_name,
            StoreMenus::Child(detail) => &detail.store_name,
        }
    }

    pub fn is_child(&self) -> bool {
        matches!(self, StoreMenus::Child(_))
    }

    pub fn len(&self) -> usize {
        match self {
            StoreMenus::Standard(detail) => detail.menus.len(),
            StoreMenus::Child(detail) => detail.menus.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Store row in list responses (owner store list, nearby stores).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub store_id: i64,
    pub store_name: String,
    #[serde(default)]
    pub store_address: Option<String>,
    #[serde(default)]
    pub store_open_time: Option<String>,
    /// Whether the store shares leftover meals outside booking hours.
    #[serde(default)]
    pub store_always_share: bool,
}
