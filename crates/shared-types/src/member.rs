use serde::{Deserialize, Serialize};

/// `GET members/child` response — the signed-in child's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildProfile {
    pub child_name: String,
    #[serde(default)]
    pub child_email: Option<String>,
    /// Remaining meal support balance in won.
    pub support_balance: i64,
}
