use serde::{Deserialize, Serialize};

/// Account role persisted by the login flow and consulted when choosing
/// between the standard and child variants of store resources.
///
/// - `Member` — general member / supporter. Default for unknown values.
/// - `Child` — child account; sees the child menu variant with favorites.
/// - `Owner` — store owner; manages stores and bookings.
/// - `Supporter` — sponsor account; browses like a member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Member,
    Child,
    Owner,
    Supporter,
}

impl Role {
    /// Parse the stored role string. Only the exact uppercase values written
    /// by the login flow are recognized; anything else, including other
    /// casings and the absent case, falls back to the standard member role.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "CHILD" => Role::Child,
            "OWNER" => Role::Owner,
            "SUPPORTER" => Role::Supporter,
            _ => Role::Member,
        }
    }

    /// Uppercase string as stored under the role key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "MEMBER",
            Role::Child => "CHILD",
            Role::Owner => "OWNER",
            Role::Supporter => "SUPPORTER",
        }
    }

    /// Child accounts read the child variant of store endpoints and see the
    /// child list view. Every other role takes the standard path.
    pub fn is_child(&self) -> bool {
        matches!(self, Role::Child)
    }
}

/// Lifecycle of a meal booking as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BookingState {
    #[default]
    Waiting,
    Approve,
    Reject,
}

impl BookingState {
    /// Parse a wire state string. Unknown values are treated as waiting.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "APPROVE" => BookingState::Approve,
            "REJECT" => BookingState::Reject,
            _ => BookingState::Waiting,
        }
    }

    /// Uppercase string used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingState::Waiting => "WAITING",
            BookingState::Approve => "APPROVE",
            BookingState::Reject => "REJECT",
        }
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self, BookingState::Waiting)
    }
}
