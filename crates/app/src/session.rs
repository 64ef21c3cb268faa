use dioxus::prelude::*;
use shared_types::Role;

/// localStorage key written by the login flow.
pub const ROLE_STORAGE_KEY: &str = "role";

/// Session-wide state shared through context.
///
/// Holds the account role resolved at startup so no component has to reach
/// into browser storage at its call site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub role: Signal<Role>,
}

impl SessionState {
    /// Resolve the session from persisted browser state. Call once from the
    /// top-level component, inside `use_context_provider`.
    pub fn resolve() -> Self {
        Self {
            role: Signal::new(stored_role()),
        }
    }
}

/// Hook to access the session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// Read and parse the persisted role flag. Absent, unreadable, or
/// unrecognized values all fall back to the standard member role.
fn stored_role() -> Role {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ROLE_STORAGE_KEY).ok().flatten())
        .map(|value| Role::from_str_or_default(&value))
        .unwrap_or_default()
}
