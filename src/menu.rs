//! Role-aware profile menu.
//!
//! # State Machine
//!
//! ```text
//!            trigger                     trigger / outside press / item
//!   Closed ──────────▶ Open      Open ─────────────────────────────────▶ Closed
//!
//!   Open ── logout ──▶ Open (request pending) ── success ──▶ Closed + /login
//!                                              └─ failure ──▶ unchanged
//! ```
//!
//! The outside-press listener is registered on the pointer hub when the menu
//! is mounted and removed when the `DropdownMenu` is dropped.

use parking_lot::Mutex;
use ratatui::layout::{Position, Rect};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::pointer::{ListenerGuard, PointerHub};
use crate::router::{Router, LOGIN_PATH};
use crate::session::{SessionError, SessionStore};

pub const LOGOUT_LABEL: &str = "Log out";

/// User role, selecting which menu is shown.
///
/// Deserializes from any tag; unknown tags become `Client`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Client,
    Owner,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn from_tag(tag: &str) -> Self {
        let normalized: String = tag
            .trim()
            .chars()
            .map(|c| if c == '-' || c == ' ' { '_' } else { c.to_ascii_lowercase() })
            .collect();

        match normalized.as_str() {
            "client" | "guest" => Role::Client,
            "owner" | "property_owner" => Role::Owner,
            "admin" => Role::Admin,
            "super_admin" | "superadmin" => Role::SuperAdmin,
            other => {
                tracing::debug!("Unknown role tag '{}', using client menu", other);
                Role::Client
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        Role::from_tag(&tag)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.tag().to_string()
    }
}

/// A navigable menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    /// Router path
    pub target: String,
}

impl MenuItem {
    pub fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
        }
    }
}

/// Menu entries per role. Missing lists in the config keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleMenuConfig {
    pub client: Vec<MenuItem>,
    pub owner: Vec<MenuItem>,
    pub admin: Vec<MenuItem>,
    pub super_admin: Vec<MenuItem>,
}

impl Default for RoleMenuConfig {
    fn default() -> Self {
        Self {
            client: vec![
                MenuItem::new("Profile", "/profile"),
                MenuItem::new("My bookings", "/bookings"),
                MenuItem::new("Help", "/help"),
            ],
            owner: vec![
                MenuItem::new("Profile", "/profile"),
                MenuItem::new("Contact", "/contact"),
                MenuItem::new("Help", "/help"),
            ],
            admin: vec![
                MenuItem::new("Profile", "/profile"),
                MenuItem::new("Properties", "/properties"),
                MenuItem::new("Users", "/users"),
            ],
            super_admin: vec![
                MenuItem::new("Profile", "/profile"),
                MenuItem::new("Admins", "/admins"),
                MenuItem::new("Users", "/users"),
                MenuItem::new("Settings", "/settings"),
            ],
        }
    }
}

impl RoleMenuConfig {
    pub fn items_for(&self, role: Role) -> &[MenuItem] {
        match role {
            Role::Client => &self.client,
            Role::Owner => &self.owner,
            Role::Admin => &self.admin,
            Role::SuperAdmin => &self.super_admin,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Screen area the menu occupied on the last draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBoundary {
    pub trigger: Rect,
    /// Dropdown panel, only while open
    pub panel: Option<Rect>,
    /// One row per entry, logout last
    pub entries: Vec<Rect>,
}

impl MenuBoundary {
    pub fn contains(&self, position: Position) -> bool {
        self.trigger.contains(position) || self.panel.is_some_and(|panel| panel.contains(position))
    }

    pub fn entry_at(&self, position: Position) -> Option<usize> {
        self.entries.iter().position(|row| row.contains(position))
    }
}

/// What activating a menu entry asks the owner to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Menu closed and the router moved to the target
    Navigated(String),
    /// Logout entry chosen; the menu stays open until the call completes
    LogoutRequested,
}

#[derive(Debug, Default)]
struct Shared {
    state: MenuState,
    boundary: MenuBoundary,
}

/// A mounted profile menu instance
pub struct DropdownMenu {
    shared: Arc<Mutex<Shared>>,
    highlighted: usize,
    _listener: ListenerGuard,
}

impl DropdownMenu {
    /// Mount the menu: closed, with its outside-press listener registered
    pub fn mount(hub: &PointerHub) -> Self {
        let shared = Arc::new(Mutex::new(Shared::default()));

        let listener_shared = Arc::clone(&shared);
        let listener = hub.register(move |position| {
            let mut shared = listener_shared.lock();
            if shared.state == MenuState::Open && !shared.boundary.contains(position) {
                tracing::debug!("Pointer-down outside profile menu, closing");
                shared.state = MenuState::Closed;
            }
        });

        Self {
            shared,
            highlighted: 0,
            _listener: listener,
        }
    }

    pub fn state(&self) -> MenuState {
        self.shared.lock().state
    }

    pub fn is_open(&self) -> bool {
        self.state() == MenuState::Open
    }

    /// Trigger activation
    pub fn toggle(&mut self) {
        let mut shared = self.shared.lock();
        shared.state = shared.state.toggled();
        if shared.state == MenuState::Open {
            self.highlighted = 0;
        }
        tracing::debug!("Profile menu {:?}", shared.state);
    }

    pub fn close(&mut self) {
        self.shared.lock().state = MenuState::Closed;
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlight_next(&mut self, entry_count: usize) {
        if entry_count > 0 {
            self.highlighted = (self.highlighted + 1) % entry_count;
        }
    }

    pub fn highlight_previous(&mut self, entry_count: usize) {
        if entry_count > 0 {
            self.highlighted = (self.highlighted + entry_count - 1) % entry_count;
        }
    }

    /// Record where the menu was drawn; used for outside-press detection
    pub fn set_boundary(&self, boundary: MenuBoundary) {
        self.shared.lock().boundary = boundary;
    }

    pub fn boundary(&self) -> MenuBoundary {
        self.shared.lock().boundary.clone()
    }

    /// Close and navigate to the item's target
    pub fn select(&mut self, item: &MenuItem, router: &mut Router) {
        self.close();
        router.navigate(&item.target);
    }

    /// Activate entry `index` of `items` followed by the logout entry.
    ///
    /// Returns `None` for an index past the logout entry or while closed.
    pub fn activate(
        &mut self,
        index: usize,
        items: &[MenuItem],
        router: &mut Router,
    ) -> Option<Activation> {
        if !self.is_open() {
            return None;
        }
        match items.get(index) {
            Some(item) => {
                self.select(item, router);
                Some(Activation::Navigated(item.target.clone()))
            }
            None if index == items.len() => Some(Activation::LogoutRequested),
            None => None,
        }
    }

    /// Apply the outcome of a logout call.
    ///
    /// Success clears the session, closes the menu and replaces history with
    /// the login view. Failure changes nothing and is handed back for the
    /// caller to report.
    pub fn complete_logout(
        &mut self,
        result: Result<(), SessionError>,
        store: &mut SessionStore,
        router: &mut Router,
    ) -> Result<(), SessionError> {
        match result {
            Ok(()) => {
                store.clear_session();
                self.close();
                router.replace(LOGIN_PATH);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Logout failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Number of rows the open menu shows for `items` (logout included)
pub fn entry_count(items: &[MenuItem]) -> usize {
    items.len() + 1
}

#[cfg(test)]
mod tests;
