//! Tests for the profile menu state machine

use async_trait::async_trait;

use super::*;
use crate::router::Route;
use crate::session::SessionService;
use crate::user::UserProfile;

fn owner_store() -> SessionStore {
    SessionStore::signed_in(UserProfile::new("Rita", Role::Owner))
}

/// Menu drawn with a trigger at (70,1) and two item rows plus logout below it
fn drawn_menu(hub: &PointerHub) -> DropdownMenu {
    let menu = DropdownMenu::mount(hub);
    menu.set_boundary(MenuBoundary {
        trigger: Rect::new(70, 1, 10, 1),
        panel: Some(Rect::new(62, 3, 18, 5)),
        entries: vec![
            Rect::new(63, 4, 16, 1),
            Rect::new(63, 5, 16, 1),
            Rect::new(63, 6, 16, 1),
        ],
    });
    menu
}

struct FailingSession;

#[async_trait]
impl SessionService for FailingSession {
    async fn logout(&self) -> Result<(), SessionError> {
        Err(SessionError::Rejected(reqwest::StatusCode::SERVICE_UNAVAILABLE))
    }
}

struct OkSession;

#[async_trait]
impl SessionService for OkSession {
    async fn logout(&self) -> Result<(), SessionError> {
        Ok(())
    }
}

#[test]
fn test_starts_closed() {
    let hub = PointerHub::new();
    let menu = DropdownMenu::mount(&hub);
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn test_trigger_toggles() {
    let hub = PointerHub::new();
    let mut menu = DropdownMenu::mount(&hub);

    menu.toggle();
    assert!(menu.is_open());
    menu.toggle();
    assert!(!menu.is_open());
}

#[test]
fn test_outside_press_closes() {
    let hub = PointerHub::new();
    let mut menu = drawn_menu(&hub);
    menu.toggle();

    hub.dispatch(Position::new(5, 20));
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn test_inside_press_keeps_open() {
    let hub = PointerHub::new();
    let mut menu = drawn_menu(&hub);
    menu.toggle();

    // Panel border, not an entry row
    hub.dispatch(Position::new(62, 3));
    assert!(menu.is_open());

    // Trigger itself; the owner toggles separately
    hub.dispatch(Position::new(72, 1));
    assert!(menu.is_open());
}

#[test]
fn test_outside_press_while_closed_is_ignored() {
    let hub = PointerHub::new();
    let menu = drawn_menu(&hub);
    hub.dispatch(Position::new(0, 0));
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn test_one_listener_per_mount() {
    let hub = PointerHub::new();
    let mut menu = DropdownMenu::mount(&hub);
    assert_eq!(hub.listener_count(), 1);

    for _ in 0..10 {
        menu.toggle();
    }
    assert_eq!(hub.listener_count(), 1);

    drop(menu);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_remount_cycles() {
    let hub = PointerHub::new();
    for _ in 0..5 {
        let mut menu = DropdownMenu::mount(&hub);
        menu.toggle();
        assert_eq!(hub.listener_count(), 1);
    }
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_two_instances_are_independent() {
    let hub = PointerHub::new();
    let mut first = drawn_menu(&hub);
    let second = drawn_menu(&hub);

    first.toggle();
    assert!(first.is_open());
    assert!(!second.is_open());
}

#[test]
fn test_entry_at() {
    let hub = PointerHub::new();
    let menu = drawn_menu(&hub);
    let boundary = menu.boundary();
    assert_eq!(boundary.entry_at(Position::new(65, 5)), Some(1));
    assert_eq!(boundary.entry_at(Position::new(65, 3)), None);
}

#[test]
fn test_select_item_closes_and_navigates() {
    let hub = PointerHub::new();
    let mut menu = DropdownMenu::mount(&hub);
    let mut router = Router::default();
    let config = RoleMenuConfig::default();
    let items = config.items_for(Role::Owner);

    menu.toggle();
    let activation = menu.activate(1, items, &mut router);

    assert_eq!(activation, Some(Activation::Navigated("/contact".to_string())));
    assert!(!menu.is_open());
    assert_eq!(router.route(), Route::Contact);
}

#[test]
fn test_activate_logout_keeps_open() {
    let hub = PointerHub::new();
    let mut menu = DropdownMenu::mount(&hub);
    let mut router = Router::default();
    let config = RoleMenuConfig::default();
    let items = config.items_for(Role::Owner);

    menu.toggle();
    let activation = menu.activate(items.len(), items, &mut router);
    assert_eq!(activation, Some(Activation::LogoutRequested));
    assert!(menu.is_open());
    assert_eq!(router.route(), Route::Listings);

    assert_eq!(menu.activate(items.len() + 1, items, &mut router), None);
}

#[test]
fn test_activate_while_closed() {
    let hub = PointerHub::new();
    let mut menu = DropdownMenu::mount(&hub);
    let mut router = Router::default();
    let items = RoleMenuConfig::default().owner;
    assert_eq!(menu.activate(0, &items, &mut router), None);
    assert_eq!(router.depth(), 1);
}

#[test]
fn test_highlight_wraps() {
    let hub = PointerHub::new();
    let mut menu = DropdownMenu::mount(&hub);
    menu.toggle();

    menu.highlight_previous(4);
    assert_eq!(menu.highlighted(), 3);
    menu.highlight_next(4);
    assert_eq!(menu.highlighted(), 0);
}

#[test]
fn test_reopen_resets_highlight() {
    let hub = PointerHub::new();
    let mut menu = DropdownMenu::mount(&hub);
    menu.toggle();
    menu.highlight_next(4);
    menu.toggle();
    menu.toggle();
    assert_eq!(menu.highlighted(), 0);
}

#[tokio::test]
async fn test_logout_success() {
    let hub = PointerHub::new();
    let mut menu = DropdownMenu::mount(&hub);
    let mut store = owner_store();
    let mut router = Router::default();
    router.navigate("/profile");
    menu.toggle();

    let result = OkSession.logout().await;
    assert!(menu.complete_logout(result, &mut store, &mut router).is_ok());

    assert!(!menu.is_open());
    assert!(!store.is_signed_in());
    assert_eq!(router.route(), Route::Login);
    assert!(!router.back());
}

#[tokio::test]
async fn test_logout_failure_changes_nothing() {
    let hub = PointerHub::new();
    let mut menu = DropdownMenu::mount(&hub);
    let mut store = owner_store();
    let mut router = Router::default();
    menu.toggle();

    let result = FailingSession.logout().await;
    assert!(menu.complete_logout(result, &mut store, &mut router).is_err());

    assert!(menu.is_open());
    assert!(store.is_signed_in());
    assert_eq!(router.route(), Route::Listings);
    assert_eq!(router.depth(), 1);
}

#[test]
fn test_owner_menu_entries() {
    let config = RoleMenuConfig::default();
    let labels: Vec<_> = config
        .items_for(Role::Owner)
        .iter()
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(labels, ["Profile", "Contact", "Help"]);

    for role in [Role::Client, Role::Admin, Role::SuperAdmin] {
        assert_ne!(config.items_for(role), config.items_for(Role::Owner));
    }
}

#[test]
fn test_role_tags() {
    assert_eq!(Role::from_tag("owner"), Role::Owner);
    assert_eq!(Role::from_tag("Super-Admin"), Role::SuperAdmin);
    assert_eq!(Role::from_tag("superadmin"), Role::SuperAdmin);
    assert_eq!(Role::from_tag("ADMIN"), Role::Admin);
    assert_eq!(Role::from_tag("housekeeping"), Role::Client);
    assert_eq!(Role::from_tag(""), Role::Client);
}

#[test]
fn test_role_menu_overrides() {
    let toml_str = r#"
        [[owner]]
        label = "Dashboard"
        target = "/dashboard"
    "#;
    let config: RoleMenuConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.owner, vec![MenuItem::new("Dashboard", "/dashboard")]);
    // Untouched roles keep their defaults
    assert_eq!(config.client, RoleMenuConfig::default().client);
}

#[test]
fn test_entry_count_includes_logout() {
    assert_eq!(entry_count(&RoleMenuConfig::default().owner), 4);
}
