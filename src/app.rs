use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nucleo_matcher::{
    pattern::{CaseMatching, Normalization, Pattern},
    Matcher,
};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::carousel::CarouselState;
use crate::config::Config;
use crate::favorites::Favorites;
use crate::listing::Listing;
use crate::menu::{self, Activation, DropdownMenu, MenuItem, Role};
use crate::pointer::PointerHub;
use crate::router::{Route, Router, HOME_PATH};
use crate::session::{SessionError, SessionService, SessionStore};
use crate::ui::layout::GridLayout;
use crate::ui::listing_card::{CardHit, CardLayout};
use crate::user::UserProfile;

/// How long a notice stays in the status bar
const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Results of background work, drained on the UI loop
#[derive(Debug)]
pub enum AppEvent {
    LogoutFinished(Result<(), SessionError>),
}

/// What the main loop should do after handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown in the status bar
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    shown_at: Instant,
}

/// Application state
pub struct App {
    config: Config,
    /// All loaded listings
    listings: Vec<Listing>,
    /// One carousel per listing, same order as `listings`
    carousels: Vec<CarouselState>,
    /// Filtered listings (indices into `listings`)
    filtered: Vec<usize>,
    /// Selected position in `filtered`
    selected: usize,
    filter: String,
    filtering: bool,
    matcher: Matcher,
    favorites: Favorites,
    session: SessionStore,
    session_service: Arc<dyn SessionService>,
    router: Router,
    pointer: PointerHub,
    /// Profile menu, mounted while someone is signed in
    menu: Option<DropdownMenu>,
    notice: Option<Notice>,
    /// Listing index and card area from the last draw
    card_areas: Vec<(usize, Rect)>,
    grid: GridLayout,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(
        listings: Vec<Listing>,
        config: Config,
        favorites: Favorites,
        session_service: Arc<dyn SessionService>,
    ) -> Self {
        let filtered: Vec<usize> = (0..listings.len()).collect();
        let carousels = vec![CarouselState::new(); listings.len()];
        let session = SessionStore::signed_in(config.user.clone());
        let grid = config.grid_layout();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            config,
            listings,
            carousels,
            filtered,
            selected: 0,
            filter: String::new(),
            filtering: false,
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
            favorites,
            session,
            session_service,
            router: Router::default(),
            pointer: PointerHub::new(),
            menu: None,
            notice: None,
            card_areas: Vec::new(),
            grid,
            events_tx,
            events_rx,
        };
        app.sync_menu_mount();
        app
    }

    /// Indices of listings passing the filter, in display order
    pub fn visible(&self) -> &[usize] {
        &self.filtered
    }

    pub fn listing(&self, index: usize) -> &Listing {
        &self.listings[index]
    }

    pub fn carousel(&self, index: usize) -> CarouselState {
        self.carousels[index]
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn is_favorite(&self, index: usize) -> bool {
        self.favorites.is_favorite(&self.listings[index].id)
    }

    /// Selected position within the visible listings
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Index into all listings of the selected card
    pub fn selected_listing(&self) -> Option<usize> {
        self.filtered.get(self.selected).copied()
    }

    pub fn grid_layout(&self) -> &GridLayout {
        &self.grid
    }

    pub fn card_areas(&self) -> &[(usize, Rect)] {
        &self.card_areas
    }

    /// Record where cards were drawn, for mouse hit testing
    pub fn set_card_areas(&mut self, areas: Vec<(usize, Rect)>) {
        self.card_areas = areas;
    }

    fn select_listing(&mut self, index: usize) {
        if let Some(pos) = self.filtered.iter().position(|&i| i == index) {
            self.selected = pos;
        }
    }

    pub fn next_image(&mut self) {
        if let Some(i) = self.selected_listing() {
            self.carousels[i].next(self.listings[i].images.len());
        }
    }

    pub fn previous_image(&mut self) {
        if let Some(i) = self.selected_listing() {
            self.carousels[i].previous(self.listings[i].images.len());
        }
    }

    /// Jump to photo `image` of the selected listing; ignored when out of range
    pub fn jump_to_image(&mut self, image: usize) {
        let Some(i) = self.selected_listing() else {
            return;
        };
        let len = self.listings[i].images.len();
        if image < len {
            self.carousels[i].jump_to(image, len);
        }
    }

    /// Ask the favorites store to flip the flag for listing `index`
    pub fn toggle_favorite(&mut self, index: usize) {
        let id = self.listings[index].id.clone();
        match self.favorites.toggle(&id, self.session.is_signed_in()) {
            Ok(_) => {
                if let Err(e) = self.favorites.save() {
                    tracing::warn!("Failed to save favorites: {:#}", e);
                }
            }
            Err(e) => self.notify(NoticeLevel::Error, e.to_string()),
        }
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    pub fn start_filter(&mut self) {
        self.filtering = true;
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.filtering = false;
        self.update_filtered();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.update_filtered();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        if self.filter.is_empty() {
            self.filtering = false;
        }
        self.update_filtered();
    }

    fn update_filtered(&mut self) {
        if self.filter.is_empty() {
            self.filtered = (0..self.listings.len()).collect();
        } else {
            let pattern = Pattern::parse(&self.filter, CaseMatching::Ignore, Normalization::Smart);

            let mut scored: Vec<(usize, u32)> = self
                .listings
                .iter()
                .enumerate()
                .filter_map(|(i, listing)| {
                    let haystack = listing.search_text();
                    let mut buf = Vec::new();
                    let text = nucleo_matcher::Utf32Str::new(&haystack, &mut buf);
                    pattern
                        .score(text, &mut self.matcher)
                        .map(|score| (i, score))
                })
                .collect();

            scored.sort_by(|a, b| b.1.cmp(&a.1));
            self.filtered = scored.into_iter().map(|(i, _)| i).collect();
        }

        if self.selected >= self.filtered.len() {
            self.selected = 0;
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }

    fn current_role(&self) -> Role {
        self.session.user().map(|user| user.role).unwrap_or_default()
    }

    /// Entries for the signed-in user's role, resolved from the latest role
    pub fn menu_items(&self) -> &[MenuItem] {
        self.config.menus.items_for(self.current_role())
    }

    pub fn menu(&self) -> Option<&DropdownMenu> {
        self.menu.as_ref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(DropdownMenu::is_open)
    }

    pub fn toggle_menu(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.toggle();
        }
    }

    /// Mount the menu while signed in outside the login view, unmount otherwise
    fn sync_menu_mount(&mut self) {
        let wanted = self.session.is_signed_in() && self.router.route() != Route::Login;
        match (wanted, self.menu.is_some()) {
            (true, false) => {
                self.menu = Some(DropdownMenu::mount(&self.pointer));
                tracing::debug!(
                    "Profile menu mounted ({} pointer listeners)",
                    self.pointer.listener_count()
                );
            }
            (false, true) => {
                self.menu = None;
                tracing::debug!("Profile menu unmounted");
            }
            _ => {}
        }
    }

    fn activate_menu_entry(&mut self, index: usize) {
        let role = self.current_role();
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        let items = self.config.menus.items_for(role);

        match menu.activate(index, items, &mut self.router) {
            Some(Activation::LogoutRequested) => self.request_logout(),
            Some(Activation::Navigated(target)) => tracing::debug!("Menu item -> {}", target),
            None => {}
        }
    }

    /// Start the logout call in the background.
    ///
    /// The menu stays open until the result is drained.
    pub fn request_logout(&mut self) {
        tracing::info!("Logout requested");
        let service = Arc::clone(&self.session_service);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = service.logout().await;
            // Receiver lives as long as the app
            let _ = tx.send(AppEvent::LogoutFinished(result));
        });
    }

    fn on_logout_finished(&mut self, result: Result<(), SessionError>) {
        let Some(menu) = self.menu.as_mut() else {
            tracing::debug!("Logout finished after the menu was unmounted");
            return;
        };

        match menu.complete_logout(result, &mut self.session, &mut self.router) {
            Ok(()) => self.notify(NoticeLevel::Info, "Signed out"),
            Err(e) => self.notify(NoticeLevel::Error, format!("Could not sign out: {}", e)),
        }
        self.sync_menu_mount();
    }

    /// Sign back in as the configured user
    pub fn sign_in(&mut self) {
        self.session.sign_in(self.config.user.clone());
        self.router.replace(HOME_PATH);
        self.sync_menu_mount();
        let name = self.config.user.display_name().to_string();
        self.notify(NoticeLevel::Info, format!("Welcome back, {}", name));
    }

    /// Apply results of finished background work
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LogoutFinished(result) => self.on_logout_finished(result),
        }
    }

    /// Periodic housekeeping, once per loop iteration
    pub fn tick(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.shown_at.elapsed() >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Control {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Control::Quit;
        }

        if self.is_menu_open() {
            self.on_menu_key(key);
            return Control::Continue;
        }

        match self.router.route() {
            Route::Login => self.on_login_key(key),
            Route::Listings => self.on_listings_key(key),
            _ => self.on_page_key(key),
        }
    }

    fn on_menu_key(&mut self, key: KeyEvent) {
        let count = menu::entry_count(self.menu_items());
        let Some(menu) = self.menu.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => menu.close(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => menu.highlight_previous(count),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => menu.highlight_next(count),
            KeyCode::Enter => {
                let index = menu.highlighted();
                self.activate_menu_entry(index);
            }
            _ => {}
        }
    }

    fn on_login_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Enter => self.sign_in(),
            KeyCode::Esc | KeyCode::Char('q') => return Control::Quit,
            _ => {}
        }
        Control::Continue
    }

    fn on_page_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.router.back();
            }
            KeyCode::Char('m') => self.toggle_menu(),
            _ => {}
        }
        Control::Continue
    }

    fn on_listings_key(&mut self, key: KeyEvent) -> Control {
        let total = self.filtered.len();

        match key.code {
            KeyCode::Esc => {
                if self.filtering || !self.filter.is_empty() {
                    self.clear_filter();
                } else {
                    return Control::Quit;
                }
            }
            KeyCode::Up => self.selected = self.grid.move_up(self.selected),
            KeyCode::Down => self.selected = self.grid.move_down(self.selected, total),
            KeyCode::Left => self.selected = self.grid.move_left(self.selected),
            KeyCode::Right => self.selected = self.grid.move_right(self.selected, total),
            KeyCode::Tab => self.selected = self.grid.tab_next(self.selected, total),
            KeyCode::BackTab => self.selected = self.grid.tab_prev(self.selected, total),
            KeyCode::Enter if self.filtering => self.filtering = false,
            KeyCode::Backspace if self.filtering => self.pop_filter_char(),
            KeyCode::Char(c) if self.filtering => self.push_filter_char(c),
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Char('/') => self.start_filter(),
            KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Char('h') => self.previous_image(),
            KeyCode::Char('l') => self.next_image(),
            KeyCode::Char('f') => {
                if let Some(i) = self.selected_listing() {
                    self.toggle_favorite(i);
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let image = c as usize - '1' as usize;
                self.jump_to_image(image);
            }
            _ => {}
        }
        Control::Continue
    }

    /// Left mouse press at `position`
    pub fn on_pointer_down(&mut self, position: Position) {
        // Outside-press listeners see every press first
        self.pointer.dispatch(position);

        if let Some(menu) = self.menu.as_mut() {
            let boundary = menu.boundary();
            if boundary.trigger.contains(position) {
                menu.toggle();
                return;
            }
            if menu.is_open() && boundary.contains(position) {
                if let Some(index) = boundary.entry_at(position) {
                    self.activate_menu_entry(index);
                }
                return;
            }
        }

        if self.router.route() == Route::Listings {
            self.on_card_press(position);
        }
    }

    fn on_card_press(&mut self, position: Position) {
        let Some(&(index, area)) = self
            .card_areas
            .iter()
            .find(|(_, area)| area.contains(position))
        else {
            return;
        };
        let image_count = self.listings[index].images.len();
        let current = self.carousels[index].index();
        let Some(layout) = CardLayout::compute(area, image_count, current) else {
            return;
        };

        self.select_listing(index);
        match layout.hit(position) {
            CardHit::Previous => self.carousels[index].previous(image_count),
            CardHit::Next => self.carousels[index].next(image_count),
            CardHit::Dot(dot) => self.carousels[index].jump_to(dot, image_count),
            CardHit::Favorite => self.toggle_favorite(index),
            CardHit::Body => {}
        }
    }

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Notice ({:?}): {}", level, message);
        self.notice = Some(Notice {
            message,
            level,
            shown_at: Instant::now(),
        });
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::OfflineSessionService;
    use async_trait::async_trait;
    use crossterm::event::KeyEventKind;

    struct FailingSession;

    #[async_trait]
    impl SessionService for FailingSession {
        async fn logout(&self) -> Result<(), SessionError> {
            Err(SessionError::Rejected(reqwest::StatusCode::BAD_GATEWAY))
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::empty(), KeyEventKind::Press)
    }

    fn listing(id: &str, name: &str, images: usize) -> Listing {
        Listing {
            id: id.to_string(),
            name: name.to_string(),
            location: Some("Lisbon".to_string()),
            price_per_night: Some(100),
            currency: "$".to_string(),
            rating: None,
            images: (0..images).map(|i| format!("{}-{}.jpg", id, i)).collect(),
        }
    }

    fn create_app(service: Arc<dyn SessionService>) -> App {
        let mut config = Config::default();
        config.user = UserProfile::new("Rita", Role::Owner);
        App::new(
            vec![
                listing("loft", "Harbor Loft", 3),
                listing("cabin", "Pine Cabin", 1),
                listing("tent", "Dune Tent", 0),
            ],
            config,
            Favorites::with_path(None),
            service,
        )
    }

    impl App {
        /// Wait for the next background result and apply it
        async fn next_event(&mut self) {
            if let Some(event) = self.events_rx.recv().await {
                self.handle_event(event);
            }
        }
    }

    #[test]
    fn test_menu_mounted_when_signed_in() {
        let app = create_app(Arc::new(OfflineSessionService));
        assert!(app.menu().is_some());
        assert!(!app.is_menu_open());
        assert_eq!(app.pointer.listener_count(), 1);
    }

    #[test]
    fn test_menu_items_follow_role() {
        let app = create_app(Arc::new(OfflineSessionService));
        let labels: Vec<_> = app.menu_items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Profile", "Contact", "Help"]);
    }

    #[test]
    fn test_carousel_keys() {
        let mut app = create_app(Arc::new(OfflineSessionService));

        app.on_key(key(KeyCode::Char('l')));
        assert_eq!(app.carousel(0).index(), 1);
        app.on_key(key(KeyCode::Char('h')));
        app.on_key(key(KeyCode::Char('h')));
        assert_eq!(app.carousel(0).index(), 2);

        app.on_key(key(KeyCode::Char('1')));
        assert_eq!(app.carousel(0).index(), 0);

        // Out of range for three photos
        app.on_key(key(KeyCode::Char('7')));
        assert_eq!(app.carousel(0).index(), 0);
    }

    #[test]
    fn test_carousels_are_per_card() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        app.on_key(key(KeyCode::Char('l')));
        app.on_key(key(KeyCode::Right));
        app.on_key(key(KeyCode::Char('l')));

        assert_eq!(app.carousel(0).index(), 1);
        // Single photo: no-op
        assert_eq!(app.carousel(1).index(), 0);
    }

    #[test]
    fn test_favorite_toggle() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        app.on_key(key(KeyCode::Char('f')));
        assert!(app.is_favorite(0));
        app.on_key(key(KeyCode::Char('f')));
        assert!(!app.is_favorite(0));
    }

    #[test]
    fn test_favorite_rejected_when_signed_out() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        app.session.clear_session();

        app.toggle_favorite(0);
        assert!(!app.is_favorite(0));
        assert_eq!(app.notice().map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn test_menu_key_navigation() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        app.on_key(key(KeyCode::Char('m')));
        assert!(app.is_menu_open());

        // Profile, Contact -> Enter
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        assert!(!app.is_menu_open());
        assert_eq!(app.router().route(), Route::Contact);

        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.router().route(), Route::Listings);
    }

    #[test]
    fn test_esc_closes_menu_before_quitting() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        app.on_key(key(KeyCode::Char('m')));
        assert_eq!(app.on_key(key(KeyCode::Esc)), Control::Continue);
        assert!(!app.is_menu_open());
        assert_eq!(app.on_key(key(KeyCode::Esc)), Control::Quit);
    }

    #[test]
    fn test_pointer_outside_closes_menu() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        if let Some(menu) = app.menu() {
            menu.set_boundary(crate::menu::MenuBoundary {
                trigger: Rect::new(60, 1, 10, 1),
                panel: Some(Rect::new(55, 3, 15, 6)),
                entries: vec![Rect::new(56, 4, 13, 1)],
            });
        }

        app.on_pointer_down(Position::new(65, 1));
        assert!(app.is_menu_open());

        // Panel border: stays open
        app.on_pointer_down(Position::new(55, 3));
        assert!(app.is_menu_open());

        app.on_pointer_down(Position::new(2, 20));
        assert!(!app.is_menu_open());
    }

    #[test]
    fn test_pointer_on_entry_selects() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        if let Some(menu) = app.menu() {
            menu.set_boundary(crate::menu::MenuBoundary {
                trigger: Rect::new(60, 1, 10, 1),
                panel: Some(Rect::new(55, 3, 15, 6)),
                entries: vec![Rect::new(56, 4, 13, 1), Rect::new(56, 5, 13, 1)],
            });
        }
        app.toggle_menu();

        app.on_pointer_down(Position::new(60, 5));
        assert!(!app.is_menu_open());
        assert_eq!(app.router().route(), Route::Contact);
    }

    #[test]
    fn test_pointer_on_card_controls() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        let area = Rect::new(0, 3, 30, crate::ui::listing_card::CARD_HEIGHT);
        app.set_card_areas(vec![(0, area)]);
        let layout = CardLayout::compute(area, 3, 0).unwrap();

        let next = layout.next.unwrap();
        app.on_pointer_down(Position::new(next.x, next.y));
        assert_eq!(app.carousel(0).index(), 1);

        let dot = layout.dots[2];
        app.on_pointer_down(Position::new(dot.x, dot.y));
        assert_eq!(app.carousel(0).index(), 2);

        app.on_pointer_down(Position::new(layout.heart.x, layout.heart.y));
        assert!(app.is_favorite(0));
    }

    #[test]
    fn test_filter() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        app.on_key(key(KeyCode::Char('/')));
        for c in "pine".chars() {
            app.on_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.visible(), &[1]);
        assert_eq!(app.selected_listing(), Some(1));

        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.visible().len(), 3);
    }

    #[tokio::test]
    async fn test_logout_success() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        app.on_key(key(KeyCode::Char('m')));
        // Owner: Profile, Contact, Help, Log out
        app.on_key(key(KeyCode::Up));
        app.on_key(key(KeyCode::Enter));
        assert!(app.is_menu_open());

        app.next_event().await;

        assert!(!app.is_signed_in());
        assert_eq!(app.router().route(), Route::Login);
        assert!(app.menu().is_none());
        assert_eq!(app.pointer.listener_count(), 0);
        assert_eq!(app.notice().map(|n| n.level), Some(NoticeLevel::Info));

        // Signing back in remounts the menu
        app.on_key(key(KeyCode::Enter));
        assert!(app.is_signed_in());
        assert_eq!(app.router().route(), Route::Listings);
        assert_eq!(app.pointer.listener_count(), 1);
    }

    #[tokio::test]
    async fn test_second_logout_result_after_unmount_is_ignored() {
        let mut app = create_app(Arc::new(OfflineSessionService));
        app.on_key(key(KeyCode::Char('m')));
        app.on_key(key(KeyCode::Up));
        // Menu stays open while pending, so the entry can be chosen again
        app.on_key(key(KeyCode::Enter));
        app.on_key(key(KeyCode::Enter));

        app.next_event().await;
        assert!(app.menu().is_none());

        app.next_event().await;
        app.drain_events();

        assert!(!app.is_signed_in());
        assert_eq!(app.router().route(), Route::Login);
        assert_eq!(app.router().depth(), 1);
        assert!(app.menu().is_none());
        assert_eq!(app.pointer.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_logout_failure() {
        let mut app = create_app(Arc::new(FailingSession));
        app.on_key(key(KeyCode::Char('m')));
        app.on_key(key(KeyCode::Up));
        app.on_key(key(KeyCode::Enter));

        app.next_event().await;

        assert!(app.is_signed_in());
        assert!(app.is_menu_open());
        assert_eq!(app.router().route(), Route::Listings);
        assert_eq!(app.router().depth(), 1);
        assert_eq!(app.notice().map(|n| n.level), Some(NoticeLevel::Error));
    }
}
