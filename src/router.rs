//! In-app navigation between views.

/// Views the app knows how to draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Listings,
    Profile,
    Contact,
    Help,
    Bookings,
    Properties,
    Users,
    Admins,
    Settings,
    Login,
    /// Target configured in a menu that has no dedicated view
    Other(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/listings" => Route::Listings,
            "/profile" => Route::Profile,
            "/contact" => Route::Contact,
            "/help" => Route::Help,
            "/bookings" => Route::Bookings,
            "/properties" => Route::Properties,
            "/users" => Route::Users,
            "/admins" => Route::Admins,
            "/settings" => Route::Settings,
            "/login" => Route::Login,
            other => Route::Other(other.to_string()),
        }
    }

    /// Page title for the view
    pub fn title(&self) -> &str {
        match self {
            Route::Listings => "Listings",
            Route::Profile => "Profile",
            Route::Contact => "Contact",
            Route::Help => "Help",
            Route::Bookings => "My bookings",
            Route::Properties => "Properties",
            Route::Users => "Users",
            Route::Admins => "Admins",
            Route::Settings => "Settings",
            Route::Login => "Sign in",
            Route::Other(path) => path,
        }
    }
}

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/listings";

/// History stack of visited paths. Never empty.
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<String>,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
        }
    }

    pub fn current_path(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or(HOME_PATH)
    }

    pub fn route(&self) -> Route {
        Route::from_path(self.current_path())
    }

    /// Push `path` onto the history
    pub fn navigate(&mut self, path: &str) {
        if self.current_path() == path {
            return;
        }
        tracing::debug!("Navigate: {} -> {}", self.current_path(), path);
        self.history.push(path.to_string());
    }

    /// Replace the whole history with `path`, so back cannot return to
    /// anything visited before.
    pub fn replace(&mut self, path: &str) {
        tracing::debug!("Navigate (replace): {} -> {}", self.current_path(), path);
        self.history.clear();
        self.history.push(path.to_string());
    }

    /// Pop one entry. Returns false when already at the first entry.
    pub fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        true
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}
