use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::menu::RoleMenuConfig;
use crate::ui::layout::GridLayout;
use crate::ui::theme::{parse_hex_color, Theme};
use crate::user::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON array of listings
    pub listings_path: PathBuf,
    pub appearance: AppearanceConfig,
    pub layout: LayoutConfig,
    pub session: SessionConfig,
    /// User signed in at startup
    pub user: UserProfile,
    /// Per-role profile menu entries
    pub menus: RoleMenuConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset name
    pub theme: String,
    /// Hex color overriding the preset's accent
    pub accent: Option<String>,
    pub prompt: String,
    pub favorite_icon: String,
    pub unfavorite_icon: String,
    /// Draw listing photos when the terminal supports a graphics protocol
    pub images: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub columns: u16,
    pub visible_rows: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session server; logout is local-only when unset
    pub base_url: Option<String>,
    /// Bearer token sent with the logout request
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            listings_path: home.join(".config/staydeck/listings.json"),
            appearance: AppearanceConfig::default(),
            layout: LayoutConfig::default(),
            session: SessionConfig::default(),
            user: UserProfile::default(),
            menus: RoleMenuConfig::default(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "harbor".to_string(),
            accent: None,
            prompt: "❯ ".to_string(),
            favorite_icon: "♥".to_string(),
            unfavorite_icon: "♡".to_string(),
            images: true,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            visible_rows: 2,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let mut config: Self = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            let listings = config.listings_path.to_string_lossy().into_owned();
            config.listings_path = PathBuf::from(shellexpand::tilde(&listings).as_ref());
            Ok(config)
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Theme preset with the accent override applied
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using default", self.appearance.theme);
            Theme::default()
        });

        if let Some(ref accent) = self.appearance.accent {
            match parse_hex_color(accent) {
                Ok(color) => theme.accent = color,
                Err(e) => tracing::warn!("Ignoring accent '{}': {}", accent, e),
            }
        }
        theme
    }

    pub fn grid_layout(&self) -> GridLayout {
        GridLayout::new(self.layout.columns, self.layout.visible_rows)
    }
}
