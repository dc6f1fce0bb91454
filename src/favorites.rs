//! Saved listings.
//!
//! The favorites store owns every favorite flag. Cards only read
//! `is_favorite` and send toggle requests here; a request can be rejected
//! (nobody signed in), in which case the heart simply does not change.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FavoriteError {
    #[error("sign in to save favorites")]
    SignInRequired,
}

/// Favorites file format
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesFile {
    version: u32,
    listings: BTreeSet<String>,
}

/// Favorite listing ids, optionally persisted to disk
pub struct Favorites {
    ids: BTreeSet<String>,
    path: Option<PathBuf>,
}

impl Favorites {
    /// Store persisted under the user data directory
    pub fn new() -> Self {
        Self::with_path(Some(Self::default_path()))
    }

    pub fn with_path(path: Option<PathBuf>) -> Self {
        Self {
            ids: BTreeSet::new(),
            path,
        }
    }

    fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("staydeck")
            .join("favorites.json")
    }

    /// Load favorites from disk
    pub fn load(&mut self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };
        if !path.exists() {
            tracing::debug!("No favorites file found, starting fresh");
            return Ok(());
        }

        let content = fs::read_to_string(path).context("Failed to read favorites file")?;
        let file: FavoritesFile =
            serde_json::from_str(&content).context("Failed to parse favorites file")?;

        self.ids = file.listings;
        tracing::info!("Loaded {} favorites", self.ids.len());
        Ok(())
    }

    /// Save favorites to disk
    pub fn save(&self) -> Result<()> {
        let Some(ref path) = self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create favorites directory")?;
        }

        let file = FavoritesFile {
            version: 1,
            listings: self.ids.clone(),
        };
        let content =
            serde_json::to_string_pretty(&file).context("Failed to serialize favorites")?;
        fs::write(path, content).context("Failed to write favorites file")?;

        tracing::debug!("Saved {} favorites", self.ids.len());
        Ok(())
    }

    pub fn is_favorite(&self, listing_id: &str) -> bool {
        self.ids.contains(listing_id)
    }

    /// Flip the flag for `listing_id`, returning the new value
    pub fn toggle(&mut self, listing_id: &str, signed_in: bool) -> Result<bool, FavoriteError> {
        if !signed_in {
            return Err(FavoriteError::SignInRequired);
        }

        let now_favorite = if self.ids.remove(listing_id) {
            false
        } else {
            self.ids.insert(listing_id.to_string());
            true
        };
        tracing::debug!("Favorite {} -> {}", listing_id, now_favorite);
        Ok(now_favorite)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for Favorites {
    fn default() -> Self {
        Self::new()
    }
}
