//! Listing photo loading and display support.
//!
//! Supports:
//! - Kitty graphics protocol (kitty terminal)
//! - Sixel graphics (foot, mlterm, xterm)
//! - iTerm2 protocol (iTerm2, WezTerm)
//!
//! Only local files are drawn. Remote references and terminals without a
//! graphics protocol get the text rendering from the listing card.

use parking_lot::Mutex;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use crate::listing::is_remote;

/// Photo manager - decodes listing photos and caches protocols by reference.
/// Must be created before entering raw mode.
pub struct ImageManager {
    picker: Option<Picker>,
    cache: HashMap<String, Arc<Mutex<StatefulProtocol>>>,
    /// References that failed to load; not retried
    failed: HashSet<String>,
}

impl ImageManager {
    /// Query the terminal for a graphics protocol
    pub fn new() -> Self {
        let picker = match Picker::from_query_stdio() {
            Ok(p) => {
                tracing::info!("Graphics protocol detected: {:?}", p.protocol_type());
                Some(p)
            }
            Err(e) => {
                tracing::debug!("No graphics protocol available: {}", e);
                None
            }
        };

        Self {
            picker,
            cache: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    pub fn supports_graphics(&self) -> bool {
        self.picker.is_some()
    }

    /// Protocol for `reference`, decoding it on first use
    pub fn load(&mut self, reference: &str) -> Option<Arc<Mutex<StatefulProtocol>>> {
        if let Some(cached) = self.cache.get(reference) {
            return Some(cached.clone());
        }
        if is_remote(reference) || self.failed.contains(reference) {
            return None;
        }

        let picker = self.picker.as_mut()?;
        let dyn_img = match image::open(Path::new(reference)) {
            Ok(img) => img,
            Err(e) => {
                tracing::debug!("Failed to load photo {}: {}", reference, e);
                self.failed.insert(reference.to_string());
                return None;
            }
        };

        let protocol = Arc::new(Mutex::new(picker.new_resize_protocol(dyn_img)));
        self.cache.insert(reference.to_string(), protocol.clone());
        Some(protocol)
    }
}

impl Default for ImageManager {
    fn default() -> Self {
        Self::new()
    }
}
