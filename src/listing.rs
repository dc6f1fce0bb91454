use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// A bookable stay as shown on a listing card
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Whole currency units per night
    #[serde(default)]
    pub price_per_night: Option<u32>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub rating: Option<f32>,
    /// Photo references: local paths or URIs, in display order
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Listing {
    /// Text for fuzzy matching
    pub fn search_text(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(ref location) = self.location {
            parts.push(location.as_str());
        }
        parts.join(" ")
    }

    /// "$120 / night", or None when the price is unknown
    pub fn price_label(&self) -> Option<String> {
        self.price_per_night
            .map(|price| format!("{}{} / night", self.currency, price))
    }

    /// Make relative image paths relative to the listings file
    fn resolve_images(&mut self, base: &Path) {
        for image in &mut self.images {
            if is_remote(image) || Path::new(image.as_str()).is_absolute() {
                continue;
            }
            *image = base.join(image.as_str()).to_string_lossy().into_owned();
        }
    }
}

/// Whether an image reference points at the network rather than a file
pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Load listings from a JSON array.
///
/// A missing file yields no listings. Entries that fail to parse are skipped.
pub fn load_all(path: &Path) -> Result<Vec<Listing>> {
    if !path.exists() {
        tracing::info!("Listings file {} not found, starting empty", path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listings from {}", path.display()))?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse listings from {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let mut listings = Vec::with_capacity(raw.len());
    for (i, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Listing>(value) {
            Ok(mut listing) => {
                listing.resolve_images(base);
                listings.push(listing);
            }
            Err(e) => tracing::warn!("Skipping listing #{}: {}", i, e),
        }
    }

    Ok(listings)
}
