//! Listing card widget
//!
//! ```text
//!  Harbor Loft                      ♥
//!  Lisbon, Portugal
//!  ‹          harbor-1.jpg          ›
//!                 1/3
//!
//!
//!               ● ○ ○
//!  $120 / night                ★ 4.8
//! ```
//!
//! The card draws from state it is handed: the carousel position from the
//! card's `CarouselState`, the heart from the favorites store. Mouse hit
//! testing uses the same `CardLayout` the widget renders with.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;
use crate::carousel::{has_controls, CarouselState};
use crate::listing::Listing;

/// Lines per card
pub const CARD_HEIGHT: u16 = 9;
/// Narrowest card that still fits arrows around the image
const MIN_CARD_WIDTH: u16 = 12;

const PREV_ARROW: &str = "‹";
const NEXT_ARROW: &str = "›";
const DOT_ACTIVE: &str = "●";
const DOT_INACTIVE: &str = "○";
const PLACEHOLDER: &str = "⌂ No photos yet";

/// Where each part of a card lands inside its area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub title: Rect,
    pub heart: Rect,
    pub location: Rect,
    pub image: Rect,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    /// One cell per pagination dot that fits, in image order
    pub dots: Vec<Rect>,
    /// Image index of the first dot; the window follows the current image
    pub first_dot: usize,
    pub footer: Rect,
}

/// Part of a card under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardHit {
    Previous,
    Next,
    Dot(usize),
    Favorite,
    Body,
}

impl CardLayout {
    /// Returns None when the area is too small to draw a card
    pub fn compute(area: Rect, image_count: usize, current: usize) -> Option<Self> {
        if area.width < MIN_CARD_WIDTH || area.height < CARD_HEIGHT {
            return None;
        }

        let inner_x = area.x + 1;
        let inner_width = area.width - 2;
        let right = inner_x + inner_width - 1;

        let title = Rect::new(inner_x, area.y, inner_width - 2, 1);
        let heart = Rect::new(right, area.y, 1, 1);
        let location = Rect::new(inner_x, area.y + 1, inner_width, 1);

        let image_height = CARD_HEIGHT - 5;
        let image = Rect::new(inner_x + 2, area.y + 2, inner_width - 4, image_height);
        let arrow_y = image.y + image_height / 2;

        let dots_y = image.y + image_height;
        let (prev, next, dots, first_dot) = if has_controls(image_count) {
            let fitting = (inner_width as usize).div_ceil(2).min(image_count);
            let span = (fitting * 2 - 1) as u16;
            let start = inner_x + (inner_width - span) / 2;
            let dots = (0..fitting as u16)
                .map(|i| Rect::new(start + i * 2, dots_y, 1, 1))
                .collect();
            let first_dot = current
                .saturating_sub(fitting / 2)
                .min(image_count - fitting);
            (
                Some(Rect::new(inner_x, arrow_y, 1, 1)),
                Some(Rect::new(right, arrow_y, 1, 1)),
                dots,
                first_dot,
            )
        } else {
            (None, None, Vec::new(), 0)
        };

        Some(Self {
            title,
            heart,
            location,
            image,
            prev,
            next,
            dots,
            first_dot,
            footer: Rect::new(inner_x, dots_y + 1, inner_width, 1),
        })
    }

    pub fn hit(&self, position: Position) -> CardHit {
        if self.heart.contains(position) {
            return CardHit::Favorite;
        }
        if self.prev.is_some_and(|r| r.contains(position)) {
            return CardHit::Previous;
        }
        if self.next.is_some_and(|r| r.contains(position)) {
            return CardHit::Next;
        }
        match self.dots.iter().position(|r| r.contains(position)) {
            Some(i) => CardHit::Dot(self.first_dot + i),
            None => CardHit::Body,
        }
    }
}

/// Listing card widget
pub struct ListingCard<'a> {
    listing: &'a Listing,
    carousel: CarouselState,
    favorite: bool,
    selected: bool,
    theme: &'a Theme,
    favorite_icon: &'a str,
    unfavorite_icon: &'a str,
    /// A graphics protocol draws the photo over the image area
    photo_drawn: bool,
}

impl<'a> ListingCard<'a> {
    pub fn new(listing: &'a Listing, carousel: CarouselState, theme: &'a Theme) -> Self {
        Self {
            listing,
            carousel,
            favorite: false,
            selected: false,
            theme,
            favorite_icon: "♥",
            unfavorite_icon: "♡",
            photo_drawn: false,
        }
    }

    /// Owner-supplied favorite flag
    pub fn favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn icons(mut self, favorite: &'a str, unfavorite: &'a str) -> Self {
        self.favorite_icon = favorite;
        self.unfavorite_icon = unfavorite;
        self
    }

    pub fn photo_drawn(mut self, drawn: bool) -> Self {
        self.photo_drawn = drawn;
        self
    }
}

impl<'a> Widget for ListingCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let images = &self.listing.images;
        let current = self.carousel.index();
        let Some(layout) = CardLayout::compute(area, images.len(), current) else {
            return;
        };

        let bg = if self.selected { self.theme.selection_bg } else { self.theme.background };
        let fg = if self.selected { self.theme.selection_fg } else { self.theme.foreground };
        let base = Style::default().fg(fg).bg(bg);
        let dimmed = Style::default().fg(self.theme.dimmed).bg(bg);

        // Fill background
        buf.set_style(area, Style::default().bg(bg));

        // Title and heart
        let name_style = base.add_modifier(Modifier::BOLD);
        put(buf, layout.title, &self.listing.name, name_style);
        let (heart, heart_style) = if self.favorite {
            (self.favorite_icon, Style::default().fg(self.theme.favorite).bg(bg))
        } else {
            (self.unfavorite_icon, dimmed)
        };
        put(buf, layout.heart, heart, heart_style);

        if let Some(ref location) = self.listing.location {
            put(buf, layout.location, location, dimmed);
        }

        // Photo area
        match self.carousel.current(images) {
            None => {
                let style = Style::default().fg(self.theme.dimmed_alt).bg(bg);
                let mid = layout.image.y + layout.image.height / 2;
                centered(buf, layout.image, mid, PLACEHOLDER, style);
            }
            Some(reference) if !self.photo_drawn => {
                let mid = layout.image.y + layout.image.height / 2 - 1;
                centered(buf, layout.image, mid, file_label(reference), base);
                if has_controls(images.len()) {
                    let counter = format!("{}/{}", current + 1, images.len());
                    centered(buf, layout.image, mid + 1, &counter, dimmed);
                }
            }
            Some(_) => {}
        }

        // Arrows and pagination dots, only with more than one photo
        let arrow_style = Style::default().fg(self.theme.accent).bg(bg);
        if let Some(prev) = layout.prev {
            put(buf, prev, PREV_ARROW, arrow_style);
        }
        if let Some(next) = layout.next {
            put(buf, next, NEXT_ARROW, arrow_style);
        }
        for (i, dot) in layout.dots.iter().enumerate() {
            let (glyph, color) = if layout.first_dot + i == current {
                (DOT_ACTIVE, self.theme.indicator_active)
            } else {
                (DOT_INACTIVE, self.theme.indicator_inactive)
            };
            put(buf, *dot, glyph, Style::default().fg(color).bg(bg));
        }

        // Footer: price left, rating right
        if let Some(price) = self.listing.price_label() {
            put(buf, layout.footer, &price, base);
        }
        if let Some(rating) = self.listing.rating {
            let label = format!("★ {:.1}", rating);
            let width = label.width() as u16;
            if width < layout.footer.width {
                let x = layout.footer.right() - width;
                buf.set_string(x, layout.footer.y, label, dimmed);
            }
        }
    }
}

/// Write `text` into `area`'s first line, truncated to its width
fn put(buf: &mut Buffer, area: Rect, text: &str, style: Style) {
    buf.set_string(area.x, area.y, truncate(text, area.width as usize), style);
}

fn centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let text = truncate(text, area.width as usize);
    let offset = (area.width as usize).saturating_sub(text.width()) / 2;
    buf.set_string(area.x + offset as u16, y, text, style);
}

/// Last path segment of an image reference
fn file_label(reference: &str) -> &str {
    reference
        .trim_end_matches('/')
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(reference)
}

/// Truncate string to fit within max_width, adding ellipsis if needed
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "…".repeat(max_width);
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
