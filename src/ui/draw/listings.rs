//! Listings page drawing
//!
//! - Search bar
//! - Card grid
//! - Listing photos over the card image area (graphics terminals)

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui_image::{Resize, StatefulImage};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::images::ImageManager;
use crate::ui::layout::GridLayout;
use crate::ui::listing_card::{CardLayout, ListingCard, CARD_HEIGHT};
use crate::ui::theme::Theme;

/// Gap between columns
const COLUMN_GAP: u16 = 2;
/// Blank line between card rows
const ROW_GAP: u16 = 1;

fn column_width(inner_width: u16, grid: &GridLayout) -> u16 {
    let columns = grid.columns;
    if columns > 1 {
        inner_width.saturating_sub(COLUMN_GAP * (columns - 1)) / columns
    } else {
        inner_width
    }
}

/// Draw the search/filter bar
pub(crate) fn draw_search_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let prompt = &app.config().appearance.prompt;

    let text = if app.is_filtering() || !app.filter_text().is_empty() {
        format!("{}{}", prompt, app.filter_text())
    } else {
        format!("{}/ to filter listings...", prompt)
    };

    let style = if app.is_filtering() {
        Style::default().fg(theme.search_highlight).bg(theme.background)
    } else {
        Style::default().fg(theme.dimmed).bg(theme.background)
    };

    let search = Paragraph::new(text).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" staydeck ")
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(search, area);

    if app.is_filtering() {
        // +1 for the left border
        let cursor_x = area.x + 1 + prompt.width() as u16 + app.filter_text().width() as u16;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

/// Draw the visible page of listing cards.
///
/// Returns the listing index and area of every card drawn.
pub(crate) fn draw_grid(
    f: &mut Frame,
    app: &App,
    area: Rect,
    mut images: Option<&mut ImageManager>,
    theme: &Theme,
) -> Vec<(usize, Rect)> {
    let appearance = &app.config().appearance;
    let visible = app.visible();
    let selected = app.selected_index();
    let grid = app.grid_layout();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return Vec::new();
    }

    if visible.is_empty() {
        let message = if app.filter_text().is_empty() {
            "No listings yet"
        } else {
            "No listings match the filter"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(theme.dimmed_alt).bg(theme.background));
        f.render_widget(empty, inner);
        return Vec::new();
    }

    let range = grid.visible_range(selected, visible.len());
    let width = column_width(inner.width, grid);
    let graphics = images.as_ref().is_some_and(|m| m.supports_graphics());
    let mut drawn = Vec::new();

    for (local_idx, position) in range.enumerate() {
        let index = visible[position];
        let (row, col) = grid.index_to_position(local_idx);

        let card_area = Rect {
            x: inner.x + col * (width + COLUMN_GAP),
            y: inner.y + row * (CARD_HEIGHT + ROW_GAP),
            width,
            height: CARD_HEIGHT,
        };

        // Skip if card is outside visible area
        if card_area.bottom() > inner.bottom() {
            continue;
        }

        let listing = app.listing(index);
        let carousel = app.carousel(index);

        // Only local files with a graphics protocol get a photo
        let photo = match images.as_deref_mut() {
            Some(manager) if graphics => carousel
                .current(&listing.images)
                .and_then(|reference| manager.load(reference)),
            _ => None,
        };

        let card = ListingCard::new(listing, carousel, theme)
            .favorite(app.is_favorite(index))
            .selected(position == selected)
            .icons(&appearance.favorite_icon, &appearance.unfavorite_icon)
            .photo_drawn(photo.is_some());
        f.render_widget(card, card_area);

        let layout = CardLayout::compute(card_area, listing.images.len(), carousel.index());
        if let (Some(protocol), Some(layout)) = (photo, layout) {
            let image = StatefulImage::new(None).resize(Resize::Fit(None));
            let mut proto = protocol.lock();
            f.render_stateful_widget(image, layout.image, &mut *proto);
        }

        drawn.push((index, card_area));
    }

    drawn
}

/// Status line hints for the listings page
pub(crate) fn status_hints(app: &App) -> String {
    let total = app.visible().len();
    let grid = app.grid_layout();

    if app.is_filtering() || !app.filter_text().is_empty() {
        format!(" {} matches | Esc: clear | Enter: done", total)
    } else {
        let (page, pages) = grid.page_of(app.selected_index(), total);
        let position = if total == 0 { 0 } else { app.selected_index() + 1 };
        let mut status = format!(
            " {}/{} | Page {}/{} | ↑↓←→: nav | h/l: photos | f: favorite | m: menu | q: quit",
            position, total, page, pages
        );
        let favorites = app.favorites();
        if !favorites.is_empty() {
            let icon = &app.config().appearance.favorite_icon;
            status.push_str(&format!(" | {} {}", icon, favorites.len()));
        }
        status
    }
}
