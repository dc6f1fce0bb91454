//! Drawing functions for the TUI
//!
//! Split by view:
//! - `listings` - Listings page (search bar, card grid)
//! - `pages` - Menu destination pages and the login view
//!
//! The profile menu is drawn last so its panel overlays the page.

mod listings;
mod pages;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, NoticeLevel};
use crate::router::Route;
use crate::ui::dropdown::{draw_menu, trigger_width};
use crate::ui::images::ImageManager;
use crate::ui::theme::Theme;

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App, images: Option<&mut ImageManager>) {
    let theme = app.config().resolve_theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

    let route = app.router().route();
    if route == Route::Login {
        app.set_card_areas(Vec::new());
        pages::draw_login(f, app, &theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let trigger = app.user().map(trigger_width).unwrap_or(0).min(chunks[0].width / 2);
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(trigger)])
        .split(chunks[0]);

    let (cards, hints) = match route {
        Route::Listings => {
            listings::draw_search_bar(f, app, header[0], &theme);
            let cards = listings::draw_grid(f, app, chunks[1], images, &theme);
            (cards, listings::status_hints(app))
        }
        ref page => {
            draw_page_header(f, page, header[0], &theme);
            pages::draw_page(f, app, page, chunks[1], &theme);
            let hints = if app.router().depth() > 1 {
                " Esc: back | m: menu | q: quit"
            } else {
                " m: menu | q: quit"
            };
            (Vec::new(), hints.to_string())
        }
    };
    app.set_card_areas(cards);

    draw_status_bar(f, app, chunks[2], hints, &theme);

    if let (Some(menu), Some(user)) = (app.menu(), app.user()) {
        draw_menu(f, menu, user, app.menu_items(), header[1], &theme);
    }
}

fn draw_page_header(f: &mut Frame, route: &Route, area: Rect, theme: &Theme) {
    let header = Paragraph::new(format!("‹ {}", route.title()))
        .style(Style::default().fg(theme.foreground).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" staydeck ")
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(header, area);
}

/// Status line: the current notice if any, otherwise `hints`
pub(crate) fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, hints: String, theme: &Theme) {
    let (text, color) = match app.notice() {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => theme.notice_info,
                NoticeLevel::Error => theme.notice_error,
            };
            (format!(" {}", notice.message), color)
        }
        None => (hints, theme.dimmed),
    };

    let status_bar = Paragraph::new(text).style(Style::default().fg(color).bg(theme.background));
    f.render_widget(status_bar, area);
}
