//! Menu destination pages and the login view

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::router::Route;
use crate::ui::theme::Theme;

/// Draw a page reached from the profile menu
pub(crate) fn draw_page(f: &mut Frame, app: &App, route: &Route, area: Rect, theme: &Theme) {
    let title = format!(" {} ", route.title());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(title)
        .style(Style::default().bg(theme.background));

    let text = Style::default().fg(theme.foreground);
    let dimmed = Style::default().fg(theme.dimmed);

    let lines = match route {
        Route::Profile => match app.user() {
            Some(user) => vec![
                Line::from(vec![
                    Span::styled("Name      ", dimmed),
                    Span::styled(user.display_name(), text),
                ]),
                Line::from(vec![
                    Span::styled("Role      ", dimmed),
                    Span::styled(user.role.tag(), text),
                ]),
                Line::from(vec![
                    Span::styled("Picture   ", dimmed),
                    Span::styled(user.profile_picture.as_deref().unwrap_or("-"), text),
                ]),
            ],
            None => vec![Line::styled("Not signed in", dimmed)],
        },
        Route::Other(path) => vec![Line::styled(format!("Nothing at {}", path), dimmed)],
        _ => {
            let heading = format!("{} ({})", route.title(), app.router().current_path());
            vec![Line::styled(heading, text)]
        }
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the login view shown after logout
pub(crate) fn draw_login(f: &mut Frame, app: &App, theme: &Theme) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Min(1),
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let name = app.config().user.display_name();
    let lines = vec![
        Line::styled(
            "Signed out",
            Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(format!("Enter: sign in as {}", name), Style::default().fg(theme.dimmed)),
    ];
    let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" staydeck ")
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(panel, centered_column(chunks[1], 40));

    super::draw_status_bar(f, app, chunks[3], " Enter: sign in | q: quit".to_string(), theme);
}

fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
