//! Profile menu widget
//!
//! ```text
//!                        ┌──────────────┐
//!                        │ R  Rita    ▾ │   trigger
//!                        └──────────────┘
//!                     ┌─────────────────┐
//!                     │ Profile         │
//!                     │ Contact         │
//!                     │ Help            │
//!                     │ Log out         │
//!                     └─────────────────┘
//! ```

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::Theme;
use crate::menu::{DropdownMenu, MenuBoundary, MenuItem, LOGOUT_LABEL};
use crate::user::UserProfile;

const CARET: &str = "▾";
/// Longest name shown on the trigger
const MAX_NAME_WIDTH: usize = 16;

/// Width of the bordered trigger block for `user`
pub fn trigger_width(user: &UserProfile) -> u16 {
    let name = user.display_name().width().min(MAX_NAME_WIDTH);
    // border, avatar (3), gap, name, gap, caret, border
    (2 + 3 + 1 + name + 1 + 1 + 1) as u16
}

/// Where the trigger, panel and entry rows land on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    pub trigger: Rect,
    pub panel: Option<Rect>,
    pub entries: Vec<Rect>,
}

impl MenuLayout {
    /// `anchor` is the bordered trigger block; the panel hangs below it,
    /// right-aligned and clipped to `screen`.
    pub fn compute(anchor: Rect, labels: &[&str], open: bool, screen: Rect) -> Self {
        let trigger = anchor;
        if !open {
            return Self {
                trigger,
                panel: None,
                entries: Vec::new(),
            };
        }

        let widest = labels.iter().map(|l| l.width()).max().unwrap_or(0);
        let width = ((widest + 4) as u16).max(anchor.width).min(screen.width);
        let x = anchor.right().saturating_sub(width).max(screen.x);
        let y = anchor.bottom();
        let height = (labels.len() as u16 + 2).min(screen.bottom().saturating_sub(y));
        if height < 3 {
            return Self {
                trigger,
                panel: None,
                entries: Vec::new(),
            };
        }

        let panel = Rect::new(x, y, width, height);
        let rows = (height - 2) as usize;
        let entries = (0..labels.len().min(rows) as u16)
            .map(|i| Rect::new(x + 1, y + 1 + i, width - 2, 1))
            .collect();

        Self {
            trigger,
            panel: Some(panel),
            entries,
        }
    }

    pub fn boundary(&self) -> MenuBoundary {
        MenuBoundary {
            trigger: self.trigger,
            panel: self.panel,
            entries: self.entries.clone(),
        }
    }
}

/// Draw the trigger and, while open, the panel.
///
/// Records the drawn boundary on the menu for outside-press detection.
pub fn draw_menu(
    f: &mut Frame,
    menu: &DropdownMenu,
    user: &UserProfile,
    items: &[MenuItem],
    anchor: Rect,
    theme: &Theme,
) {
    let mut labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    labels.push(LOGOUT_LABEL);

    let layout = MenuLayout::compute(anchor, &labels, menu.is_open(), f.area());
    let buf = f.buffer_mut();

    draw_trigger(buf, layout.trigger, user, menu.is_open(), theme);

    if let Some(panel) = layout.panel {
        Clear.render(panel, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.background))
            .render(panel, buf);

        for (i, (row, label)) in layout.entries.iter().zip(&labels).enumerate() {
            let highlighted = i == menu.highlighted();
            let mut style = if highlighted {
                Style::default().fg(theme.selection_fg).bg(theme.selection_bg)
            } else {
                Style::default().fg(theme.foreground).bg(theme.background)
            };
            if *label == LOGOUT_LABEL {
                style = style.fg(theme.notice_error);
            }
            buf.set_style(*row, style);
            buf.set_stringn(row.x + 1, row.y, label, row.width.saturating_sub(1) as usize, style);
        }
    }

    menu.set_boundary(layout.boundary());
}

fn draw_trigger(
    buf: &mut ratatui::buffer::Buffer,
    area: Rect,
    user: &UserProfile,
    open: bool,
    theme: &Theme,
) {
    let border = if open { theme.accent } else { theme.dimmed_alt };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width < 3 || inner.height == 0 {
        return;
    }

    let avatar = Style::default()
        .fg(theme.background)
        .bg(theme.accent)
        .add_modifier(Modifier::BOLD);
    buf.set_string(inner.x, inner.y, format!(" {} ", user.initial()), avatar);

    let text = Style::default().fg(theme.foreground).bg(theme.background);
    let name_width = (inner.width as usize).saturating_sub(3 + 1 + 2);
    buf.set_stringn(
        inner.x + 4,
        inner.y,
        user.display_name(),
        name_width.min(MAX_NAME_WIDTH),
        text,
    );
    let caret = Style::default().fg(theme.dimmed).bg(theme.background);
    buf.set_string(inner.right() - 1, inner.y, CARET, caret);
}
