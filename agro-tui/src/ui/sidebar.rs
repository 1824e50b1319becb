//! Sidebar navigation: docked column on wide terminals, drawer otherwise.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::AppState;
use crate::theme;

/// Draw the sidebar. The drawer shows the selection cursor.
pub fn render(f: &mut Frame, area: Rect, app: &AppState, drawer: bool) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(if drawer { theme::accent() } else { theme::muted() });

    let page = app.console.nav().page();
    let mut lines = vec![
        Line::from(Span::styled(" AccraAgro", theme::accent_bold())),
        Line::from(Span::styled(" Operations Console", theme::muted())),
        Line::from(""),
    ];

    for (i, view) in AppState::nav_items().into_iter().enumerate() {
        let active = page.nav_active(view);
        let cursor = drawer && i == app.nav_cursor;
        let marker = if active { "▌" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(format!("{} {}", i + 1, view.label()), theme::nav_item(active, cursor)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" L  Secure Logout", theme::muted())));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
