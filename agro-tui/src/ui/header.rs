//! App header: view title and the current location.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use chrono::Local;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let header = app.console.nav().page().header();
    let title = header.title.as_deref().unwrap_or("");

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::muted());

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(title.to_string(), theme::text_bold()),
        Span::raw("  "),
        Span::styled(app.location(), theme::muted()),
    ];

    let clock = Local::now().format("%H:%M").to_string();
    let used: usize = spans.iter().map(|s| s.width()).sum();
    let pad = (area.width as usize).saturating_sub(used + clock.len() + 1);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(clock, theme::muted()));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
