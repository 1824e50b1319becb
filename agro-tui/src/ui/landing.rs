//! Landing page: full-width splash with no app chrome.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, scroll: u16) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("AccraAgro", theme::accent_bold())),
        Line::from(Span::styled(
            "Integrated agro-processing operations",
            theme::text(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Production, inventory, energy and maintenance in one console.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", theme::accent_bold()),
            Span::styled("Enter Console", theme::text()),
            Span::styled("    [?] ", theme::accent_bold()),
            Span::styled("Key bindings", theme::text()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted());

    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    f.render_widget(para, area);
}
