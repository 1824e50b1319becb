//! Overlay widgets: logout confirmation and key help.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use agro_core::console::LOGOUT_PROMPT;

use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

/// Yes/no prompt shown before ending the session.
pub fn render_logout(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::warning())
        .title(" Logout ")
        .title_style(theme::warning());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(LOGOUT_PROMPT, theme::text_bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] ", theme::accent_bold()),
            Span::styled("Yes   ", theme::text()),
            Span::styled("[n] ", theme::negative()),
            Span::styled("No", theme::text()),
        ]),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Key binding reference.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Key Bindings ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = key_bindings_help()
        .into_iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {keys:<18}"), theme::accent()),
                Span::styled(action, theme::text()),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to dismiss...",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}
