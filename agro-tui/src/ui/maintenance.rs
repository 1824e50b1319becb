//! Machine maintenance: machine cards and the diagnostics control.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::theme;

const CARD_HEIGHT: u16 = 5;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, scroll: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_diagnostics_control(f, chunks[0], app);
    render_cards(f, chunks[1], app, scroll);
}

fn render_diagnostics_control(f: &mut Frame, area: Rect, app: &AppState) {
    let diagnostics = app.console.diagnostics();
    let (style, hint) = if diagnostics.is_disabled() {
        (theme::muted(), "  [Esc] cancel")
    } else {
        (theme::accent_bold(), "  [d] run")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);
    let line = Line::from(vec![
        Span::styled(diagnostics.label(), style),
        Span::styled(hint, theme::muted()),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_cards(f: &mut Frame, area: Rect, app: &AppState, scroll: u16) {
    let machines = &app.console.data().machines;
    let visible = (area.height / CARD_HEIGHT) as usize;
    let start = window_start(scroll as usize, app.machine_cursor, visible, machines.len());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible])
        .split(area);

    for (offset, (card, row)) in machines[start..].iter().zip(rows.iter()).enumerate() {
        let selected = start + offset == app.machine_cursor;
        let border = if selected { theme::accent() } else { theme::muted() };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Line::from(vec![
                Span::styled(" ● ", theme::machine_status(card.status_class)),
                Span::styled(format!("{} ", card.name), theme::text_bold()),
            ]));

        let action_style = if selected {
            theme::accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        let lines = vec![
            Line::from(Span::styled(
                card.status_text.as_str(),
                theme::machine_status(card.status_class),
            )),
            Line::from(Span::styled(card.detail.as_str(), theme::text())),
            Line::from(Span::styled(format!("[ {} ]", card.action_label), action_style)),
        ];
        f.render_widget(Paragraph::new(lines).block(block), *row);
    }
}

/// First card to draw: the scroll offset, moved just enough to keep the
/// selected card inside the `visible` rows.
fn window_start(scroll: usize, cursor: usize, visible: usize, len: usize) -> usize {
    let mut start = scroll.min(len.saturating_sub(1));
    if visible == 0 {
        return start;
    }
    if cursor < start {
        start = cursor;
    } else if cursor >= start + visible {
        start = cursor + 1 - visible;
    }
    start.min(len)
}
