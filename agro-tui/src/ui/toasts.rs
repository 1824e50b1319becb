//! Toast stack in the top-right corner, newest at the bottom.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use agro_core::toast::ToastPhase;

use crate::app::AppState;
use crate::theme;

const TOAST_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let mut y = area.y + 1;

    for toast in app.console.toasts().toasts() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        y += TOAST_HEIGHT;

        let mut style = theme::severity(toast.severity);
        if toast.phase == ToastPhase::Leaving {
            style = style.add_modifier(Modifier::DIM);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style);
        let line = Line::from(vec![
            Span::styled(format!("{} ", theme::severity_glyph(toast.severity)), style),
            Span::styled(toast.message.as_str(), theme::text()),
        ]);

        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(line).block(block), rect);
    }
}
