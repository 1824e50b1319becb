//! Bottom status bar: key hints and the current view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1-5:Views m:Menu ←/→:History L:Logout ?:Help q:Quit",
        theme::muted(),
    ));

    // Separator
    spans.push(Span::raw(" | "));

    spans.push(Span::styled(app.current_view().label(), theme::accent()));

    if app.console.diagnostics().is_disabled() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(app.console.diagnostics().label(), theme::warning()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
