//! Sustainability & circularity: where processing waste ends up.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Gauge};

use agro_core::charts::{ChartFrame, ChartKey, ChartSpec};

use crate::app::AppState;
use crate::theme;
use crate::ui::render_chart_pending;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(chart) = app.console.nav().charts().get(ChartKey::Byproducts) else {
        return;
    };
    match chart.frame() {
        Some(frame) => render_shares(f, area, chart.spec(), frame),
        None => render_chart_pending(f, area),
    }
}

/// One gauge per slice of the doughnut.
fn render_shares(f: &mut Frame, area: Rect, spec: &ChartSpec, frame: ChartFrame) {
    let Some(dataset) = spec.datasets.first() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); spec.labels.len()])
        .split(area);

    for (i, (label, row)) in spec.labels.iter().zip(rows.iter()).enumerate() {
        let value = dataset.data.get(i).copied().unwrap_or(0.0);
        let ratio = if frame.total > 0.0 {
            (value / frame.total).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let color = dataset.colors.get(i).copied().map(theme::rgb).unwrap_or(theme::MUTED);

        let gauge = Gauge::default()
            .block(Block::default().title(Span::styled(label.as_str(), theme::text())))
            .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
            .ratio(ratio)
            .label(format!("{value:.0}%"));
        f.render_widget(gauge, *row);
    }
}
