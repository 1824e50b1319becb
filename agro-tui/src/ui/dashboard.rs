//! Operations dashboard: KPI cards over the production chart.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use agro_core::charts::{ChartFrame, ChartKey, ChartSpec};
use agro_core::view_model::KpiCard;

use crate::app::AppState;
use crate::theme;
use crate::ui::render_chart_pending;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    render_kpis(f, chunks[0], &app.console.data().kpis);

    let Some(chart) = app.console.nav().charts().get(ChartKey::Production) else {
        return;
    };
    match chart.frame() {
        Some(frame) => render_production(f, chunks[1], chart.spec(), frame),
        None => render_chart_pending(f, chunks[1]),
    }
}

fn render_kpis(f: &mut Frame, area: Rect, kpis: &[KpiCard]) {
    if kpis.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, kpis.len() as u32); kpis.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, cell) in kpis.iter().zip(cells.iter()) {
        let arrow = if card.is_falling() { "↘" } else { "↗" };
        let lines = vec![
            Line::from(Span::styled(card.title.as_str(), theme::muted())),
            Line::from(Span::styled(card.value.as_str(), theme::text_bold())),
            Line::from(Span::styled(
                format!("{arrow} {}", card.trend),
                theme::trend(card.is_falling()),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted());
        f.render_widget(Paragraph::new(lines).block(block), *cell);
    }
}

fn render_production(f: &mut Frame, area: Rect, spec: &ChartSpec, frame: ChartFrame) {
    let series: Vec<Vec<(f64, f64)>> = spec
        .datasets
        .iter()
        .map(|d| d.data.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect())
        .collect();

    let datasets = spec
        .datasets
        .iter()
        .zip(series.iter())
        .map(|(d, points)| {
            let color = d.colors.first().copied().map(theme::rgb).unwrap_or(theme::MUTED);
            Dataset::default()
                .name(d.label.as_str())
                .marker(if d.dashed { symbols::Marker::Dot } else { symbols::Marker::Braille })
                .style(Style::default().fg(color))
                .graph_type(GraphType::Line)
                .data(points)
        })
        .collect();

    let x_max = spec.labels.len().saturating_sub(1) as f64;
    let x_labels = match (spec.labels.first(), spec.labels.last()) {
        (Some(first), Some(last)) => vec![
            Span::styled(first.as_str(), theme::muted()),
            Span::styled(last.as_str(), theme::muted()),
        ],
        _ => Vec::new(),
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(" Production vs Target (T/h) ", theme::text_bold())),
        )
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([frame.y_min, frame.y_max])
                .labels(vec![
                    Span::styled(format!("{:.0}", frame.y_min), theme::muted()),
                    Span::styled(format!("{:.0}", frame.y_max), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}
