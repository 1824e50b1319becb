//! Energy systems: daily solar and grid draw.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Paragraph};

use agro_core::charts::{ChartFrame, ChartKey, ChartSpec};

use crate::app::AppState;
use crate::theme;
use crate::ui::render_chart_pending;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(chart) = app.console.nav().charts().get(ChartKey::Energy) else {
        return;
    };
    match chart.frame() {
        Some(frame) => render_bars(f, area, chart.spec(), frame),
        None => render_chart_pending(f, area),
    }
}

fn render_bars(f: &mut Frame, area: Rect, spec: &ChartSpec, frame: ChartFrame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Legend
    let mut legend: Vec<Span> = vec![Span::raw(" ")];
    for d in &spec.datasets {
        let color = d.colors.first().copied().map(theme::rgb).unwrap_or(theme::MUTED);
        legend.push(Span::styled("■ ", Style::default().fg(color)));
        legend.push(Span::styled(format!("{}   ", d.label), theme::muted()));
    }
    f.render_widget(Paragraph::new(Line::from(legend)), chunks[0]);

    let groups: Vec<BarGroup> = spec
        .labels
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let bars: Vec<Bar> = spec
                .datasets
                .iter()
                .filter_map(|d| {
                    let value = *d.data.get(i)?;
                    let color = d.colors.first().copied().map(theme::rgb).unwrap_or(theme::MUTED);
                    Some(
                        Bar::default()
                            .value(value as u64)
                            .style(Style::default().fg(color))
                            .value_style(Style::default().fg(theme::BACKGROUND).bg(color)),
                    )
                })
                .collect();
            BarGroup::default()
                .label(Line::from(day.as_str()))
                .bars(&bars)
        })
        .collect();

    let mut chart = BarChart::default()
        .block(Block::default().title(Span::styled(" Daily Energy Mix ", theme::text_bold())))
        .bar_width(4)
        .bar_gap(0)
        .group_gap(2)
        .max(frame.y_max as u64);
    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, chunks[1]);
}
