//! Inventory table with stock badges.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row, Table};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, scroll: u16) {
    let header = Row::new(vec!["Item", "Type", "Quantity", "Status", "Updated"])
        .style(theme::muted())
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .console
        .data()
        .inventory
        .iter()
        .skip(scroll as usize)
        .map(|row| {
            Row::new(vec![
                Cell::from(Span::styled(row.name.as_str(), theme::text_bold())),
                Cell::from(Span::styled(row.kind.as_str(), theme::muted())),
                Cell::from(Span::styled(row.quantity.as_str(), theme::text())),
                Cell::from(Span::styled(
                    format!("[{}]", row.status),
                    theme::badge(row.badge_class),
                )),
                Cell::from(Span::styled(row.last_updated.as_str(), theme::muted())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(15),
        Constraint::Percentage(20),
        Constraint::Percentage(15),
        Constraint::Percentage(20),
    ];

    f.render_widget(Table::new(rows, widths).header(header), area);
}
