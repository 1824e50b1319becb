//! Top-level UI layout: sidebar, header, the visible view and status bar.

pub mod byproducts;
pub mod dashboard;
pub mod energy;
pub mod header;
pub mod inventory;
pub mod landing;
pub mod maintenance;
pub mod overlays;
pub mod sidebar;
pub mod status_bar;
pub mod toasts;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use agro_core::ViewId;
use agro_core::chrome::SidebarPosition;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    let page = app.console.nav().page();
    let config = app.console.config();

    // Content starts at the main offset; a docked sidebar fills the gap.
    let offset = config.px_to_cells(page.main_offset_px()).min(main_area.width);
    let content_area = Rect {
        x: main_area.x + offset,
        width: main_area.width - offset,
        ..main_area
    };
    draw_content(f, content_area, app);

    let sidebar = page.sidebar();
    let sidebar_width = config.px_to_cells(config.sidebar_width_px).min(main_area.width);
    let sidebar_area = Rect {
        width: sidebar_width,
        ..main_area
    };
    if sidebar.open {
        draw_drawer_backdrop(f, main_area, app);
        sidebar::render(f, sidebar_area, app, true);
    } else if sidebar.position == SidebarPosition::Docked && offset > 0 {
        sidebar::render(f, sidebar_area, app, false);
    }

    status_bar::render(f, status_area, app);
    toasts::render(f, main_area, app);

    // Draw overlays on top.
    match app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::ConfirmLogout => overlays::render_logout(f, main_area),
        Overlay::None => {}
    }
}

/// Header (when shown) over the visible view surface.
fn draw_content(f: &mut Frame, area: Rect, app: &AppState) {
    let page = app.console.nav().page();
    let header_rows = if page.header().visible { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_rows), Constraint::Min(0)])
        .split(area);

    if header_rows > 0 {
        header::render(f, chunks[0], app);
    }

    for view in page.visible_surfaces() {
        draw_surface(f, chunks[1], app, view);
    }
}

/// Draw one view surface with its border.
fn draw_surface(f: &mut Frame, area: Rect, app: &AppState, view: ViewId) {
    let page = app.console.nav().page();
    let active = page.surface(view).is_some_and(|s| s.active);
    let scroll = page.views_scroll().unwrap_or(0);

    if view == ViewId::Landing {
        landing::render(f, area, scroll);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::surface_border(active))
        .title(format!(" {} ", view.label()))
        .title_style(if active { theme::accent_bold() } else { theme::muted() });

    let inner = block.inner(area);
    f.render_widget(block, area);

    match view {
        ViewId::Dashboard => dashboard::render(f, inner, app),
        ViewId::Inventory => inventory::render(f, inner, app, scroll),
        ViewId::Energy => energy::render(f, inner, app),
        ViewId::Maintenance => maintenance::render(f, inner, app, scroll),
        ViewId::Byproducts => byproducts::render(f, inner, app),
        ViewId::Landing => {}
    }
}

/// Dim the content behind an open drawer while its overlay is raised.
fn draw_drawer_backdrop(f: &mut Frame, area: Rect, app: &AppState) {
    let raised = app
        .console
        .nav()
        .page()
        .overlay()
        .is_some_and(|o| o.displayed && o.opacity > 0.0);
    if raised {
        f.render_widget(Clear, area);
        f.render_widget(Block::default().style(Style::default().bg(theme::BACKGROUND)), area);
    }
}

/// Placeholder for a chart that has not been fitted to its container yet.
pub(crate) fn render_chart_pending(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Chart not sized yet.", theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
