//! Keyboard input dispatch: overlays → drawer → global keys → view keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use agro_core::ViewId;

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ConfirmLogout => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.answer_logout(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.answer_logout(false),
                _ => {}
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. The open sidebar drawer owns the cursor keys.
    if app.console.nav().page().sidebar().open {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                app.move_nav_cursor(1);
                return;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.move_nav_cursor(-1);
                return;
            }
            KeyCode::Enter => {
                let view = app.cursor_view();
                app.go(view);
                app.console.nav_mut().toggle_sidebar();
                return;
            }
            KeyCode::Esc => {
                app.console.nav_mut().toggle_sidebar();
                return;
            }
            _ => {}
        }
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(view) = AppState::nav_items().get(index) {
                app.go(*view);
            }
            return;
        }
        KeyCode::Char('g') => {
            app.go(ViewId::Landing);
            return;
        }
        KeyCode::Left | KeyCode::Char('[') => {
            app.back();
            return;
        }
        KeyCode::Right | KeyCode::Char(']') => {
            app.forward();
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            let delta = if key.code == KeyCode::BackTab || key.modifiers.contains(KeyModifiers::SHIFT) {
                -1
            } else {
                1
            };
            if app.current_view() != ViewId::Landing {
                app.move_nav_cursor(delta);
            }
            let view = app.cursor_view();
            app.go(view);
            return;
        }
        KeyCode::Char('m') => {
            app.console.nav_mut().toggle_sidebar();
            return;
        }
        KeyCode::Char('L') => {
            app.overlay = Overlay::ConfirmLogout;
            return;
        }
        _ => {}
    }

    // 4. View-specific keys.
    match app.current_view() {
        ViewId::Landing => handle_landing_key(app, key),
        ViewId::Maintenance => handle_maintenance_key(app, key),
        _ => handle_scroll_key(app, key),
    }
}

fn handle_landing_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.go(ViewId::Dashboard),
        _ => handle_scroll_key(app, key),
    }
}

fn handle_maintenance_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_machine_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_machine_cursor(-1),
        KeyCode::Enter => {
            let index = app.machine_cursor;
            app.console.check_machine(index);
        }
        KeyCode::Char('d') => {
            app.console.run_diagnostics();
        }
        KeyCode::Esc => {
            app.console.cancel_diagnostics();
        }
        _ => {}
    }
}

fn handle_scroll_key(app: &mut AppState, key: KeyEvent) {
    let delta = match key.code {
        KeyCode::Char('j') | KeyCode::Down => 1,
        KeyCode::Char('k') | KeyCode::Up => -1,
        KeyCode::PageDown => 10,
        KeyCode::PageUp => -10,
        _ => return,
    };
    app.console.nav_mut().page_mut().scroll_views_by(delta);
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("1-5", "Dashboard, Inventory, Energy, Maintenance, By-products"),
        ("g", "Back to landing"),
        ("Tab / Shift+Tab", "Next / previous view"),
        ("← / [", "History back"),
        ("→ / ]", "History forward"),
        ("m", "Toggle sidebar drawer"),
        ("L", "Secure logout"),
        ("j / k", "Scroll view, or move selection"),
        ("Enter", "Enter console (landing) / check machine"),
        ("d", "Run diagnostics (maintenance)"),
        ("Esc", "Cancel diagnostics / close drawer"),
        ("?", "This help"),
    ]
}
