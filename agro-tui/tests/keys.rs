//! Property tests for keyboard handling.
//!
//! Arbitrary key sequences must always leave:
//! 1. the drawer and machine cursors in range
//! 2. exactly one visible surface, matching the current view
//! 3. the header shown iff the current view is not landing

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;

use agro_core::{ConsoleConfig, ViewId};
use agro_tui::app::AppState;
use agro_tui::handle_key;

fn arb_key() -> impl Strategy<Value = KeyEvent> {
    let codes = vec![
        KeyCode::Char('1'),
        KeyCode::Char('2'),
        KeyCode::Char('3'),
        KeyCode::Char('4'),
        KeyCode::Char('5'),
        KeyCode::Char('g'),
        KeyCode::Char('j'),
        KeyCode::Char('k'),
        KeyCode::Char('m'),
        KeyCode::Char('d'),
        KeyCode::Char('L'),
        KeyCode::Char('y'),
        KeyCode::Char('n'),
        KeyCode::Char('?'),
        KeyCode::Char('['),
        KeyCode::Char(']'),
        KeyCode::Enter,
        KeyCode::Esc,
        KeyCode::Tab,
        KeyCode::BackTab,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::PageDown,
    ];
    proptest::sample::select(codes).prop_map(|code| KeyEvent::new(code, KeyModifiers::NONE))
}

proptest! {
    #[test]
    fn key_sequences_keep_state_consistent(
        keys in proptest::collection::vec(arb_key(), 1..60),
        width in 40u16..200,
    ) {
        let mut app = AppState::new(ConsoleConfig::default(), width);
        let machines = app.console.data().machines.len();

        for key in keys {
            handle_key(&mut app, key);
            prop_assert!(app.running);

            prop_assert!(app.nav_cursor < AppState::nav_items().len());
            prop_assert!(app.machine_cursor < machines);
            prop_assert!(AppState::nav_items().contains(&app.cursor_view()));

            let page = app.console.nav().page();
            let current = app.current_view();
            prop_assert_eq!(page.visible_surfaces(), vec![current]);
            prop_assert_eq!(page.header().visible, current != ViewId::Landing);
        }
    }
}
