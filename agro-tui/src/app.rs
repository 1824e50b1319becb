//! Application state: single-owner, main-thread only.
//!
//! Wraps the core [`Console`] with what only the terminal needs: overlays,
//! cursors and the clock that drives deferred work.

use std::time::{Duration, Instant};

use agro_core::{Console, ConsoleConfig, ViewId};

/// Base address shown in the location bar.
pub const LOCATION_BASE: &str = "agro://console";

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ConfirmLogout,
}

/// Top-level application state.
pub struct AppState {
    pub console: Console,
    pub overlay: Overlay,
    pub running: bool,
    /// Highlighted entry in the sidebar drawer.
    pub nav_cursor: usize,
    /// Selected machine card in the maintenance view.
    pub machine_cursor: usize,
    started: Instant,
}

impl AppState {
    /// Build and start the console for a terminal `width` cells wide.
    pub fn new(config: ConsoleConfig, width: u16) -> Self {
        let viewport_px = config.cells_to_px(width);
        let mut console = Console::new(config, viewport_px);
        console.start();
        Self {
            console,
            overlay: Overlay::None,
            running: true,
            nav_cursor: 0,
            machine_cursor: 0,
            started: Instant::now(),
        }
    }

    pub fn current_view(&self) -> ViewId {
        self.console.nav().current_view()
    }

    /// Time since startup, the clock for every console timer.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn tick(&mut self) {
        let now = self.elapsed();
        self.console.tick(now);
    }

    /// Record a new terminal width. Chrome is re-resolved on the next
    /// navigation, not here.
    pub fn resize(&mut self, width: u16) {
        let px = self.console.config().cells_to_px(width);
        self.console.nav_mut().page_mut().set_viewport_px(px);
    }

    pub fn go(&mut self, view: ViewId) {
        self.console.navigate(view.name());
        self.sync_nav_cursor();
    }

    pub fn back(&mut self) {
        if self.console.nav_mut().back() {
            self.sync_nav_cursor();
        }
    }

    pub fn forward(&mut self) {
        if self.console.nav_mut().forward() {
            self.sync_nav_cursor();
        }
    }

    /// Answer the logout prompt.
    pub fn answer_logout(&mut self, confirmed: bool) {
        self.overlay = Overlay::None;
        if self.console.logout(|_| confirmed) {
            self.sync_nav_cursor();
        }
    }

    pub fn nav_items() -> Vec<ViewId> {
        ViewId::nav_items().collect()
    }

    pub fn cursor_view(&self) -> ViewId {
        let items = Self::nav_items();
        items[self.nav_cursor.min(items.len() - 1)]
    }

    pub fn move_nav_cursor(&mut self, delta: isize) {
        let len = Self::nav_items().len() as isize;
        self.nav_cursor = (self.nav_cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn move_machine_cursor(&mut self, delta: isize) {
        let len = self.console.data().machines.len();
        if len == 0 {
            return;
        }
        self.machine_cursor =
            (self.machine_cursor as isize + delta).clamp(0, len as isize - 1) as usize;
    }

    fn sync_nav_cursor(&mut self) {
        let current = self.current_view();
        if let Some(i) = Self::nav_items().iter().position(|v| *v == current) {
            self.nav_cursor = i;
        }
    }

    pub fn location(&self) -> String {
        self.console.nav().history().location(LOCATION_BASE)
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
