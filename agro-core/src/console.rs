//! The assembled console: navigator plus its collaborators.

use std::time::Duration;

use crate::config::ConsoleConfig;
use crate::diagnostics::Diagnostics;
use crate::history::{History, HistoryStack};
use crate::navigator::Navigator;
use crate::page::{Page, PageModel};
use crate::toast::{Notifier, Severity, ToastCenter};
use crate::view::ViewId;
use crate::view_model::DashboardData;

pub const LOGOUT_PROMPT: &str = "Secure Logout: End Session?";
pub const LOGOUT_MESSAGE: &str = "Session Ended Securely";

/// Owns all console state. One instance per session.
#[derive(Debug)]
pub struct Console<P: Page = PageModel, H: History = HistoryStack> {
    nav: Navigator<P, H>,
    toasts: ToastCenter,
    diagnostics: Diagnostics,
    data: DashboardData,
    config: ConsoleConfig,
}

impl Console<PageModel, HistoryStack> {
    /// Console over a fresh page with every view and chart registered.
    pub fn new(config: ConsoleConfig, viewport_px: u32) -> Self {
        let nav = Navigator::standard(&config, viewport_px);
        Self::with_navigator(config, nav)
    }
}

impl<P: Page, H: History> Console<P, H> {
    pub fn with_navigator(config: ConsoleConfig, nav: Navigator<P, H>) -> Self {
        Self {
            nav,
            toasts: ToastCenter::new(&config),
            diagnostics: Diagnostics::new(&config),
            data: DashboardData::load(),
            config,
        }
    }

    /// Startup: land on the landing view regardless of any fragment.
    pub fn start(&mut self) {
        self.nav.navigate(ViewId::Landing.name());
        tracing::info!(
            kpis = self.data.kpis.len(),
            inventory = self.data.inventory.len(),
            machines = self.data.machines.len(),
            "AccraAgro System Initialized"
        );
    }

    /// Advance every timer to `now` (time since the console started).
    pub fn tick(&mut self, now: Duration) {
        self.nav.advance(now);
        self.toasts.advance(now);
        self.diagnostics.advance(now, &mut self.toasts);
    }

    pub fn navigate(&mut self, target: &str) {
        self.nav.navigate(target);
    }

    /// Ask `confirm` whether to end the session; on yes, return to landing.
    pub fn logout(&mut self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if !confirm(LOGOUT_PROMPT) {
            return false;
        }
        self.nav.navigate(ViewId::Landing.name());
        self.toasts.notify(LOGOUT_MESSAGE, Severity::Info);
        true
    }

    /// Trigger the action on a machine card.
    pub fn check_machine(&mut self, index: usize) -> bool {
        match self.data.machines.get(index) {
            Some(card) => {
                self.toasts.notify(&card.action_message, Severity::Info);
                true
            }
            None => false,
        }
    }

    pub fn run_diagnostics(&mut self) -> bool {
        self.diagnostics.start()
    }

    pub fn cancel_diagnostics(&mut self) -> bool {
        self.diagnostics.cancel()
    }

    pub fn notify(&mut self, message: &str, severity: Severity) {
        self.toasts.notify(message, severity);
    }

    pub fn nav(&self) -> &Navigator<P, H> {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut Navigator<P, H> {
        &mut self.nav
    }

    pub fn toasts(&self) -> &ToastCenter {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastCenter {
        &mut self.toasts
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console {
        let mut console = Console::new(ConsoleConfig::default(), 1280);
        console.start();
        console
    }

    #[test]
    fn start_lands_on_landing() {
        let console = console();
        let snap = console.nav().snapshot();
        assert_eq!(snap.current_view, ViewId::Landing);
        assert!(!snap.header_visible);
        assert_eq!(snap.fragment, None);
        assert_eq!(snap.visible_surfaces, vec![ViewId::Landing]);
    }

    #[test]
    fn declined_logout_keeps_view() {
        let mut console = console();
        console.navigate("energy");
        let mut asked = None;
        assert!(!console.logout(|prompt| {
            asked = Some(prompt.to_string());
            false
        }));
        assert_eq!(asked.as_deref(), Some(LOGOUT_PROMPT));
        assert_eq!(console.nav().current_view(), ViewId::Energy);
        assert!(console.toasts().is_empty());
    }

    #[test]
    fn confirmed_logout_returns_to_landing_with_toast() {
        let mut console = console();
        console.navigate("energy");
        assert!(console.logout(|_| true));
        assert_eq!(console.nav().current_view(), ViewId::Landing);
        let toast = console.toasts().toasts().next().unwrap();
        assert_eq!(toast.message, LOGOUT_MESSAGE);
        assert_eq!(toast.severity, Severity::Info);
    }

    #[test]
    fn machine_action_toasts_its_name() {
        let mut console = console();
        assert!(console.check_machine(1));
        assert!(!console.check_machine(99));
        let toast = console.toasts().toasts().next().unwrap();
        assert_eq!(toast.message, "Diagnostics initiated for Conveyor Belt 4");
    }

    #[test]
    fn tick_routes_diagnostics_into_toasts() {
        let mut console = console();
        assert!(console.run_diagnostics());
        console.tick(Duration::from_millis(800));
        let toast = console.toasts().toasts().last().unwrap();
        assert_eq!(toast.message, "Checking Sensor Grid...");
    }
}
