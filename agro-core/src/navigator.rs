//! View navigation controller.
//!
//! Owns the current view and drives every side effect of switching views:
//! sidebar highlight, surface visibility, scroll reset, chrome layout, header
//! title, history fragment and chart resizing.

use std::time::Duration;

use serde::Serialize;

use crate::charts::ChartBoard;
use crate::chrome::{ChromeLayout, ChromeState, LayoutPolicy};
use crate::config::ConsoleConfig;
use crate::error::NavError;
use crate::history::{History, HistoryStack};
use crate::page::{Page, PageModel};
use crate::scheduler::Scheduler;
use crate::view::{ViewId, ViewRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavTimer {
    /// Apply active styling once the surface has been displayed.
    Activate(ViewId),
    RaiseOverlay,
    HideOverlay,
}

/// Serializable view of navigation state, for the CLI and for assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSnapshot {
    pub current_view: ViewId,
    pub fragment: Option<String>,
    pub chrome: ChromeState,
    pub header_visible: bool,
    pub title: Option<String>,
    pub visible_surfaces: Vec<ViewId>,
    pub active_nav_item: Option<ViewId>,
}

/// The navigation controller.
///
/// Constructed once per console and handed to event handlers by `&mut`.
#[derive(Debug)]
pub struct Navigator<P: Page = PageModel, H: History = HistoryStack> {
    current_view: ViewId,
    registry: ViewRegistry,
    page: P,
    history: H,
    charts: ChartBoard,
    policy: LayoutPolicy,
    timers: Scheduler<NavTimer>,
    activate_delay: Duration,
    overlay_fade: Duration,
}

impl Navigator<PageModel, HistoryStack> {
    /// Navigator over a fresh page with every view and chart registered.
    pub fn standard(config: &ConsoleConfig, viewport_px: u32) -> Self {
        let registry = ViewRegistry::standard();
        let page = PageModel::new(&registry, viewport_px);
        Self::new(config, registry, page, HistoryStack::new(), ChartBoard::standard())
    }
}

impl<P: Page, H: History> Navigator<P, H> {
    pub fn new(
        config: &ConsoleConfig,
        registry: ViewRegistry,
        page: P,
        history: H,
        charts: ChartBoard,
    ) -> Self {
        Self {
            current_view: ViewId::Landing,
            registry,
            page,
            history,
            charts,
            policy: LayoutPolicy::from_config(config),
            timers: Scheduler::new(),
            activate_delay: config.activate_delay(),
            overlay_fade: config.overlay_fade(),
        }
    }

    /// Navigate to a view by name, logging and ignoring failures.
    pub fn navigate(&mut self, target: &str) {
        let result = target
            .parse::<ViewId>()
            .and_then(|view| self.navigate_to(view));
        if let Err(err) = result {
            tracing::error!(view = target, "{err}");
        }
    }

    /// Navigate to `target`.
    ///
    /// Fails before touching anything when `target` has no registered
    /// surface.
    pub fn navigate_to(&mut self, target: ViewId) -> Result<(), NavError> {
        if !self.registry.contains(target) {
            return Err(NavError::MissingSurface(target));
        }

        for view in ViewId::nav_items() {
            self.page.set_nav_active(view, view == target);
        }

        for view in self.registry.views() {
            self.page.set_surface_visible(view, false);
        }
        self.page.set_surface_visible(target, true);
        self.timers.retain(|t| !matches!(t, NavTimer::Activate(_)));
        self.timers.schedule(self.activate_delay, NavTimer::Activate(target));

        if !self.page.reset_views_scroll() {
            tracing::debug!("views container missing; scroll reset skipped");
        }

        let layout = self.policy.resolve(target, self.page.viewport_px());
        self.page.apply_chrome(&layout);

        if let Some(title) = self.registry.get(target).and_then(|e| e.title) {
            if !self.page.set_title(title) {
                tracing::debug!("title element missing; header text unchanged");
            }
        }

        let previous = self.current_view;
        self.current_view = target;
        self.sync_fragment(target);

        if let Some(chart) = target.chart() {
            self.charts.resize(chart);
        }

        tracing::debug!(from = %previous, to = %target, chrome = ?layout.state, "navigated");
        Ok(())
    }

    fn sync_fragment(&mut self, target: ViewId) {
        if target.is_landing() {
            if self.history.fragment().is_some() {
                self.history.replace_fragment(None);
            }
        } else if self.history.fragment() != Some(target.name()) {
            self.history.push_fragment(target.name());
        }
    }

    /// Re-enter navigation from the history's current fragment, as after a
    /// back or forward step.
    pub fn handle_history_navigation(&mut self) {
        let fragment = self.history.fragment().map(str::to_string);
        match fragment {
            Some(fragment) => self.navigate(&fragment),
            None => self.navigate(ViewId::Landing.name()),
        }
    }

    /// Resize the current view's chart when the page becomes visible again.
    pub fn handle_visibility_change(&mut self, visible: bool) {
        if !visible {
            return;
        }
        if let Some(chart) = self.current_view.chart() {
            self.charts.resize(chart);
        }
    }

    /// Open or close the sidebar drawer used on narrow viewports.
    pub fn toggle_sidebar(&mut self) {
        self.timers
            .retain(|t| !matches!(t, NavTimer::RaiseOverlay | NavTimer::HideOverlay));
        if self.page.sidebar_open() {
            self.page.set_sidebar_open(false);
            self.page.set_overlay_opacity(0.0);
            self.timers.schedule(self.overlay_fade, NavTimer::HideOverlay);
        } else {
            if !self.page.set_overlay_displayed(true) {
                tracing::debug!("sidebar overlay missing");
            }
            self.timers.schedule(self.activate_delay, NavTimer::RaiseOverlay);
            self.page.set_sidebar_open(true);
        }
    }

    /// Run deferred presentation work due by `now`.
    pub fn advance(&mut self, now: Duration) {
        while let Some(timer) = self.timers.pop_due(now) {
            match timer {
                NavTimer::Activate(view) if view == self.current_view => {
                    self.page.set_surface_active(view, true);
                }
                NavTimer::Activate(_) => {}
                NavTimer::RaiseOverlay => {
                    self.page.set_overlay_opacity(1.0);
                }
                NavTimer::HideOverlay => {
                    self.page.set_overlay_displayed(false);
                }
            }
        }
    }

    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn chrome_state(&self) -> ChromeState {
        ChromeState::for_view(self.current_view)
    }

    /// Chrome the current view would get at the current viewport width.
    pub fn chrome_layout(&self) -> ChromeLayout {
        self.policy.resolve(self.current_view, self.page.viewport_px())
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn charts(&self) -> &ChartBoard {
        &self.charts
    }
}

impl<H: History> Navigator<PageModel, H> {
    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            current_view: self.current_view,
            fragment: self.history.fragment().map(str::to_string),
            chrome: self.page.chrome_state(),
            header_visible: self.page.header().visible,
            title: self.page.header().title.clone(),
            visible_surfaces: self.page.visible_surfaces(),
            active_nav_item: self.page.active_nav_item(),
        }
    }
}

impl Navigator<PageModel, HistoryStack> {
    /// Step back through history and re-enter navigation.
    pub fn back(&mut self) -> bool {
        let moved = self.history.back();
        if moved {
            self.handle_history_navigation();
        }
        moved
    }

    /// Step forward through history and re-enter navigation.
    pub fn forward(&mut self) -> bool {
        let moved = self.history.forward();
        if moved {
            self.handle_history_navigation();
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::{BodyScroll, SidebarPosition};
    use crate::page::PageElements;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn wide() -> Navigator {
        Navigator::standard(&ConsoleConfig::default(), 1280)
    }

    #[test]
    fn starts_on_landing() {
        let nav = wide();
        assert_eq!(nav.current_view(), ViewId::Landing);
        assert_eq!(nav.history().fragment(), None);
    }

    #[test]
    fn navigate_shows_only_target() {
        let mut nav = wide();
        nav.navigate("inventory");

        assert_eq!(nav.current_view(), ViewId::Inventory);
        assert_eq!(nav.page().visible_surfaces(), vec![ViewId::Inventory]);
        assert_eq!(nav.page().active_nav_item(), Some(ViewId::Inventory));
        assert_eq!(nav.page().header().title.as_deref(), Some("Inventory Control"));
        assert_eq!(nav.history().fragment(), Some("inventory"));
    }

    #[test]
    fn active_styling_lands_after_deferred_tick() {
        let mut nav = wide();
        nav.navigate("energy");
        assert!(!nav.page().surface(ViewId::Energy).unwrap().active);

        nav.advance(ms(10));
        assert!(nav.page().surface(ViewId::Energy).unwrap().active);
    }

    #[test]
    fn superseded_activation_is_dropped() {
        let mut nav = wide();
        nav.navigate("energy");
        nav.navigate("dashboard");
        nav.advance(ms(50));

        assert!(!nav.page().surface(ViewId::Energy).unwrap().active);
        assert!(nav.page().surface(ViewId::Dashboard).unwrap().active);
    }

    #[test]
    fn unknown_name_changes_nothing() {
        let mut nav = wide();
        nav.navigate("dashboard");
        let before = nav.snapshot();

        nav.navigate("reports");
        assert_eq!(nav.snapshot(), before);
    }

    #[test]
    fn unregistered_surface_is_an_error() {
        let registry = ViewRegistry::with_views([ViewId::Landing, ViewId::Dashboard]);
        let page = PageModel::new(&registry, 1280);
        let mut nav = Navigator::new(
            &ConsoleConfig::default(),
            registry,
            page,
            HistoryStack::new(),
            ChartBoard::standard(),
        );

        assert_eq!(
            nav.navigate_to(ViewId::Energy),
            Err(NavError::MissingSurface(ViewId::Energy))
        );
        assert_eq!(nav.current_view(), ViewId::Landing);
        assert_eq!(nav.charts().get(crate::charts::ChartKey::Energy).unwrap().resize_count(), 0);
    }

    #[test]
    fn landing_hides_chrome_and_clears_fragment_in_place() {
        let mut nav = wide();
        nav.navigate("dashboard");
        let entries = nav.history().len();

        nav.navigate("landing");
        assert_eq!(nav.history().fragment(), None);
        assert_eq!(nav.history().len(), entries);
        assert_eq!(nav.page().sidebar().position, SidebarPosition::Offscreen);
        assert!(!nav.page().header().visible);
        assert_eq!(nav.page().main_offset_px(), 0);
        assert_eq!(nav.page().body_scroll(), BodyScroll::Document);
    }

    #[test]
    fn repeated_navigation_does_not_grow_history() {
        let mut nav = wide();
        nav.navigate("energy");
        nav.navigate("energy");
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    fn narrow_viewport_keeps_sidebar_where_it_was() {
        let mut nav = Navigator::standard(&ConsoleConfig::default(), 640);
        nav.navigate("landing");
        nav.navigate("maintenance");

        assert!(nav.page().header().visible);
        assert_eq!(nav.page().sidebar().position, SidebarPosition::Offscreen);
        assert_eq!(nav.page().main_offset_px(), 0);
        assert_eq!(nav.page().body_scroll(), BodyScroll::ViewsOnly);
    }

    #[test]
    fn scroll_resets_on_navigation() {
        let mut nav = wide();
        nav.navigate("inventory");
        nav.page_mut().scroll_views_by(12);
        nav.navigate("maintenance");
        assert_eq!(nav.page().views_scroll(), Some(0));
    }

    #[test]
    fn missing_title_element_is_skipped() {
        let registry = ViewRegistry::standard();
        let elements = PageElements {
            title: false,
            ..PageElements::default()
        };
        let page = PageModel::with_elements(&registry, 1280, elements);
        let mut nav = Navigator::new(
            &ConsoleConfig::default(),
            registry,
            page,
            HistoryStack::new(),
            ChartBoard::standard(),
        );

        nav.navigate("energy");
        assert_eq!(nav.current_view(), ViewId::Energy);
        assert!(nav.page().header().title.is_none());
    }

    #[test]
    fn chart_views_resize_their_chart() {
        let mut nav = wide();
        nav.navigate("dashboard");
        nav.navigate("energy");
        nav.navigate("inventory");

        let charts = nav.charts();
        assert_eq!(charts.get(crate::charts::ChartKey::Production).unwrap().resize_count(), 1);
        assert_eq!(charts.get(crate::charts::ChartKey::Energy).unwrap().resize_count(), 1);
        assert!(charts.get(crate::charts::ChartKey::Byproducts).unwrap().frame().is_none());
    }

    #[test]
    fn visibility_change_resizes_current_chart() {
        let mut nav = wide();
        nav.navigate("byproducts");
        nav.handle_visibility_change(false);
        nav.handle_visibility_change(true);
        assert_eq!(
            nav.charts().get(crate::charts::ChartKey::Byproducts).unwrap().resize_count(),
            2
        );
    }

    #[test]
    fn sidebar_drawer_fades_overlay() {
        let mut nav = Navigator::standard(&ConsoleConfig::default(), 640);
        nav.toggle_sidebar();
        assert!(nav.page().sidebar().open);
        assert!(nav.page().overlay().unwrap().displayed);
        assert_eq!(nav.page().overlay().unwrap().opacity, 0.0);

        nav.advance(ms(10));
        assert_eq!(nav.page().overlay().unwrap().opacity, 1.0);

        nav.toggle_sidebar();
        assert!(!nav.page().sidebar().open);
        assert_eq!(nav.page().overlay().unwrap().opacity, 0.0);
        assert!(nav.page().overlay().unwrap().displayed);

        nav.advance(ms(310));
        assert!(!nav.page().overlay().unwrap().displayed);
    }

    #[test]
    fn reopening_drawer_cancels_pending_hide() {
        let mut nav = Navigator::standard(&ConsoleConfig::default(), 640);
        nav.toggle_sidebar();
        nav.advance(ms(20));
        nav.toggle_sidebar();
        nav.toggle_sidebar();
        nav.advance(ms(1000));

        assert!(nav.page().sidebar().open);
        assert!(nav.page().overlay().unwrap().displayed);
        assert_eq!(nav.page().overlay().unwrap().opacity, 1.0);
    }

    #[test]
    fn back_and_forward_reenter_navigation() {
        let mut nav = wide();
        nav.navigate("dashboard");
        nav.navigate("energy");

        assert!(nav.back());
        assert_eq!(nav.current_view(), ViewId::Dashboard);
        assert!(nav.back());
        assert_eq!(nav.current_view(), ViewId::Landing);
        assert!(!nav.back());

        assert!(nav.forward());
        assert!(nav.forward());
        assert_eq!(nav.current_view(), ViewId::Energy);
        assert_eq!(nav.history().len(), 3);
    }
}
