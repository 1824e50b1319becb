//! Page surface: the side-effecting half of navigation.
//!
//! The navigator never renders. It flips flags on a [`Page`], and a frontend
//! reads those flags back when it draws. [`PageModel`] is the retained
//! implementation used by the terminal frontend, the CLI and the tests.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::chrome::{BodyScroll, ChromeLayout, ChromeState, SidebarPosition};
use crate::view::{ViewId, ViewRegistry};

/// Operations the navigator performs against the displayed page.
///
/// Methods touching optional elements return `false` when the element is
/// absent; the caller skips the step.
pub trait Page {
    fn set_nav_active(&mut self, view: ViewId, active: bool);
    fn set_surface_visible(&mut self, view: ViewId, visible: bool);
    fn set_surface_active(&mut self, view: ViewId, active: bool);
    fn reset_views_scroll(&mut self) -> bool;
    fn apply_chrome(&mut self, layout: &ChromeLayout);
    fn set_title(&mut self, title: &str) -> bool;
    fn viewport_px(&self) -> u32;

    fn sidebar_open(&self) -> bool;
    fn set_sidebar_open(&mut self, open: bool);
    fn set_overlay_displayed(&mut self, displayed: bool) -> bool;
    fn set_overlay_opacity(&mut self, opacity: f32) -> bool;
}

/// Visibility flags for one surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SurfaceState {
    /// Displayed at all.
    pub visible: bool,
    /// Active styling applied (set a tick after `visible`).
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarState {
    pub position: SidebarPosition,
    /// Drawer opened over the content on narrow viewports.
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayState {
    pub displayed: bool,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderState {
    pub visible: bool,
    /// Title element text. `None` when the page has no title element.
    pub title: Option<String>,
}

/// Which optional elements the page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageElements {
    pub title: bool,
    pub views_container: bool,
    pub overlay: bool,
}

impl Default for PageElements {
    fn default() -> Self {
        Self {
            title: true,
            views_container: true,
            overlay: true,
        }
    }
}

/// Retained page state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModel {
    surfaces: BTreeMap<ViewId, SurfaceState>,
    nav_items: BTreeMap<ViewId, bool>,
    sidebar: SidebarState,
    overlay: Option<OverlayState>,
    header: HeaderState,
    main_offset_px: u32,
    body_scroll: BodyScroll,
    views_scroll: Option<u16>,
    viewport_px: u32,
}

impl PageModel {
    /// Page with a surface for every registered view, in its pre-navigation
    /// markup state: chrome in app layout, nothing visible.
    pub fn new(registry: &ViewRegistry, viewport_px: u32) -> Self {
        Self::with_elements(registry, viewport_px, PageElements::default())
    }

    pub fn with_elements(registry: &ViewRegistry, viewport_px: u32, elements: PageElements) -> Self {
        Self {
            surfaces: registry.views().map(|v| (v, SurfaceState::default())).collect(),
            nav_items: ViewId::nav_items().map(|v| (v, false)).collect(),
            sidebar: SidebarState {
                position: SidebarPosition::Docked,
                open: false,
            },
            overlay: elements.overlay.then_some(OverlayState {
                displayed: false,
                opacity: 0.0,
            }),
            header: HeaderState {
                visible: true,
                title: elements.title.then(String::new),
            },
            main_offset_px: 0,
            body_scroll: BodyScroll::ViewsOnly,
            views_scroll: elements.views_container.then_some(0),
            viewport_px,
        }
    }

    pub fn surface(&self, view: ViewId) -> Option<SurfaceState> {
        self.surfaces.get(&view).copied()
    }

    pub fn has_surface(&self, view: ViewId) -> bool {
        self.surfaces.contains_key(&view)
    }

    /// Surfaces currently displayed.
    pub fn visible_surfaces(&self) -> Vec<ViewId> {
        self.surfaces
            .iter()
            .filter(|(_, s)| s.visible)
            .map(|(v, _)| *v)
            .collect()
    }

    pub fn nav_active(&self, view: ViewId) -> bool {
        self.nav_items.get(&view).copied().unwrap_or(false)
    }

    /// Sidebar entry currently marked active.
    pub fn active_nav_item(&self) -> Option<ViewId> {
        self.nav_items.iter().find(|(_, a)| **a).map(|(v, _)| *v)
    }

    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    pub fn overlay(&self) -> Option<OverlayState> {
        self.overlay
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn main_offset_px(&self) -> u32 {
        self.main_offset_px
    }

    pub fn body_scroll(&self) -> BodyScroll {
        self.body_scroll
    }

    pub fn views_scroll(&self) -> Option<u16> {
        self.views_scroll
    }

    /// Scroll the views container. No-op when the container is absent.
    pub fn scroll_views_by(&mut self, delta: i32) {
        if let Some(offset) = self.views_scroll.as_mut() {
            *offset = (i32::from(*offset) + delta).clamp(0, i32::from(u16::MAX)) as u16;
        }
    }

    pub fn set_viewport_px(&mut self, px: u32) {
        self.viewport_px = px;
    }

    /// Chrome state implied by the current chrome flags.
    pub fn chrome_state(&self) -> ChromeState {
        if self.header.visible {
            ChromeState::App
        } else {
            ChromeState::Landing
        }
    }
}

impl Page for PageModel {
    fn set_nav_active(&mut self, view: ViewId, active: bool) {
        if let Some(flag) = self.nav_items.get_mut(&view) {
            *flag = active;
        }
    }

    fn set_surface_visible(&mut self, view: ViewId, visible: bool) {
        if let Some(surface) = self.surfaces.get_mut(&view) {
            surface.visible = visible;
            if !visible {
                surface.active = false;
            }
        }
    }

    fn set_surface_active(&mut self, view: ViewId, active: bool) {
        if let Some(surface) = self.surfaces.get_mut(&view) {
            surface.active = active;
        }
    }

    fn reset_views_scroll(&mut self) -> bool {
        match self.views_scroll.as_mut() {
            Some(offset) => {
                *offset = 0;
                true
            }
            None => false,
        }
    }

    fn apply_chrome(&mut self, layout: &ChromeLayout) {
        if let Some(position) = layout.sidebar {
            self.sidebar.position = position;
        }
        if let Some(offset) = layout.main_offset_px {
            self.main_offset_px = offset;
        }
        self.header.visible = layout.header_visible;
        self.body_scroll = layout.body_scroll;
    }

    fn set_title(&mut self, title: &str) -> bool {
        match self.header.title.as_mut() {
            Some(text) => {
                *text = title.to_string();
                true
            }
            None => false,
        }
    }

    fn viewport_px(&self) -> u32 {
        self.viewport_px
    }

    fn sidebar_open(&self) -> bool {
        self.sidebar.open
    }

    fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar.open = open;
    }

    fn set_overlay_displayed(&mut self, displayed: bool) -> bool {
        match self.overlay.as_mut() {
            Some(overlay) => {
                overlay.displayed = displayed;
                true
            }
            None => false,
        }
    }

    fn set_overlay_opacity(&mut self, opacity: f32) -> bool {
        match self.overlay.as_mut() {
            Some(overlay) => {
                overlay.opacity = opacity.clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_has_nothing_visible() {
        let page = PageModel::new(&ViewRegistry::standard(), 1280);
        assert!(page.visible_surfaces().is_empty());
        assert_eq!(page.active_nav_item(), None);
        assert_eq!(page.header().title.as_deref(), Some(""));
    }

    #[test]
    fn hiding_a_surface_clears_active() {
        let mut page = PageModel::new(&ViewRegistry::standard(), 1280);
        page.set_surface_visible(ViewId::Energy, true);
        page.set_surface_active(ViewId::Energy, true);
        page.set_surface_visible(ViewId::Energy, false);
        assert_eq!(page.surface(ViewId::Energy), Some(SurfaceState::default()));
    }

    #[test]
    fn absent_elements_report_false() {
        let elements = PageElements {
            title: false,
            views_container: false,
            overlay: false,
        };
        let mut page = PageModel::with_elements(&ViewRegistry::standard(), 1280, elements);
        assert!(!page.set_title("Energy Systems"));
        assert!(!page.reset_views_scroll());
        assert!(!page.set_overlay_displayed(true));
        assert!(page.header().title.is_none());
        page.scroll_views_by(5);
        assert_eq!(page.views_scroll(), None);
    }

    #[test]
    fn chrome_keeps_unset_properties() {
        let mut page = PageModel::new(&ViewRegistry::standard(), 1280);
        page.apply_chrome(&ChromeLayout {
            state: ChromeState::Landing,
            sidebar: Some(SidebarPosition::Offscreen),
            header_visible: false,
            main_offset_px: Some(0),
            body_scroll: BodyScroll::Document,
        });
        page.apply_chrome(&ChromeLayout {
            state: ChromeState::App,
            sidebar: None,
            header_visible: true,
            main_offset_px: None,
            body_scroll: BodyScroll::ViewsOnly,
        });
        assert_eq!(page.sidebar().position, SidebarPosition::Offscreen);
        assert_eq!(page.main_offset_px(), 0);
        assert!(page.header().visible);
        assert_eq!(page.chrome_state(), ChromeState::App);
    }

    #[test]
    fn views_scroll_saturates_at_zero() {
        let mut page = PageModel::new(&ViewRegistry::standard(), 1280);
        page.scroll_views_by(3);
        page.scroll_views_by(-10);
        assert_eq!(page.views_scroll(), Some(0));
    }
}
