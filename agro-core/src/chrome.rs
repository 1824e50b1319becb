//! Chrome layout policy: sidebar, header and scroll behaviour per view.

use serde::Serialize;

use crate::config::ConsoleConfig;
use crate::view::ViewId;

/// The two chrome states. Selected solely by the navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromeState {
    /// Full-bleed landing page: no sidebar, no header, document scrolls.
    Landing,
    /// Application frame: header shown, sidebar docked on wide viewports.
    App,
}

impl ChromeState {
    pub fn for_view(view: ViewId) -> Self {
        if view.is_landing() {
            ChromeState::Landing
        } else {
            ChromeState::App
        }
    }
}

/// Where the sidebar sits horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    /// Translated fully off-screen.
    Offscreen,
    /// In its normal docked position.
    Docked,
}

/// Which element owns vertical scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyScroll {
    /// The whole document scrolls.
    Document,
    /// The document is locked; only the views container scrolls.
    ViewsOnly,
}

/// Breakpoint and sidebar geometry consulted by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub breakpoint_px: u32,
    pub sidebar_width_px: u32,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self::from_config(&ConsoleConfig::default())
    }
}

impl LayoutPolicy {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            breakpoint_px: config.breakpoint_px,
            sidebar_width_px: config.sidebar_width_px,
        }
    }

    /// Resolve the chrome for `target` at the given viewport width.
    pub fn resolve(&self, target: ViewId, viewport_px: u32) -> ChromeLayout {
        match ChromeState::for_view(target) {
            ChromeState::Landing => ChromeLayout {
                state: ChromeState::Landing,
                sidebar: Some(SidebarPosition::Offscreen),
                header_visible: false,
                main_offset_px: Some(0),
                body_scroll: BodyScroll::Document,
            },
            ChromeState::App => {
                let wide = viewport_px > self.breakpoint_px;
                ChromeLayout {
                    state: ChromeState::App,
                    sidebar: wide.then_some(SidebarPosition::Docked),
                    header_visible: true,
                    main_offset_px: wide.then_some(self.sidebar_width_px),
                    body_scroll: BodyScroll::ViewsOnly,
                }
            }
        }
    }
}

/// Chrome properties to apply. `None` leaves the property as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeLayout {
    pub state: ChromeState,
    pub sidebar: Option<SidebarPosition>,
    pub header_visible: bool,
    pub main_offset_px: Option<u32>,
    pub body_scroll: BodyScroll,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_hides_chrome_regardless_of_width() {
        let policy = LayoutPolicy::default();
        for width in [320, 768, 1920] {
            let layout = policy.resolve(ViewId::Landing, width);
            assert_eq!(layout.state, ChromeState::Landing);
            assert_eq!(layout.sidebar, Some(SidebarPosition::Offscreen));
            assert!(!layout.header_visible);
            assert_eq!(layout.main_offset_px, Some(0));
            assert_eq!(layout.body_scroll, BodyScroll::Document);
        }
    }

    #[test]
    fn app_docks_sidebar_above_breakpoint() {
        let layout = LayoutPolicy::default().resolve(ViewId::Energy, 1280);
        assert_eq!(layout.state, ChromeState::App);
        assert_eq!(layout.sidebar, Some(SidebarPosition::Docked));
        assert_eq!(layout.main_offset_px, Some(260));
        assert!(layout.header_visible);
        assert_eq!(layout.body_scroll, BodyScroll::ViewsOnly);
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let layout = LayoutPolicy::default().resolve(ViewId::Dashboard, 768);
        assert_eq!(layout.sidebar, None);
        assert_eq!(layout.main_offset_px, None);
        assert!(layout.header_visible);

        let layout = LayoutPolicy::default().resolve(ViewId::Dashboard, 769);
        assert_eq!(layout.sidebar, Some(SidebarPosition::Docked));
    }

    #[test]
    fn state_tracks_landing_only() {
        for view in ViewId::ALL {
            let expected = if view == ViewId::Landing {
                ChromeState::Landing
            } else {
                ChromeState::App
            };
            assert_eq!(ChromeState::for_view(view), expected);
        }
    }
}
