//! View identifiers and the static view registry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::charts::ChartKey;
use crate::error::NavError;

/// One mutually exclusive section of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Landing,
    Dashboard,
    Inventory,
    Energy,
    Maintenance,
    Byproducts,
}

impl ViewId {
    pub const ALL: [ViewId; 6] = [
        ViewId::Landing,
        ViewId::Dashboard,
        ViewId::Inventory,
        ViewId::Energy,
        ViewId::Maintenance,
        ViewId::Byproducts,
    ];

    /// Name used on the wire: fragment text, CLI arguments, nav item keys.
    pub fn name(self) -> &'static str {
        match self {
            ViewId::Landing => "landing",
            ViewId::Dashboard => "dashboard",
            ViewId::Inventory => "inventory",
            ViewId::Energy => "energy",
            ViewId::Maintenance => "maintenance",
            ViewId::Byproducts => "byproducts",
        }
    }

    /// Header title shown while the view is active. Landing has none.
    pub fn title(self) -> Option<&'static str> {
        match self {
            ViewId::Landing => None,
            ViewId::Dashboard => Some("Operations Dashboard"),
            ViewId::Inventory => Some("Inventory Control"),
            ViewId::Energy => Some("Energy Systems"),
            ViewId::Maintenance => Some("Machine Maintenance"),
            ViewId::Byproducts => Some("Sustainability & Circularity"),
        }
    }

    /// Short label for sidebar entries.
    pub fn label(self) -> &'static str {
        match self {
            ViewId::Landing => "Home",
            ViewId::Dashboard => "Dashboard",
            ViewId::Inventory => "Inventory",
            ViewId::Energy => "Energy",
            ViewId::Maintenance => "Maintenance",
            ViewId::Byproducts => "By-products",
        }
    }

    /// Chart widget living inside this view, if any.
    pub fn chart(self) -> Option<ChartKey> {
        match self {
            ViewId::Dashboard => Some(ChartKey::Production),
            ViewId::Energy => Some(ChartKey::Energy),
            ViewId::Byproducts => Some(ChartKey::Byproducts),
            _ => None,
        }
    }

    pub fn is_landing(self) -> bool {
        self == ViewId::Landing
    }

    /// Views reachable from the sidebar, in display order.
    pub fn nav_items() -> impl Iterator<Item = ViewId> {
        ViewId::ALL.into_iter().filter(|v| !v.is_landing())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        ViewId::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| NavError::UnknownView(s.to_string()))
    }
}

/// A registered display surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub view: ViewId,
    pub title: Option<&'static str>,
}

/// Static mapping from view to surface. Built once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    entries: BTreeMap<ViewId, ViewEntry>,
}

impl ViewRegistry {
    /// Registry with every view present.
    pub fn standard() -> Self {
        Self::with_views(ViewId::ALL)
    }

    pub fn with_views(views: impl IntoIterator<Item = ViewId>) -> Self {
        let entries = views
            .into_iter()
            .map(|view| {
                (
                    view,
                    ViewEntry {
                        view,
                        title: view.title(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, view: ViewId) -> Option<&ViewEntry> {
        self.entries.get(&view)
    }

    pub fn contains(&self, view: ViewId) -> bool {
        self.entries.contains_key(&view)
    }

    pub fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
