//! Console configuration: TOML file with per-key defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunables for layout and timing. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Viewport width (logical px) above which the sidebar docks.
    pub breakpoint_px: u32,
    /// Logical pixels per terminal cell, for frontends that measure in cells.
    pub cell_width_px: u32,
    /// Width of the docked sidebar; also the main content offset.
    pub sidebar_width_px: u32,
    /// How long a toast stays before its exit animation.
    pub toast_duration_ms: u64,
    /// Length of the toast exit animation.
    pub toast_exit_ms: u64,
    /// Deferred tick before a shown surface gets its active styling.
    pub activate_delay_ms: u64,
    /// Sidebar overlay fade time.
    pub overlay_fade_ms: u64,
    /// Interval between diagnostics stages.
    pub diagnostics_step_ms: u64,
    /// Delay before the diagnostics control resets after completion.
    pub diagnostics_reset_ms: u64,
    /// Toasts kept on screen at once.
    pub max_toasts: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            cell_width_px: 8,
            sidebar_width_px: 260,
            toast_duration_ms: 3000,
            toast_exit_ms: 500,
            activate_delay_ms: 10,
            overlay_fade_ms: 300,
            diagnostics_step_ms: 800,
            diagnostics_reset_ms: 2000,
            max_toasts: 5,
        }
    }
}

impl ConsoleConfig {
    /// Load from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from a TOML file, or defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Convert a width in terminal cells to logical pixels.
    pub fn cells_to_px(&self, cells: u16) -> u32 {
        u32::from(cells) * self.cell_width_px
    }

    /// Convert logical pixels to terminal cells, rounding down.
    pub fn px_to_cells(&self, px: u32) -> u16 {
        (px / self.cell_width_px.max(1)).min(u32::from(u16::MAX)) as u16
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    pub fn activate_delay(&self) -> Duration {
        Duration::from_millis(self.activate_delay_ms)
    }

    pub fn overlay_fade(&self) -> Duration {
        Duration::from_millis(self.overlay_fade_ms)
    }

    pub fn diagnostics_step(&self) -> Duration {
        Duration::from_millis(self.diagnostics_step_ms)
    }

    pub fn diagnostics_reset(&self) -> Duration {
        Duration::from_millis(self.diagnostics_reset_ms)
    }
}
