//! AccraAgro console core: view navigation and the collaborators it drives.
//!
//! This crate holds everything the frontends share:
//! - View identifiers, the static view registry and the chrome layout policy
//! - The navigation controller and its page/history seams
//! - A deterministic timer queue for deferred presentation work
//! - Toasts, the simulated diagnostics sequence and chart handles
//! - Static operational data and its pure view-model mapping

pub mod charts;
pub mod chrome;
pub mod config;
pub mod console;
pub mod data;
pub mod diagnostics;
pub mod error;
pub mod history;
pub mod navigator;
pub mod page;
pub mod scheduler;
pub mod toast;
pub mod view;
pub mod view_model;

pub use chrome::{ChromeLayout, ChromeState, LayoutPolicy};
pub use config::ConsoleConfig;
pub use console::Console;
pub use error::{ConfigError, NavError};
pub use history::{History, HistoryStack};
pub use navigator::{NavSnapshot, Navigator};
pub use page::{Page, PageModel};
pub use toast::{Notifier, Severity};
pub use view::{ViewId, ViewRegistry};
