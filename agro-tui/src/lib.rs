//! AccraAgro terminal console.
//!
//! Drives the core navigation controller from a ratatui frontend:
//! - Sidebar navigation with a drawer on narrow terminals
//! - History back/forward over view fragments
//! - Dashboard, inventory, energy, maintenance and by-product views
//! - Toasts, diagnostics and the logout prompt

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
