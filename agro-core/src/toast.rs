//! Toast notifications: fire-and-forget messages that dismiss themselves.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::ConsoleConfig;
use crate::scheduler::Scheduler;

/// Emitted messages kept for inspection.
pub const HISTORY_CAP: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Error,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "check-circle",
            Severity::Info => "info",
            Severity::Error => "alert-triangle",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

/// Anything that can surface a toast. Callers never wait on it.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
    Shown,
    /// Exit animation running; removed when it ends.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToastTimer {
    SlideOut(u64),
    Remove(u64),
}

/// Toast stack, oldest first.
#[derive(Debug)]
pub struct ToastCenter {
    toasts: VecDeque<Toast>,
    timers: Scheduler<ToastTimer>,
    next_id: u64,
    duration: Duration,
    exit: Duration,
    max_toasts: usize,
    /// Recently emitted messages, oldest first, capped at [`HISTORY_CAP`].
    history: Vec<(Duration, Severity, String)>,
}

impl ToastCenter {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            toasts: VecDeque::new(),
            timers: Scheduler::new(),
            next_id: 0,
            duration: config.toast_duration(),
            exit: config.toast_exit(),
            max_toasts: config.max_toasts.max(1),
            history: Vec::new(),
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Recent messages with the queue time they were emitted at.
    pub fn history(&self) -> &[(Duration, Severity, String)] {
        &self.history
    }

    /// Take the recorded messages, leaving the history empty.
    pub fn drain_history(&mut self) -> Vec<(Duration, Severity, String)> {
        std::mem::take(&mut self.history)
    }

    /// Run exit and removal timers due by `now`.
    pub fn advance(&mut self, now: Duration) {
        while let Some(timer) = self.timers.pop_due(now) {
            match timer {
                ToastTimer::SlideOut(id) => {
                    if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
                        toast.phase = ToastPhase::Leaving;
                        self.timers.schedule(self.exit, ToastTimer::Remove(id));
                    }
                }
                ToastTimer::Remove(id) => {
                    self.toasts.retain(|t| t.id != id);
                }
            }
        }
    }

    /// Drop a toast immediately, skipping its exit animation.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
        self.timers
            .retain(|t| !matches!(t, ToastTimer::SlideOut(x) | ToastTimer::Remove(x) if *x == id));
    }
}

impl Notifier for ToastCenter {
    fn notify(&mut self, message: &str, severity: Severity) {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(id, ?severity, message, "toast");

        self.history
            .push((self.timers.now(), severity, message.to_string()));
        if self.history.len() > HISTORY_CAP {
            let excess = self.history.len() - HISTORY_CAP;
            self.history.drain(..excess);
        }
        self.toasts.push_back(Toast {
            id,
            message: message.to_string(),
            severity,
            phase: ToastPhase::Shown,
            created_at: Local::now(),
        });
        while self.toasts.len() > self.max_toasts {
            if let Some(evicted) = self.toasts.pop_front() {
                self.dismiss(evicted.id);
            }
        }
        self.timers.schedule(self.duration, ToastTimer::SlideOut(id));
    }
}
