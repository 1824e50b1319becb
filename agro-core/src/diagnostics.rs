//! Simulated system diagnostics: a fixed sequence of timed stages.
//!
//! A run walks the stages one interval apart, emitting a toast per stage,
//! then holds the "complete" label for a while before the control resets.
//! Only one run can be in flight; starting while disabled does nothing.

use std::time::Duration;

use serde::Serialize;

use crate::config::ConsoleConfig;
use crate::scheduler::Scheduler;
use crate::toast::{Notifier, Severity};

pub const IDLE_LABEL: &str = "Run Diagnostics";
pub const RUNNING_LABEL: &str = "Running Checks...";
pub const COMPLETE_LABEL: &str = "Diagnostics Complete";

/// One step of a diagnostics run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub message: &'static str,
    pub severity: Severity,
    /// Replaces the control label when the stage fires.
    pub label: Option<&'static str>,
}

/// The standard four-stage check.
pub fn standard_stages() -> Vec<Stage> {
    vec![
        Stage {
            message: "Checking Sensor Grid...",
            severity: Severity::Info,
            label: None,
        },
        Stage {
            message: "Verifying Power Output...",
            severity: Severity::Info,
            label: None,
        },
        Stage {
            message: "Ping Latency: 12ms",
            severity: Severity::Info,
            label: None,
        },
        Stage {
            message: "System Integrity Verified: 100%",
            severity: Severity::Success,
            label: Some(COMPLETE_LABEL),
        },
    ]
}

/// Where the control is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "stage", rename_all = "snake_case")]
pub enum DiagnosticsPhase {
    Idle,
    /// Waiting for the given stage index to fire.
    Running(usize),
    /// All stages fired; waiting to reset.
    Cooldown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DiagnosticsTimer {
    Stage(usize),
    Reset,
}

/// The diagnostics control and its pending stages.
#[derive(Debug)]
pub struct Diagnostics {
    stages: Vec<Stage>,
    timers: Scheduler<DiagnosticsTimer>,
    phase: DiagnosticsPhase,
    label: String,
    idle_label: String,
    step: Duration,
    reset: Duration,
    runs: u64,
}

impl Diagnostics {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self::with_stages(config, standard_stages())
    }

    pub fn with_stages(config: &ConsoleConfig, stages: Vec<Stage>) -> Self {
        Self {
            stages,
            timers: Scheduler::new(),
            phase: DiagnosticsPhase::Idle,
            label: IDLE_LABEL.to_string(),
            idle_label: IDLE_LABEL.to_string(),
            step: config.diagnostics_step(),
            reset: config.diagnostics_reset(),
            runs: 0,
        }
    }

    /// Start a run. Returns false, changing nothing, if one is in flight.
    pub fn start(&mut self) -> bool {
        if self.is_disabled() {
            tracing::debug!("diagnostics already running");
            return false;
        }
        self.runs += 1;
        self.idle_label = self.label.clone();
        self.label = RUNNING_LABEL.to_string();
        if self.stages.is_empty() {
            self.phase = DiagnosticsPhase::Cooldown;
            self.timers.schedule(self.reset, DiagnosticsTimer::Reset);
        } else {
            self.phase = DiagnosticsPhase::Running(0);
            self.timers.schedule(self.step, DiagnosticsTimer::Stage(0));
        }
        tracing::info!(run = self.runs, "diagnostics started");
        true
    }

    /// Abort the run in flight and re-enable the control immediately.
    pub fn cancel(&mut self) -> bool {
        if !self.is_disabled() {
            return false;
        }
        self.timers.clear();
        self.finish();
        tracing::info!(run = self.runs, "diagnostics cancelled");
        true
    }

    /// Fire stages due by `now`, emitting their toasts through `notifier`.
    pub fn advance(&mut self, now: Duration, notifier: &mut dyn Notifier) {
        while let Some(timer) = self.timers.pop_due(now) {
            match timer {
                DiagnosticsTimer::Stage(index) => {
                    let Some(stage) = self.stages.get(index) else {
                        continue;
                    };
                    notifier.notify(stage.message, stage.severity);
                    if let Some(label) = stage.label {
                        self.label = label.to_string();
                    }
                    let next = index + 1;
                    if next < self.stages.len() {
                        self.phase = DiagnosticsPhase::Running(next);
                        self.timers.schedule(self.step, DiagnosticsTimer::Stage(next));
                    } else {
                        self.phase = DiagnosticsPhase::Cooldown;
                        self.timers.schedule(self.reset, DiagnosticsTimer::Reset);
                    }
                }
                DiagnosticsTimer::Reset => {
                    self.finish();
                    tracing::info!(run = self.runs, "diagnostics finished");
                }
            }
        }
    }

    fn finish(&mut self) {
        self.phase = DiagnosticsPhase::Idle;
        self.label = self.idle_label.clone();
    }

    /// Disabled while a run or its cooldown is in progress.
    pub fn is_disabled(&self) -> bool {
        self.phase != DiagnosticsPhase::Idle
    }

    pub fn phase(&self) -> DiagnosticsPhase {
        self.phase
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Runs started since construction.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Queue time at which the next stage or reset fires.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(String, Severity)>);

    impl Notifier for Recorder {
        fn notify(&mut self, message: &str, severity: Severity) {
            self.0.push((message.to_string(), severity));
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn stages_fire_one_interval_apart() {
        let mut diag = Diagnostics::new(&ConsoleConfig::default());
        let mut rec = Recorder::default();
        assert!(diag.start());
        assert_eq!(diag.label(), RUNNING_LABEL);

        diag.advance(ms(799), &mut rec);
        assert!(rec.0.is_empty());
        diag.advance(ms(800), &mut rec);
        assert_eq!(rec.0.len(), 1);
        diag.advance(ms(2400), &mut rec);
        assert_eq!(rec.0.len(), 3);
        assert_eq!(diag.phase(), DiagnosticsPhase::Running(3));

        diag.advance(ms(3200), &mut rec);
        assert_eq!(rec.0.len(), 4);
        assert_eq!(rec.0[3], ("System Integrity Verified: 100%".into(), Severity::Success));
        assert_eq!(diag.label(), COMPLETE_LABEL);
        assert!(diag.is_disabled());

        diag.advance(ms(5199), &mut rec);
        assert!(diag.is_disabled());
        diag.advance(ms(5200), &mut rec);
        assert!(!diag.is_disabled());
        assert_eq!(diag.label(), IDLE_LABEL);
    }

    #[test]
    fn start_while_running_is_ignored() {
        let mut diag = Diagnostics::new(&ConsoleConfig::default());
        let mut rec = Recorder::default();
        assert!(diag.start());
        diag.advance(ms(1000), &mut rec);
        assert!(!diag.start());
        diag.advance(ms(10_000), &mut rec);

        assert_eq!(diag.runs(), 1);
        let completes = rec.0.iter().filter(|(_, s)| *s == Severity::Success).count();
        assert_eq!(completes, 1);
    }

    #[test]
    fn late_polling_catches_up_every_stage() {
        let mut diag = Diagnostics::new(&ConsoleConfig::default());
        let mut rec = Recorder::default();
        diag.start();
        diag.advance(ms(60_000), &mut rec);
        assert_eq!(rec.0.len(), 4);
        assert_eq!(diag.phase(), DiagnosticsPhase::Idle);
    }

    #[test]
    fn cancel_restores_control_and_drops_stages() {
        let mut diag = Diagnostics::new(&ConsoleConfig::default());
        let mut rec = Recorder::default();
        diag.start();
        diag.advance(ms(900), &mut rec);
        assert!(diag.cancel());
        assert_eq!(diag.label(), IDLE_LABEL);
        assert!(!diag.is_disabled());

        diag.advance(ms(10_000), &mut rec);
        assert_eq!(rec.0.len(), 1);
        assert!(!diag.cancel());
    }

    #[test]
    fn empty_stage_list_still_cools_down() {
        let mut diag = Diagnostics::with_stages(&ConsoleConfig::default(), Vec::new());
        let mut rec = Recorder::default();
        assert!(diag.start());
        assert_eq!(diag.phase(), DiagnosticsPhase::Cooldown);
        diag.advance(ms(2000), &mut rec);
        assert_eq!(diag.phase(), DiagnosticsPhase::Idle);
    }
}
