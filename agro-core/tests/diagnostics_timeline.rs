//! Diagnostics run driven through the console on a virtual clock.

use std::time::Duration;

use agro_core::diagnostics::{COMPLETE_LABEL, IDLE_LABEL, RUNNING_LABEL};
use agro_core::{Console, ConsoleConfig, Severity};

fn run_until(console: &mut Console, from_ms: u64, to_ms: u64) {
    for t in (from_ms..=to_ms).step_by(50) {
        console.tick(Duration::from_millis(t));
    }
}

#[test]
fn full_run_emits_four_toasts_and_resets() {
    let mut console = Console::new(ConsoleConfig::default(), 1280);
    console.start();
    console.navigate("maintenance");

    assert!(console.run_diagnostics());
    assert_eq!(console.diagnostics().label(), RUNNING_LABEL);

    run_until(&mut console, 0, 3200);
    let messages: Vec<_> = console
        .toasts()
        .history()
        .iter()
        .map(|(_, _, m)| m.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Checking Sensor Grid...",
            "Verifying Power Output...",
            "Ping Latency: 12ms",
            "System Integrity Verified: 100%",
        ]
    );
    assert_eq!(console.diagnostics().label(), COMPLETE_LABEL);
    assert!(console.diagnostics().is_disabled());

    run_until(&mut console, 3250, 5200);
    assert!(!console.diagnostics().is_disabled());
    assert_eq!(console.diagnostics().label(), IDLE_LABEL);
}

#[test]
fn second_start_during_run_is_a_no_op() {
    let mut console = Console::new(ConsoleConfig::default(), 1280);
    console.start();

    assert!(console.run_diagnostics());
    run_until(&mut console, 0, 1000);
    assert!(!console.run_diagnostics());
    run_until(&mut console, 1050, 6000);

    let completes = console
        .toasts()
        .history()
        .iter()
        .filter(|(_, s, _)| *s == Severity::Success)
        .count();
    assert_eq!(completes, 1);
    assert_eq!(console.toasts().history().len(), 4);

    // Re-enabled: a fresh run is accepted.
    assert!(console.run_diagnostics());
}

#[test]
fn toasts_from_a_run_expire() {
    let mut console = Console::new(ConsoleConfig::default(), 1280);
    console.start();
    console.run_diagnostics();
    run_until(&mut console, 0, 10_000);
    assert!(console.toasts().is_empty());
}

#[test]
fn cancelled_run_emits_no_completion() {
    let mut console = Console::new(ConsoleConfig::default(), 1280);
    console.start();
    console.run_diagnostics();
    run_until(&mut console, 0, 1700);
    assert!(console.cancel_diagnostics());
    run_until(&mut console, 1750, 8000);

    assert_eq!(console.toasts().history().len(), 2);
    assert!(!console.diagnostics().is_disabled());
}
