//! AccraAgro CLI: inspect views, replay navigation, dump mock data.
//!
//! Commands:
//! - `views`: list every view with its fragment and title
//! - `navigate`: replay a navigation sequence and print the final state
//! - `data`: print the mapped mock data or chart specs as JSON
//! - `diagnostics`: run the simulated diagnostics on a virtual clock

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use agro_core::charts::{ChartKey, ChartSpec};
use agro_core::console::LOGOUT_PROMPT;
use agro_core::{Console, ConsoleConfig, NavSnapshot, Severity, ViewId, ViewRegistry};

#[derive(Parser)]
#[command(
    name = "agro",
    version,
    about = "AccraAgro CLI: view navigation and mock operational data"
)]
struct Cli {
    /// Config file. Defaults are used when absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List views, their fragments and header titles.
    Views,
    /// Replay navigation steps and print the final state as JSON.
    Navigate {
        /// View names, or `back`, `forward` and `logout`.
        #[arg(required = true)]
        steps: Vec<String>,

        /// Viewport width in logical pixels.
        #[arg(long, default_value_t = 1280)]
        width: u32,

        /// Confirm logout without asking.
        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
    },
    /// Print mock data as JSON.
    Data {
        #[arg(value_enum)]
        set: DataSet,
    },
    /// Run the diagnostics sequence on a virtual clock and print the timeline.
    Diagnostics,
}

#[derive(Clone, Copy, ValueEnum)]
enum DataSet {
    Kpis,
    Inventory,
    Machines,
    Charts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => ConsoleConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ConsoleConfig::default(),
    };

    match cli.command {
        Commands::Views => run_views(),
        Commands::Navigate { steps, width, yes } => run_navigate(config, &steps, width, yes),
        Commands::Data { set } => run_data(config, set),
        Commands::Diagnostics => run_diagnostics(config),
    }
}

fn run_views() -> Result<()> {
    let registry = ViewRegistry::standard();
    for view in registry.views() {
        let fragment = if view.is_landing() {
            String::from("(none)")
        } else {
            format!("#{}", view.name())
        };
        println!(
            "{:<12} {:<14} {}",
            view.name(),
            fragment,
            view.title().unwrap_or("-")
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct ReplayReport {
    #[serde(flatten)]
    state: NavSnapshot,
    toasts: Vec<String>,
}

fn run_navigate(config: ConsoleConfig, steps: &[String], width: u32, yes: bool) -> Result<()> {
    let report = replay(config, steps, width, |prompt| {
        if yes {
            Ok(true)
        } else {
            ask(prompt)
        }
    })?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Start a console and apply each step in order.
fn replay(
    config: ConsoleConfig,
    steps: &[String],
    width: u32,
    mut confirm: impl FnMut(&str) -> io::Result<bool>,
) -> Result<ReplayReport> {
    let mut console = Console::new(config, width);
    console.start();

    for step in steps {
        match step.as_str() {
            "back" => {
                if !console.nav_mut().back() {
                    tracing::warn!("history has no earlier entry");
                }
            }
            "forward" => {
                if !console.nav_mut().forward() {
                    tracing::warn!("history has no later entry");
                }
            }
            "logout" => {
                let confirmed = confirm(LOGOUT_PROMPT).context("reading logout answer")?;
                console.logout(|_| confirmed);
            }
            view => console.navigate(view),
        }
    }

    Ok(ReplayReport {
        state: console.nav().snapshot(),
        toasts: console
            .toasts()
            .history()
            .iter()
            .map(|(_, _, message)| message.clone())
            .collect(),
    })
}

fn ask(prompt: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn run_data(config: ConsoleConfig, set: DataSet) -> Result<()> {
    let console = Console::new(config, 0);
    let data = console.data();
    let json = match set {
        DataSet::Kpis => serde_json::to_string_pretty(&data.kpis)?,
        DataSet::Inventory => serde_json::to_string_pretty(&data.inventory)?,
        DataSet::Machines => serde_json::to_string_pretty(&data.machines)?,
        DataSet::Charts => {
            let charts: Vec<(ChartKey, ChartSpec)> =
                ChartKey::ALL.iter().map(|k| (*k, k.spec())).collect();
            serde_json::to_string_pretty(&charts)?
        }
    };
    println!("{json}");
    Ok(())
}

/// One line of the diagnostics timeline.
#[derive(Debug, Clone, PartialEq)]
struct TimelineEntry {
    at: Duration,
    severity: Severity,
    message: String,
    label: String,
}

fn run_diagnostics(config: ConsoleConfig) -> Result<()> {
    for entry in diagnostics_timeline(config) {
        println!(
            "{:>6}ms  {:<8} {:<34} [{}]",
            entry.at.as_millis(),
            entry.severity.class(),
            entry.message,
            entry.label
        );
    }
    Ok(())
}

/// Drive a diagnostics run to completion, ticking only at its due times.
fn diagnostics_timeline(config: ConsoleConfig) -> Vec<TimelineEntry> {
    let mut console = Console::new(config, 0);
    console.start();
    console.navigate(ViewId::Maintenance.name());
    console.run_diagnostics();

    console.toasts_mut().drain_history();

    let mut timeline = Vec::new();
    while let Some(due) = console.diagnostics().next_due() {
        console.tick(due);
        let label = console.diagnostics().label().to_string();
        for (at, severity, message) in console.toasts_mut().drain_history() {
            timeline.push(TimelineEntry {
                at,
                severity,
                message,
                label: label.clone(),
            });
        }
        if !console.diagnostics().is_disabled() {
            timeline.push(TimelineEntry {
                at: due,
                severity: Severity::Info,
                message: String::from("control re-enabled"),
                label,
            });
        }
    }
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use agro_core::ChromeState;

    fn steps(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn replay_lands_on_last_view() {
        let report = replay(
            ConsoleConfig::default(),
            &steps(&["dashboard", "inventory"]),
            1280,
            |_| Ok(false),
        )
        .unwrap();
        assert_eq!(report.state.current_view, ViewId::Inventory);
        assert_eq!(report.state.fragment.as_deref(), Some("inventory"));
        assert_eq!(report.state.title.as_deref(), Some("Inventory Control"));
    }

    #[test]
    fn replay_honours_history_tokens() {
        let report = replay(
            ConsoleConfig::default(),
            &steps(&["dashboard", "energy", "back"]),
            1280,
            |_| Ok(false),
        )
        .unwrap();
        assert_eq!(report.state.current_view, ViewId::Dashboard);

        let report = replay(
            ConsoleConfig::default(),
            &steps(&["dashboard", "energy", "back", "forward"]),
            1280,
            |_| Ok(false),
        )
        .unwrap();
        assert_eq!(report.state.current_view, ViewId::Energy);
    }

    #[test]
    fn replay_skips_unknown_views() {
        let report = replay(
            ConsoleConfig::default(),
            &steps(&["energy", "warehouse"]),
            1280,
            |_| Ok(false),
        )
        .unwrap();
        assert_eq!(report.state.current_view, ViewId::Energy);
    }

    #[test]
    fn replay_logout_follows_confirmation() {
        let declined = replay(
            ConsoleConfig::default(),
            &steps(&["maintenance", "logout"]),
            1280,
            |_| Ok(false),
        )
        .unwrap();
        assert_eq!(declined.state.current_view, ViewId::Maintenance);
        assert!(declined.toasts.is_empty());

        let confirmed = replay(
            ConsoleConfig::default(),
            &steps(&["maintenance", "logout"]),
            1280,
            |_| Ok(true),
        )
        .unwrap();
        assert_eq!(confirmed.state.current_view, ViewId::Landing);
        assert_eq!(confirmed.state.chrome, ChromeState::Landing);
        assert_eq!(confirmed.state.fragment, None);
        assert_eq!(confirmed.toasts, vec!["Session Ended Securely".to_string()]);
    }

    #[test]
    fn diagnostics_timeline_runs_four_stages_then_resets() {
        let timeline = diagnostics_timeline(ConsoleConfig::default());
        let messages: Vec<&str> = timeline.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Checking Sensor Grid...",
                "Verifying Power Output...",
                "Ping Latency: 12ms",
                "System Integrity Verified: 100%",
                "control re-enabled",
            ]
        );
        assert_eq!(timeline[0].at, Duration::from_millis(800));
        assert_eq!(timeline[3].at, Duration::from_millis(3200));
        assert_eq!(timeline[3].label, "Diagnostics Complete");
        assert_eq!(timeline[4].at, Duration::from_millis(5200));
        assert_eq!(timeline[4].label, "Run Diagnostics");
    }

    #[test]
    fn replay_fails_when_logout_answer_cannot_be_read() {
        let result = replay(
            ConsoleConfig::default(),
            &steps(&["maintenance", "logout"]),
            1280,
            |_| Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
        );
        let err = result.err().expect("logout answer error");
        assert!(err.to_string().contains("reading logout answer"));
    }

    #[test]
    fn replay_passes_logout_prompt_to_confirm() {
        let mut asked = None;
        replay(
            ConsoleConfig::default(),
            &steps(&["dashboard", "logout"]),
            1280,
            |prompt| {
                asked = Some(prompt.to_string());
                Ok(false)
            },
        )
        .unwrap();
        assert_eq!(asked.as_deref(), Some("Secure Logout: End Session?"));
    }
}
