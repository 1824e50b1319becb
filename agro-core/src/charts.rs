//! Chart specifications and the resizable chart handles the navigator owns.

use std::collections::BTreeMap;

use serde::Serialize;

/// Identifies a chart widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKey {
    Production,
    Energy,
    Byproducts,
}

impl ChartKey {
    pub const ALL: [ChartKey; 3] = [ChartKey::Production, ChartKey::Energy, ChartKey::Byproducts];

    pub fn spec(self) -> ChartSpec {
        match self {
            ChartKey::Production => production_chart(),
            ChartKey::Energy => energy_chart(),
            ChartKey::Byproducts => byproducts_chart(),
        }
    }
}

/// 24-bit colour, kept renderer-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

pub const EMERALD: Rgb = Rgb(0x10, 0xb9, 0x81);
pub const AMBER: Rgb = Rgb(0xf5, 0x9e, 0x0b);
pub const BLUE: Rgb = Rgb(0x3b, 0x82, 0xf6);
pub const RED: Rgb = Rgb(0xef, 0x44, 0x44);
pub const SLATE: Rgb = Rgb(0x64, 0x74, 0x8b);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    /// Bars stacked per label.
    StackedBar,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    /// One colour per dataset, or one per point for doughnuts.
    pub colors: Vec<Rgb>,
    pub dashed: bool,
    pub filled: bool,
}

impl Dataset {
    fn series(label: &str, data: &[f64], color: Rgb) -> Self {
        Self {
            label: label.to_string(),
            data: data.to_vec(),
            colors: vec![color],
            dashed: false,
            filled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub show_legend: bool,
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Hourly production against target.
pub fn production_chart() -> ChartSpec {
    let mut target = Dataset::series("Target", &[80.0, 85.0, 90.0, 90.0, 90.0, 85.0, 80.0], SLATE);
    target.dashed = true;
    let mut actual = Dataset::series("Actual", &[75.0, 82.0, 94.0, 88.0, 92.0, 89.0, 85.0], EMERALD);
    actual.filled = true;

    ChartSpec {
        kind: ChartKind::Line,
        labels: labels(&["06:00", "08:00", "10:00", "12:00", "14:00", "16:00", "18:00"]),
        datasets: vec![target, actual],
        show_legend: false,
    }
}

/// Daily solar vs grid draw in kWh.
pub fn energy_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::StackedBar,
        labels: labels(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]),
        datasets: vec![
            Dataset::series(
                "Solar (kWh)",
                &[450.0, 520.0, 480.0, 550.0, 590.0, 600.0, 580.0],
                AMBER,
            ),
            Dataset::series(
                "Grid (kWh)",
                &[200.0, 150.0, 180.0, 120.0, 100.0, 50.0, 80.0],
                BLUE,
            ),
        ],
        show_legend: true,
    }
}

/// Where processing waste ends up, in percent.
pub fn byproducts_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: labels(&["Biomass Fuel", "Animal Feed", "Compost", "Landfill"]),
        datasets: vec![Dataset {
            label: "Share".to_string(),
            data: vec![45.0, 30.0, 20.0, 5.0],
            colors: vec![EMERALD, AMBER, BLUE, RED],
            dashed: false,
            filled: false,
        }],
        show_legend: true,
    }
}

/// Scale fitted to the chart's data on the last resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartFrame {
    pub y_min: f64,
    pub y_max: f64,
    /// Sum of the first dataset; the doughnut's whole.
    pub total: f64,
}

impl ChartFrame {
    fn fit(spec: &ChartSpec) -> Self {
        let total = spec.datasets.first().map(|d| d.data.iter().sum()).unwrap_or(0.0);
        let (y_min, y_max) = match spec.kind {
            ChartKind::Line => {
                let values = spec.datasets.iter().flat_map(|d| d.data.iter().copied());
                let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                });
                if lo.is_finite() {
                    let padding = (hi - lo).abs() * 0.05;
                    (lo - padding, hi + padding)
                } else {
                    (0.0, 1.0)
                }
            }
            ChartKind::StackedBar => {
                let stacked = (0..spec.labels.len())
                    .map(|i| {
                        spec.datasets
                            .iter()
                            .filter_map(|d| d.data.get(i))
                            .sum::<f64>()
                    })
                    .fold(0.0, f64::max);
                (0.0, stacked)
            }
            ChartKind::Doughnut => (0.0, total),
        };
        Self { y_min, y_max, total }
    }
}

/// A chart widget the navigator can poke.
///
/// A chart created while its container is hidden has no frame yet; the first
/// resize after the container becomes visible fits it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartHandle {
    key: ChartKey,
    spec: ChartSpec,
    frame: Option<ChartFrame>,
    resizes: u64,
}

impl ChartHandle {
    pub fn new(key: ChartKey) -> Self {
        Self {
            key,
            spec: key.spec(),
            frame: None,
            resizes: 0,
        }
    }

    /// Refit the chart to its now-visible container.
    pub fn resize(&mut self) {
        self.frame = Some(ChartFrame::fit(&self.spec));
        self.resizes += 1;
        tracing::debug!(chart = ?self.key, resizes = self.resizes, "chart resized");
    }

    pub fn key(&self) -> ChartKey {
        self.key
    }

    pub fn spec(&self) -> &ChartSpec {
        &self.spec
    }

    pub fn frame(&self) -> Option<ChartFrame> {
        self.frame
    }

    pub fn resize_count(&self) -> u64 {
        self.resizes
    }
}

/// Chart handles keyed by chart.
#[derive(Debug, Clone, Default)]
pub struct ChartBoard {
    charts: BTreeMap<ChartKey, ChartHandle>,
}

impl ChartBoard {
    /// Board with every chart created.
    pub fn standard() -> Self {
        Self::with_charts(ChartKey::ALL)
    }

    pub fn with_charts(keys: impl IntoIterator<Item = ChartKey>) -> Self {
        Self {
            charts: keys.into_iter().map(|k| (k, ChartHandle::new(k))).collect(),
        }
    }

    pub fn get(&self, key: ChartKey) -> Option<&ChartHandle> {
        self.charts.get(&key)
    }

    /// Resize the chart if it exists. Returns whether it did.
    pub fn resize(&mut self, key: ChartKey) -> bool {
        match self.charts.get_mut(&key) {
            Some(chart) => {
                chart.resize();
                true
            }
            None => false,
        }
    }
}
