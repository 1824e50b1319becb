//! Static operational data shown by the console.
//!
//! Every provider returns the same records on every call; there is no source
//! behind them.

use serde::Serialize;

/// Direction colour of a KPI trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendColor {
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
    pub icon: &'static str,
    pub trend_color: TrendColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockStatus {
    Ok,
    Low,
    Crit,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Ok => "OK",
            StockStatus::Low => "LOW",
            StockStatus::Crit => "CRIT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub name: &'static str,
    pub kind: &'static str,
    pub quantity: &'static str,
    pub status: StockStatus,
    pub last_updated: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineStatus {
    On,
    Fix,
    Off,
}

impl MachineStatus {
    pub fn code(self) -> &'static str {
        match self {
            MachineStatus::On => "on",
            MachineStatus::Fix => "fix",
            MachineStatus::Off => "off",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Machine {
    pub name: &'static str,
    pub status: MachineStatus,
    pub detail: &'static str,
}

pub fn kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            id: "production",
            label: "Daily Output",
            value: "1,240T",
            trend: "+12%",
            icon: "package",
            trend_color: TrendColor::Green,
        },
        Kpi {
            id: "energy",
            label: "Grid Independence",
            value: "87%",
            trend: "+5%",
            icon: "zap",
            trend_color: TrendColor::Green,
        },
        Kpi {
            id: "maintenance",
            label: "Active Lines",
            value: "11/12",
            trend: "-1",
            icon: "activity",
            trend_color: TrendColor::Red,
        },
        Kpi {
            id: "revenue",
            label: "Est. Revenue",
            value: "₵ 450k",
            trend: "+8%",
            icon: "dollar-sign",
            trend_color: TrendColor::Green,
        },
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    let item = |name, kind, quantity, status, last_updated| InventoryItem {
        name,
        kind,
        quantity,
        status,
        last_updated,
    };
    vec![
        item("Yellow Maize (Raw)", "Grain", "450 Tons", StockStatus::Ok, "2h ago"),
        item("Cassava Tubers", "Root", "120 Tons", StockStatus::Low, "45m ago"),
        item("Processed Starch", "Finished", "800 Bags", StockStatus::Ok, "10m ago"),
        item("Biomass Fuel", "Energy", "20 Tons", StockStatus::Crit, "1d ago"),
        item("Pkg Materials", "Supply", "5000 Units", StockStatus::Ok, "5h ago"),
    ]
}

pub fn machines() -> Vec<Machine> {
    let machine = |name, status, detail| Machine { name, status, detail };
    vec![
        machine("Grinder Unit A", MachineStatus::On, "Running at 98% efficiency"),
        machine("Conveyor Belt 4", MachineStatus::Fix, "Vibration detected in motor"),
        machine("Solar Inverter 2", MachineStatus::On, "Optimal output"),
        machine("Drying Silo B", MachineStatus::Off, "Scheduled cleaning"),
        machine("Packaging Line 1", MachineStatus::On, "Batch #4022 in progress"),
        machine("Water Pump Sys", MachineStatus::On, "Pressure stable"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts() {
        assert_eq!(kpis().len(), 4);
        assert_eq!(inventory().len(), 5);
        assert_eq!(machines().len(), 6);
    }

    #[test]
    fn only_active_lines_trend_red() {
        let red: Vec<_> = kpis()
            .into_iter()
            .filter(|k| k.trend_color == TrendColor::Red)
            .map(|k| k.id)
            .collect();
        assert_eq!(red, vec!["maintenance"]);
    }

    #[test]
    fn providers_are_stable() {
        assert_eq!(inventory(), inventory());
        assert_eq!(machines(), machines());
    }
}
