//! Record → view model mapping.
//!
//! Pure functions only. Frontends draw the returned structures; nothing here
//! knows about a terminal or any markup.

use serde::Serialize;

use crate::data::{self, InventoryItem, Kpi, Machine, StockStatus, TrendColor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub value: String,
    pub trend: String,
    pub trend_class: &'static str,
    pub trend_icon: &'static str,
}

impl KpiCard {
    pub fn is_falling(&self) -> bool {
        self.trend_class == "trend-down"
    }
}

pub fn kpi_card(kpi: &Kpi) -> KpiCard {
    let (trend_class, trend_icon) = match kpi.trend_color {
        TrendColor::Red => ("trend-down", "arrow-down-right"),
        TrendColor::Green => ("trend-up", "arrow-up-right"),
    };
    KpiCard {
        id: kpi.id.to_string(),
        icon: kpi.icon.to_string(),
        title: kpi.label.to_string(),
        value: kpi.value.to_string(),
        trend: kpi.trend.to_string(),
        trend_class,
        trend_icon,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub name: String,
    pub kind: String,
    pub quantity: String,
    pub status: String,
    pub badge_class: &'static str,
    pub last_updated: String,
}

pub fn inventory_row(item: &InventoryItem) -> InventoryRow {
    let badge_class = match item.status {
        StockStatus::Ok => "ok",
        StockStatus::Low => "low",
        StockStatus::Crit => "crit",
    };
    InventoryRow {
        name: item.name.to_string(),
        kind: item.kind.to_string(),
        quantity: item.quantity.to_string(),
        status: item.status.label().to_string(),
        badge_class,
        last_updated: item.last_updated.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineCard {
    pub name: String,
    pub status_class: &'static str,
    pub status_text: String,
    pub detail: String,
    pub action_label: &'static str,
    /// Toast emitted when the card's action is triggered.
    pub action_message: String,
}

pub fn machine_card(machine: &Machine) -> MachineCard {
    MachineCard {
        name: machine.name.to_string(),
        status_class: machine.status.code(),
        status_text: format!("Status: {}", machine.status.code().to_uppercase()),
        detail: machine.detail.to_string(),
        action_label: "Check Diagnostics",
        action_message: format!("Diagnostics initiated for {}", machine.name),
    }
}

/// Everything the data-driven views display, mapped once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    pub kpis: Vec<KpiCard>,
    pub inventory: Vec<InventoryRow>,
    pub machines: Vec<MachineCard>,
}

impl DashboardData {
    pub fn load() -> Self {
        Self {
            kpis: data::kpis().iter().map(kpi_card).collect(),
            inventory: data::inventory().iter().map(inventory_row).collect(),
            machines: data::machines().iter().map(machine_card).collect(),
        }
    }
}
