//! Resource deployment plan per risk level. Constant tables; the observation
//! that produced the level has no say in the plan.

use crate::risk::RiskLevel;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Available,
    Deployed,
    Standby,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceAllocation {
    pub id: &'static str,
    pub name: &'static str,
    /// Icon name understood by the dashboard
    pub icon: &'static str,
    pub quantity: u32,
    pub status: ResourceStatus,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    quantity: u32,
    status: ResourceStatus,
) -> ResourceAllocation {
    ResourceAllocation {
        id,
        name,
        icon,
        quantity,
        status,
    }
}

use ResourceStatus::{Available, Deployed, Standby};

static LOW: [ResourceAllocation; 2] = [
    entry("monitors", "Monitoring Teams", "Eye", 2, Standby),
    entry("alerts", "Alert Systems", "Bell", 5, Available),
];

static MEDIUM: [ResourceAllocation; 4] = [
    entry("pumps", "Water Pumps", "Droplets", 10, Deployed),
    entry("volunteers", "Volunteer Teams", "Users", 50, Standby),
    entry("vehicles", "Emergency Vehicles", "Truck", 8, Available),
    entry("medics", "Medical Units", "Stethoscope", 5, Standby),
];

static HIGH: [ResourceAllocation; 6] = [
    entry("boats", "Rescue Boats", "Ship", 25, Deployed),
    entry("shelters", "Emergency Shelters", "Home", 15, Deployed),
    entry("teams", "NDRF Teams", "Shield", 5, Deployed),
    entry("helicopters", "Rescue Helicopters", "Plane", 3, Standby),
    entry("relief", "Relief Supplies", "Package", 1000, Deployed),
    entry("medics", "Medical Teams", "Stethoscope", 20, Deployed),
];

static EXTREME: [ResourceAllocation; 8] = [
    entry("boats", "Rescue Boats", "Ship", 50, Deployed),
    entry("helicopters", "Rescue Helicopters", "Plane", 8, Deployed),
    entry("shelters", "Emergency Shelters", "Home", 30, Deployed),
    entry("teams", "NDRF/Military Teams", "Shield", 15, Deployed),
    entry("relief", "Relief Supplies", "Package", 5000, Deployed),
    entry("medics", "Medical Teams", "Stethoscope", 50, Deployed),
    entry("food", "Food Distribution Centers", "Utensils", 20, Deployed),
    entry("power", "Mobile Power Units", "Zap", 15, Deployed),
];

pub fn get_resource_allocation(level: RiskLevel) -> &'static [ResourceAllocation] {
    match level {
        RiskLevel::Low => &LOW,
        RiskLevel::Medium => &MEDIUM,
        RiskLevel::High => &HIGH,
        RiskLevel::Extreme => &EXTREME,
    }
}
