use super::RiskLevel;

const LOW: &[&str] = &[
    "Continue routine monitoring",
    "Ensure drainage systems are clear",
    "Review emergency contact information",
];

const MEDIUM: &[&str] = &[
    "Activate flood monitoring teams",
    "Pre-position water pumps in low-lying areas",
    "Alert local volunteers and first responders",
    "Issue public advisory for preparedness",
];

const HIGH: &[&str] = &[
    "Deploy rescue boats to strategic locations",
    "Open emergency shelters",
    "Evacuate vulnerable populations",
    "Activate full emergency response teams",
    "Coordinate with hospitals and medical teams",
];

const EXTREME: &[&str] = &[
    "IMMEDIATE EVACUATION of all flood-prone areas",
    "Deploy all available rescue resources",
    "Request military/NDRF assistance",
    "Activate all emergency shelters",
    "Establish emergency medical camps",
    "Coordinate inter-district relief efforts",
];

/// Fixed action list for a risk level, most urgent first
pub fn recommendations_for(level: RiskLevel) -> &'static [&'static str] {
    match level {
        RiskLevel::Low => LOW,
        RiskLevel::Medium => MEDIUM,
        RiskLevel::High => HIGH,
        RiskLevel::Extreme => EXTREME,
    }
}
